//! Bootstrap confidence intervals for quantile statistics.
//!
//! Repeatedly resamples the data with replacement, records the quantile of
//! each resample, and reads a central interval off the sorted replicate
//! distribution. No distributional assumptions are made about the data.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::CiConfig;
use crate::error::{Error, Result};
use crate::result::ConfidenceInterval;
use crate::statistics::{compute_quantile, counter_rng_seed, quantile_sorted, resample_into};
#[cfg(feature = "parallel")]
use crate::thread_pool;

/// Bootstrap confidence-interval estimator for a quantile.
///
/// Configure with the builder methods, then call [`estimate`](Self::estimate).
///
/// # Example
///
/// ```
/// use quantile_resample::QuantileCi;
///
/// let data: Vec<f64> = (1..=20).map(f64::from).collect();
/// let ci = QuantileCi::new(0.5)
///     .confidence(0.9)
///     .trials(500)
///     .seed(42)
///     .estimate(&data)?;
///
/// assert!(ci.lower <= ci.upper);
/// assert!(ci.lower >= 1.0 && ci.upper <= 20.0);
/// # Ok::<(), quantile_resample::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct QuantileCi {
    q: f64,
    config: CiConfig,
}

impl QuantileCi {
    /// Create an estimator for the q-th quantile with default configuration
    /// (95% confidence, 1,000 trials, entropy-seeded).
    pub fn new(q: f64) -> Self {
        Self {
            q,
            config: CiConfig::default(),
        }
    }

    /// Create an estimator from an explicit configuration.
    pub fn with_config(q: f64, config: CiConfig) -> Self {
        Self { q, config }
    }

    /// Set the coverage level (default 0.95). Must be strictly between
    /// 0 and 1.
    pub fn confidence(mut self, confidence: f64) -> Self {
        self.config.confidence = confidence;
        self
    }

    /// Set the number of bootstrap trials (default 1,000).
    pub fn trials(mut self, n_trials: usize) -> Self {
        self.config.n_trials = n_trials;
        self
    }

    /// Fix the random seed for reproducible intervals.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Estimate the confidence interval for the configured quantile.
    ///
    /// Runs `n_trials` independent bootstrap resamples of `data`, records
    /// the quantile of each, then reads the bounds at the
    /// `(1 - confidence) / 2` and `(1 + confidence) / 2` percentiles of the
    /// sorted replicate set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `data` is empty, `q` is
    /// outside [0, 1], `confidence` is not strictly between 0 and 1, or
    /// `n_trials` is zero. All checks run before any trial work.
    pub fn estimate(&self, data: &[f64]) -> Result<ConfidenceInterval> {
        self.validate(data)?;

        let base_seed = self
            .config
            .seed
            .unwrap_or_else(|| rand::rng().random::<u64>());

        let mut replicates =
            replicate_quantiles(data, self.q, self.config.n_trials, base_seed);
        replicates.sort_unstable_by(|a, b| a.total_cmp(b));

        let lower = quantile_sorted(&replicates, (1.0 - self.config.confidence) / 2.0);
        let upper = quantile_sorted(&replicates, (1.0 + self.config.confidence) / 2.0);

        Ok(ConfidenceInterval {
            lower,
            upper,
            q: self.q,
            confidence: self.config.confidence,
            n_trials: self.config.n_trials,
        })
    }

    fn validate(&self, data: &[f64]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::InvalidArgument("data must not be empty".into()));
        }
        if !(0.0..=1.0).contains(&self.q) {
            return Err(Error::InvalidArgument(format!(
                "q must be in [0, 1], got {}",
                self.q
            )));
        }
        if !(self.config.confidence > 0.0 && self.config.confidence < 1.0) {
            return Err(Error::InvalidArgument(format!(
                "confidence must be strictly between 0 and 1, got {}",
                self.config.confidence
            )));
        }
        if self.config.n_trials == 0 {
            return Err(Error::InvalidArgument(
                "n_trials must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Collect the bootstrap replicate set: one quantile per trial.
///
/// Trial `i` draws its RNG stream from `counter_rng_seed(base_seed, i)`,
/// which makes the output independent of scheduling - the parallel and
/// serial paths produce identical replicate sets for a fixed seed.
fn replicate_quantiles(data: &[f64], q: f64, n_trials: usize, base_seed: u64) -> Vec<f64> {
    let n = data.len();

    #[cfg(feature = "parallel")]
    {
        thread_pool::install(|| {
            (0..n_trials)
                .into_par_iter()
                .map_init(
                    // Per-thread scratch buffer for the resample
                    || vec![0.0; n],
                    |buffer, i| {
                        let mut rng = Xoshiro256PlusPlus::seed_from_u64(counter_rng_seed(
                            base_seed, i as u64,
                        ));
                        resample_into(data, &mut rng, buffer);
                        compute_quantile(buffer, q)
                    },
                )
                .collect()
        })
    }

    #[cfg(not(feature = "parallel"))]
    {
        let mut replicates = Vec::with_capacity(n_trials);
        let mut buffer = vec![0.0; n];

        for i in 0..n_trials {
            let mut rng =
                Xoshiro256PlusPlus::seed_from_u64(counter_rng_seed(base_seed, i as u64));
            resample_into(data, &mut rng, &mut buffer);
            replicates.push(compute_quantile(&mut buffer, q));
        }
        replicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> Vec<f64> {
        (1..=10).map(|x| x as f64).collect()
    }

    #[test]
    fn test_rejects_empty_data() {
        let err = QuantileCi::new(0.5).estimate(&[]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_rejects_out_of_range_q() {
        for q in [-0.1, 1.1, f64::NAN] {
            let err = QuantileCi::new(q).estimate(&sample_data()).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "q={}", q);
        }
    }

    #[test]
    fn test_rejects_bad_confidence() {
        for c in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let err = QuantileCi::new(0.5)
                .confidence(c)
                .estimate(&sample_data())
                .unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "confidence={}", c);
        }
    }

    #[test]
    fn test_rejects_zero_trials() {
        let err = QuantileCi::new(0.5)
            .trials(0)
            .estimate(&sample_data())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_seeded_estimates_are_identical() {
        let data = sample_data();
        let run = || {
            QuantileCi::new(0.5)
                .trials(300)
                .seed(1234)
                .estimate(&data)
                .unwrap()
        };

        let first = run();
        let second = run();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bounds_ordered_and_within_data_range() {
        let data = sample_data();
        for seed in 0..20 {
            let ci = QuantileCi::new(0.5)
                .trials(200)
                .seed(seed)
                .estimate(&data)
                .unwrap();
            assert!(ci.lower <= ci.upper);
            assert!(ci.lower >= 1.0, "lower={} below data min", ci.lower);
            assert!(ci.upper <= 10.0, "upper={} above data max", ci.upper);
        }
    }

    #[test]
    fn test_constant_data_collapses_interval() {
        let data = vec![3.0; 25];
        let ci = QuantileCi::new(0.8)
            .trials(100)
            .seed(9)
            .estimate(&data)
            .unwrap();
        assert_eq!(ci.lower, 3.0);
        assert_eq!(ci.upper, 3.0);
        assert_eq!(ci.width(), 0.0);
    }

    #[test]
    fn test_single_observation() {
        let ci = QuantileCi::new(0.5)
            .trials(50)
            .seed(0)
            .estimate(&[42.0])
            .unwrap();
        assert_eq!(ci.as_tuple(), (42.0, 42.0));
    }

    #[test]
    fn test_width_non_decreasing_in_confidence() {
        // Same seed means the replicate set is identical across levels;
        // only the central read changes
        let data = sample_data();
        let mut prev_width = 0.0;
        for confidence in [0.5, 0.8, 0.9, 0.95, 0.99] {
            let ci = QuantileCi::new(0.5)
                .confidence(confidence)
                .trials(500)
                .seed(77)
                .estimate(&data)
                .unwrap();
            assert!(
                ci.width() >= prev_width,
                "width shrank at confidence {}",
                confidence
            );
            prev_width = ci.width();
        }
    }

    #[test]
    fn test_extreme_quantiles() {
        let data = sample_data();
        let low = QuantileCi::new(0.0).trials(200).seed(5).estimate(&data).unwrap();
        let high = QuantileCi::new(1.0).trials(200).seed(5).estimate(&data).unwrap();
        assert!(low.lower >= 1.0 && low.upper <= 10.0);
        assert!(high.lower >= 1.0 && high.upper <= 10.0);
        assert!(low.midpoint() <= high.midpoint());
    }
}
