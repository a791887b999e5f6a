//! Permutation test for a between-group quantile difference.
//!
//! The observed statistic is the treatment-group quantile minus the
//! control-group quantile. Its null distribution is estimated by uniformly
//! reshuffling the label vector (group sizes preserved) and recomputing the
//! difference; the p-value is the fraction of reshuffled differences at
//! least as extreme as the observed one in the direction of the
//! alternative.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::PermConfig;
use crate::error::{Error, Result};
use crate::result::PermutationTestResult;
use crate::statistics::{compute_quantile, counter_rng_seed, permuted_labels_into};
#[cfg(feature = "parallel")]
use crate::thread_pool;
use crate::types::{Alternative, Group};

/// Permutation test comparing a quantile between two labeled groups.
///
/// Configure with the builder methods, then call [`run`](Self::run).
///
/// # Example
///
/// ```
/// use quantile_resample::{Alternative, PermutationTest};
///
/// let values = [1.0, 1.0, 1.0, 1.0, 10.0, 10.0, 10.0, 10.0];
/// let labels = [0u8, 0, 0, 0, 1, 1, 1, 1];
///
/// let result = PermutationTest::new(0.5, Alternative::Greater)
///     .trials(1_000)
///     .seed(42)
///     .run(&values, &labels)?;
///
/// assert_eq!(result.observed_diff, 9.0);
/// assert!(result.p_value < 0.1);
/// # Ok::<(), quantile_resample::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct PermutationTest {
    q: f64,
    alternative: Alternative,
    config: PermConfig,
}

impl PermutationTest {
    /// Create a test of the q-th quantile with default configuration
    /// (10,000 trials, entropy-seeded).
    pub fn new(q: f64, alternative: Alternative) -> Self {
        Self {
            q,
            alternative,
            config: PermConfig::default(),
        }
    }

    /// Create a test from an explicit configuration.
    pub fn with_config(q: f64, alternative: Alternative, config: PermConfig) -> Self {
        Self {
            q,
            alternative,
            config,
        }
    }

    /// Set the number of sampled label permutations (default 10,000).
    pub fn trials(mut self, n_trials: usize) -> Self {
        self.config.n_trials = n_trials;
        self
    }

    /// Fix the random seed for reproducible p-values.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Run the test on `values` with binary group `labels`.
    ///
    /// Label 0 assigns an observation to the control group, label 1 to the
    /// treatment group. The p-value comparison against the observed
    /// difference is boundary-inclusive (`<=` under [`Alternative::Less`],
    /// `>=` under [`Alternative::Greater`]), so the smallest nonzero
    /// p-value is `1 / n_trials`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the slices are empty or of
    /// different lengths, a label is neither 0 nor 1, `q` is outside
    /// [0, 1], or `n_trials` is zero; [`Error::DegenerateGroup`] if all
    /// labels are identical, leaving one group empty. All checks run
    /// before any trial work.
    pub fn run(&self, values: &[f64], labels: &[u8]) -> Result<PermutationTestResult> {
        self.validate(values, labels)?;

        let observed_diff = quantile_diff(values, labels, self.q);

        let base_seed = self
            .config
            .seed
            .unwrap_or_else(|| rand::rng().random::<u64>());

        let diffs = null_distribution(values, labels, self.q, self.config.n_trials, base_seed);

        // Boundary-inclusive tail count in the direction of the alternative
        let hits = match self.alternative {
            Alternative::Less => diffs.iter().filter(|&&d| d <= observed_diff).count(),
            Alternative::Greater => diffs.iter().filter(|&&d| d >= observed_diff).count(),
        };
        let p_value = hits as f64 / self.config.n_trials as f64;

        Ok(PermutationTestResult {
            p_value,
            observed_diff,
            hits,
            n_trials: self.config.n_trials,
            q: self.q,
            alternative: self.alternative,
        })
    }

    fn validate(&self, values: &[f64], labels: &[u8]) -> Result<()> {
        if values.is_empty() {
            return Err(Error::InvalidArgument("values must not be empty".into()));
        }
        if values.len() != labels.len() {
            return Err(Error::InvalidArgument(format!(
                "values and labels must have the same length ({} vs {})",
                values.len(),
                labels.len()
            )));
        }
        if let Some(bad) = labels.iter().find(|&&l| l > 1) {
            return Err(Error::InvalidArgument(format!(
                "labels must be 0 or 1, got {}",
                bad
            )));
        }
        if !(0.0..=1.0).contains(&self.q) {
            return Err(Error::InvalidArgument(format!(
                "q must be in [0, 1], got {}",
                self.q
            )));
        }
        if self.config.n_trials == 0 {
            return Err(Error::InvalidArgument(
                "n_trials must be at least 1".into(),
            ));
        }

        let n_treatment = labels.iter().filter(|&&l| l == 1).count();
        if n_treatment == 0 {
            return Err(Error::DegenerateGroup(Group::Treatment));
        }
        if n_treatment == labels.len() {
            return Err(Error::DegenerateGroup(Group::Control));
        }
        Ok(())
    }
}

/// Split `values` by label into the two group buffers.
fn partition_into(
    values: &[f64],
    labels: &[u8],
    treatment: &mut Vec<f64>,
    control: &mut Vec<f64>,
) {
    treatment.clear();
    control.clear();
    for (&value, &label) in values.iter().zip(labels) {
        if label == 1 {
            treatment.push(value);
        } else {
            control.push(value);
        }
    }
}

/// Treatment-minus-control quantile difference for one labeling.
fn quantile_diff(values: &[f64], labels: &[u8], q: f64) -> f64 {
    let mut treatment = Vec::new();
    let mut control = Vec::new();
    partition_into(values, labels, &mut treatment, &mut control);
    compute_quantile(&mut treatment, q) - compute_quantile(&mut control, q)
}

/// Per-trial scratch space: label buffer plus the two group buffers.
///
/// Group sizes are invariant under reshuffling, so the buffers never grow
/// past their initial capacity.
fn make_scratch(labels: &[u8]) -> (Vec<u8>, Vec<f64>, Vec<f64>) {
    let n_treatment = labels.iter().filter(|&&l| l == 1).count();
    (
        vec![0u8; labels.len()],
        Vec::with_capacity(n_treatment),
        Vec::with_capacity(labels.len() - n_treatment),
    )
}

/// Collect the null distribution: one reshuffled difference per trial.
///
/// Trial `i` draws its RNG stream from `counter_rng_seed(base_seed, i)`, so
/// the parallel and serial paths produce identical null sets for a fixed
/// seed.
fn null_distribution(
    values: &[f64],
    labels: &[u8],
    q: f64,
    n_trials: usize,
    base_seed: u64,
) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        thread_pool::install(|| {
            (0..n_trials)
                .into_par_iter()
                .map_init(
                    || make_scratch(labels),
                    |scratch, i| {
                        let (label_buf, treatment, control) = scratch;
                        let mut rng = Xoshiro256PlusPlus::seed_from_u64(counter_rng_seed(
                            base_seed, i as u64,
                        ));
                        permuted_labels_into(labels, &mut rng, label_buf);
                        partition_into(values, label_buf, treatment, control);
                        compute_quantile(treatment, q) - compute_quantile(control, q)
                    },
                )
                .collect()
        })
    }

    #[cfg(not(feature = "parallel"))]
    {
        let (mut label_buf, mut treatment, mut control) = make_scratch(labels);
        let mut diffs = Vec::with_capacity(n_trials);

        for i in 0..n_trials {
            let mut rng =
                Xoshiro256PlusPlus::seed_from_u64(counter_rng_seed(base_seed, i as u64));
            permuted_labels_into(labels, &mut rng, &mut label_buf);
            partition_into(values, &label_buf, &mut treatment, &mut control);
            diffs.push(compute_quantile(&mut treatment, q) - compute_quantile(&mut control, q));
        }
        diffs
    }
}
