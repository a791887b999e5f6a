//! Configuration for the inference procedures.

/// Configuration options for bootstrap confidence-interval estimation.
#[derive(Debug, Clone)]
pub struct CiConfig {
    /// Coverage level of the interval, strictly between 0 and 1
    /// (default: 0.95).
    pub confidence: f64,

    /// Number of bootstrap trials (default: 1,000).
    ///
    /// Each trial draws one resample of the full data and records its
    /// quantile; more trials give a smoother replicate distribution.
    pub n_trials: usize,

    /// Optional deterministic seed for the resampling randomness.
    ///
    /// When `None`, a fresh seed is drawn from the OS entropy source per
    /// call, so results vary run to run. Set this for reproducible output.
    pub seed: Option<u64>,
}

impl Default for CiConfig {
    fn default() -> Self {
        Self {
            confidence: 0.95,
            n_trials: 1_000,
            seed: None,
        }
    }
}

/// Configuration options for the quantile permutation test.
#[derive(Debug, Clone)]
pub struct PermConfig {
    /// Number of label permutations to sample (default: 10,000).
    ///
    /// The smallest nonzero p-value the test can report is
    /// `1 / n_trials`.
    pub n_trials: usize,

    /// Optional deterministic seed for the shuffling randomness.
    ///
    /// When `None`, a fresh seed is drawn from the OS entropy source per
    /// call. Set this for reproducible output.
    pub seed: Option<u64>,
}

impl Default for PermConfig {
    fn default() -> Self {
        Self {
            n_trials: 10_000,
            seed: None,
        }
    }
}
