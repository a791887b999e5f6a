//! # quantile-resample
//!
//! Resampling-based inference for quantile statistics, with no
//! distributional assumptions:
//! - Bootstrap confidence intervals for an arbitrary quantile of a sample
//! - Permutation tests comparing a quantile between two labeled groups
//!
//! Both procedures share one quantile rule (linear interpolation between
//! order statistics) and one seeding scheme (independent per-trial RNG
//! streams), so seeded results are bit-identical across runs, and across
//! the serial and parallel trial loops.
//!
//! ## Quick Start
//!
//! ```
//! use quantile_resample::{quantile_permtest, Alternative, QuantileCi};
//!
//! // 95% bootstrap CI for the median, reproducible via an explicit seed
//! let data: Vec<f64> = (1..=10).map(f64::from).collect();
//! let ci = QuantileCi::new(0.5).seed(42).estimate(&data)?;
//! assert!(ci.lower <= ci.upper);
//!
//! // One-sided permutation test: is the treatment median larger?
//! let values = [2.1, 1.9, 2.0, 2.2, 3.1, 2.9, 3.0, 3.2];
//! let labels = [0u8, 0, 0, 0, 1, 1, 1, 1];
//! let p = quantile_permtest(&values, &labels, 0.5, Alternative::Greater)?;
//! assert!((0.0..=1.0).contains(&p));
//! # Ok::<(), quantile_resample::Error>(())
//! ```
//!
//! ## Reproducibility
//!
//! There is no global generator state. Calls without a seed draw one from
//! the OS entropy source; calls with `.seed(n)` are fully deterministic,
//! regardless of thread count or the `parallel` feature.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod error;
mod result;
#[cfg(feature = "parallel")]
mod thread_pool;
mod types;

// Functional modules
pub mod analysis;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use analysis::{PermutationTest, QuantileCi};
pub use config::{CiConfig, PermConfig};
pub use error::{Error, Result};
pub use result::{ConfidenceInterval, PermutationTestResult};
pub use types::{Alternative, Group};

/// Convenience function: bootstrap confidence interval for a quantile with
/// default settings (95% confidence, 1,000 trials, entropy-seeded).
///
/// Use [`QuantileCi`] directly to control confidence, trial count, or the
/// seed, and to get the full [`ConfidenceInterval`] result.
///
/// # Arguments
///
/// * `data` - Non-empty slice of observations
/// * `q` - Quantile probability in [0, 1]
///
/// # Returns
///
/// The `(lower, upper)` interval bounds, with `lower <= upper`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `data` is empty or `q` is outside
/// [0, 1].
pub fn quantile_ci(data: &[f64], q: f64) -> Result<(f64, f64)> {
    QuantileCi::new(q).estimate(data).map(|ci| ci.as_tuple())
}

/// Convenience function: one-sided quantile permutation test with default
/// settings (10,000 trials, entropy-seeded).
///
/// Use [`PermutationTest`] directly to control the trial count or seed, and
/// to get the full [`PermutationTestResult`].
///
/// # Arguments
///
/// * `values` - Observations from both groups
/// * `labels` - Binary group labels (0 = control, 1 = treatment), same
///   length as `values`
/// * `q` - Quantile probability in [0, 1]
/// * `alternative` - Direction of the alternative hypothesis
///
/// # Returns
///
/// The p-value in [0, 1]; smaller means stronger evidence against the null
/// of exchangeable labels.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for mismatched lengths, non-binary
/// labels, or out-of-range `q`; [`Error::DegenerateGroup`] if all labels
/// are identical.
pub fn quantile_permtest(
    values: &[f64],
    labels: &[u8],
    q: f64,
    alternative: Alternative,
) -> Result<f64> {
    PermutationTest::new(q, alternative)
        .run(values, labels)
        .map(|result| result.p_value)
}
