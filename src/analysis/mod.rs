//! Inference procedures built on the resampling primitives.
//!
//! - [`QuantileCi`]: bootstrap confidence interval for a quantile
//! - [`PermutationTest`]: permutation test of a between-group quantile
//!   difference

mod bootstrap_ci;
mod permutation;

pub use bootstrap_ci::QuantileCi;
pub use permutation::PermutationTest;
