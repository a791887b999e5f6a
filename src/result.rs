//! Result types for the inference procedures.

use serde::{Deserialize, Serialize};

use crate::types::Alternative;

/// Bootstrap confidence interval for a quantile statistic.
///
/// Produced by [`QuantileCi::estimate`](crate::QuantileCi::estimate). The
/// bounds are read from the empirical distribution of the quantile across
/// bootstrap resamples; `lower <= upper` always holds, with equality
/// possible on degenerate inputs (e.g. all-equal data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval.
    pub lower: f64,

    /// Upper bound of the interval.
    pub upper: f64,

    /// Quantile probability the interval is for.
    pub q: f64,

    /// Coverage level the interval was built at.
    pub confidence: f64,

    /// Number of bootstrap trials behind the interval.
    pub n_trials: usize,
}

impl ConfidenceInterval {
    /// Width of the interval (`upper - lower`).
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Midpoint of the interval.
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Whether `value` lies inside the interval (bounds inclusive).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// The interval as a `(lower, upper)` pair.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

/// Outcome of a quantile permutation test.
///
/// Produced by [`PermutationTest::run`](crate::PermutationTest::run).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermutationTestResult {
    /// Fraction of permuted differences at least as extreme as the observed
    /// one, in the direction of the alternative. Lies in [0, 1] inclusive.
    pub p_value: f64,

    /// Observed treatment-minus-control quantile difference.
    pub observed_diff: f64,

    /// Count of permutation trials at least as extreme as the observed
    /// difference (`p_value = hits / n_trials`).
    pub hits: usize,

    /// Number of label permutations sampled.
    pub n_trials: usize,

    /// Quantile probability the test statistic is built on.
    pub q: f64,

    /// Direction of the alternative hypothesis.
    pub alternative: Alternative,
}
