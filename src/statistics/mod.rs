//! Statistical primitives shared by the inference procedures.
//!
//! - Quantile computation with a single interpolation rule (R-7)
//! - I.i.d. bootstrap resampling and label reshuffling
//! - Counter-based seed derivation for independent per-trial RNG streams

mod quantile;
mod resample;

pub use quantile::{compute_quantile, quantile_inplace, quantile_sorted};
pub use resample::{counter_rng_seed, permuted_labels_into, resample, resample_into};
