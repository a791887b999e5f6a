//! Output formatting for inference results.

pub mod json;

pub use json::{to_json, to_json_pretty};
