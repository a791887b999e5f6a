//! Error types for the public inference API.
//!
//! Every precondition is checked before any trial work begins, so a
//! returned error means no resampling happened and there is no partial
//! state to clean up.

use crate::types::Group;

/// Error type for contract violations in the public API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was out of range, malformed, or inconsistent with the
    /// others (empty data, q outside [0, 1], zero trials, mismatched
    /// lengths, non-binary labels, unrecognized alternative).
    InvalidArgument(String),

    /// The label vector assigns no observations to one of the two groups,
    /// so a between-group quantile difference is undefined.
    DegenerateGroup(Group),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            Error::DegenerateGroup(group) => {
                write!(f, "degenerate partition: {} group is empty", group)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
