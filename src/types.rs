//! Type aliases and common types.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The two label partitions compared by the permutation test.
///
/// Labels are encoded as `u8`: 0 maps to [`Group::Control`], 1 maps to
/// [`Group::Treatment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    /// Observations labeled 0.
    Control,
    /// Observations labeled 1.
    Treatment,
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Group::Control => write!(f, "control"),
            Group::Treatment => write!(f, "treatment"),
        }
    }
}

/// Direction of the alternative hypothesis in the permutation test.
///
/// The test statistic is the treatment-group quantile minus the
/// control-group quantile; the alternative states which direction the
/// manipulation is expected to shift it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alternative {
    /// Treatment quantile is smaller than the control quantile.
    Less,
    /// Treatment quantile is larger than the control quantile.
    Greater,
}

impl std::str::FromStr for Alternative {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "less" => Ok(Alternative::Less),
            "greater" => Ok(Alternative::Greater),
            other => Err(Error::InvalidArgument(format!(
                "alternative must be \"less\" or \"greater\", got {:?}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Alternative {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alternative::Less => write!(f, "less"),
            Alternative::Greater => write!(f, "greater"),
        }
    }
}
