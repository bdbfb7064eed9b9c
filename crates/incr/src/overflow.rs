use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What an increment does when its input is already the maximum of its type.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Report [`IncrError::Overflow`]
    #[default]
    Checked,
    /// Wrap around to `MIN`
    Wrapping,
    /// Stay at `MAX`
    Saturating,
}

impl Overflow {
    pub const ALL: [Overflow; 3] = [Overflow::Checked, Overflow::Wrapping, Overflow::Saturating];

    pub fn as_str(self) -> &'static str {
        match self {
            Overflow::Checked => "checked",
            Overflow::Wrapping => "wrapping",
            Overflow::Saturating => "saturating",
        }
    }
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Overflow {
    type Err = ParseOverflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Overflow::ALL
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseOverflowError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown overflow policy `{0}` (expected one of: checked, wrapping, saturating)")]
pub struct ParseOverflowError(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IncrError {
    #[error("{ty}::MAX cannot be incremented without overflow")]
    Overflow { ty: &'static str },
}
