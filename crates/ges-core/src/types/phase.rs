//! Search phases.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// One phase of the GES driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Greedy edge insertion.
    Forward,
    /// Greedy edge deletion.
    Backward,
}

impl Phase {
    /// Default phase sequence.
    pub const DEFAULT_SEQUENCE: [Phase; 2] = [Phase::Forward, Phase::Backward];

    /// Parse from string (matching the serde rename).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "forward" => Some(Self::Forward),
            "backward" => Some(Self::Backward),
            _ => None,
        }
    }

    /// String name for this phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }

    /// Parse a phase list, failing on the first unrecognized name.
    pub fn parse_list<S: AsRef<str>>(names: &[S]) -> Result<Vec<Phase>, ConfigError> {
        names.iter().map(|n| n.as_ref().parse()).collect()
    }
}

impl FromStr for Phase {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_name(s.trim()).ok_or_else(|| ConfigError::UnknownPhase {
            name: s.to_string(),
        })
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
