//! RPM range parsing for transmission rows

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inclusive RPM range parsed from a transmission row's description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpmRange {
    pub min: u32,
    pub max: u32,
}

/// Transmission description text that does not parse to `"<min> a <max>"`
/// or `"<min>-<max>"`.
#[derive(Debug, Error, PartialEq)]
#[error("unrecognized RPM range: {0:?}")]
pub struct RpmParseError(pub String);

impl RpmRange {
    /// Parse `"301 a 2000"` or `"301-2000"`; the separator word is
    /// case-insensitive and surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Result<Self, RpmParseError> {
        let normalized = text.to_lowercase().replace(" a ", "-");
        let mut parts = normalized.trim().split('-');

        match (parts.next(), parts.next(), parts.next()) {
            (Some(min), Some(max), None) => {
                let min = min
                    .trim()
                    .parse()
                    .map_err(|_| RpmParseError(text.to_string()))?;
                let max = max
                    .trim()
                    .parse()
                    .map_err(|_| RpmParseError(text.to_string()))?;
                Ok(RpmRange { min, max })
            }
            _ => Err(RpmParseError(text.to_string())),
        }
    }

    pub fn contains(&self, rpm: u32) -> bool {
        self.min <= rpm && rpm <= self.max
    }
}

impl std::fmt::Display for RpmRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
