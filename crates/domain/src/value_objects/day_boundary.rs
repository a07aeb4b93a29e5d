//! Which clock defines a calendar day when grouping forecast samples

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Time zone used to derive the calendar day of a forecast sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayBoundary {
    /// The machine's local time zone
    #[default]
    Local,
    /// The forecast location's UTC offset, as reported by the provider
    Location,
}

impl fmt::Display for DayBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Location => write!(f, "location"),
        }
    }
}

impl FromStr for DayBoundary {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "location" => Ok(Self::Location),
            _ => Err(DomainError::ValidationError(format!(
                "Invalid day boundary: {s}. Use 'local' or 'location'"
            ))),
        }
    }
}
