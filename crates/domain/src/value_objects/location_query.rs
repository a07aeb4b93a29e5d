//! Location query value object
//!
//! What the user asked for: a city name typed into the prompt, or a
//! shared geolocation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::GeoLocation;
use crate::errors::DomainError;

/// A weather lookup target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum LocationQuery {
    /// Free-text city name, passed to the provider as-is (e.g. `"Paris,FR"`)
    City(String),
    /// Latitude/longitude pair
    Coordinates(GeoLocation),
}

impl LocationQuery {
    /// Create a city query
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLocationQuery` if the name is blank.
    pub fn city(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidLocationQuery(
                "city name must not be empty".to_string(),
            ));
        }
        Ok(Self::City(trimmed.to_string()))
    }

    /// Create a coordinate query
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if the pair is out of range.
    pub fn coordinates(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        Ok(Self::Coordinates(GeoLocation::new(latitude, longitude)?))
    }

    /// Interpret free-form user input
    ///
    /// `"52.52,13.40"` becomes a coordinate query, anything else a city.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLocationQuery` if the input is blank.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        input
            .parse::<GeoLocation>()
            .map_or_else(|_| Self::city(input), |loc| Ok(Self::Coordinates(loc)))
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::City(name) => f.write_str(name),
            Self::Coordinates(loc) => write!(f, "{loc}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_trims_whitespace() {
        let q = LocationQuery::city("  Lisbon ").expect("valid");
        assert_eq!(q, LocationQuery::City("Lisbon".to_string()));
    }

    #[test]
    fn blank_city_rejected() {
        assert!(matches!(
            LocationQuery::city("   "),
            Err(DomainError::InvalidLocationQuery(_))
        ));
    }

    #[test]
    fn coordinates_validated() {
        assert!(LocationQuery::coordinates(48.85, 2.35).is_ok());
        assert!(matches!(
            LocationQuery::coordinates(120.0, 2.35),
            Err(DomainError::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn parse_prefers_coordinates() {
        let q = LocationQuery::parse("48.85, 2.35").expect("valid");
        assert!(matches!(q, LocationQuery::Coordinates(_)));

        let q = LocationQuery::parse("Paris,FR").expect("valid");
        assert_eq!(q, LocationQuery::City("Paris,FR".to_string()));
    }

    #[test]
    fn display() {
        assert_eq!(LocationQuery::City("Oslo".into()).to_string(), "Oslo");
        let q = LocationQuery::coordinates(59.91, 10.75).expect("valid");
        assert_eq!(q.to_string(), "59.9100, 10.7500");
    }
}
