//! Domain-level errors

use thiserror::Error;

use crate::value_objects::InvalidCoordinates;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the valid latitude/longitude range
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),

    /// Empty or malformed location query
    #[error("Invalid location query: {0}")]
    InvalidLocationQuery(String),

    /// Unknown unit preference name
    #[error("Invalid unit preference: {0}")]
    InvalidUnitPreference(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
