//! Temperature value object
//!
//! Temperatures are stored in degrees Celsius. The weather provider reports
//! Kelvin, so [`Temperature::from_kelvin`] is the usual entry point for
//! wire data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Offset between the Kelvin and Celsius scales
pub const KELVIN_OFFSET: f64 = 273.15;

/// A temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Temperature(f64);

impl Temperature {
    /// Create a temperature from degrees Celsius
    #[must_use]
    pub const fn from_celsius(celsius: f64) -> Self {
        Self(celsius)
    }

    /// Create a temperature from Kelvin
    #[must_use]
    pub fn from_kelvin(kelvin: f64) -> Self {
        Self(kelvin - KELVIN_OFFSET)
    }

    /// Degrees Celsius
    #[must_use]
    pub const fn celsius(self) -> f64 {
        self.0
    }

    /// Degrees Fahrenheit (unrounded)
    #[must_use]
    pub fn fahrenheit(self) -> f64 {
        self.0.mul_add(9.0 / 5.0, 32.0)
    }

    /// The lower of two temperatures
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// The higher of two temperatures
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}
