//! Multi-day forecast as received from the provider

use serde::{Deserialize, Serialize};

use super::{DailyForecast, ForecastSample};
use crate::aggregation::aggregate_with_boundary;
use crate::value_objects::DayBoundary;

/// Raw forecast: time-ordered samples plus the location they belong to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Resolved place name
    pub location_name: String,
    /// ISO country code, when known
    pub country: Option<String>,
    /// Location's offset from UTC in seconds
    pub utc_offset_seconds: i32,
    /// Samples in the order the provider sent them
    pub samples: Vec<ForecastSample>,
}

impl Forecast {
    /// Collapse the samples into one entry per calendar day
    #[must_use]
    pub fn daily(&self, boundary: DayBoundary) -> Vec<DailyForecast> {
        aggregate_with_boundary(&self.samples, boundary, self.utc_offset_seconds)
    }
}
