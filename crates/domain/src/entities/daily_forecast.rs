//! One-per-day forecast summary

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ForecastSample;
use crate::value_objects::{Humidity, Temperature};

/// Forecast summary for one calendar day
///
/// Descriptive fields come from the first sample of the day; the
/// temperature range spans every sample of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Calendar day this entry summarizes
    pub date: NaiveDate,
    /// Timestamp of the representative (first) sample
    pub timestamp: DateTime<Utc>,
    /// Temperature of the representative sample
    pub temperature: Temperature,
    /// Lowest sample temperature of the day
    pub temperature_min: Temperature,
    /// Highest sample temperature of the day
    pub temperature_max: Temperature,
    /// Relative humidity of the representative sample
    pub humidity: Humidity,
    /// Wind speed (m/s) of the representative sample
    pub wind_speed: f64,
    /// Condition group of the representative sample
    pub condition_main: String,
    /// Condition detail of the representative sample
    pub condition_description: String,
    /// Icon code of the representative sample
    pub icon_code: String,
    /// Number of samples folded into this entry
    pub sample_count: usize,
}

impl DailyForecast {
    /// Start a day from its first sample
    #[must_use]
    pub fn first_of_day(date: NaiveDate, sample: &ForecastSample) -> Self {
        Self {
            date,
            timestamp: sample.timestamp,
            temperature: sample.temperature,
            temperature_min: sample.temperature,
            temperature_max: sample.temperature,
            humidity: sample.humidity,
            wind_speed: sample.wind_speed,
            condition_main: sample.condition_main.clone(),
            condition_description: sample.condition_description.clone(),
            icon_code: sample.icon_code.clone(),
            sample_count: 1,
        }
    }

    /// Fold a later sample of the same day into the temperature range
    pub fn absorb(&mut self, sample: &ForecastSample) {
        self.temperature_min = self.temperature_min.min(sample.temperature);
        self.temperature_max = self.temperature_max.max(sample.temperature);
        self.sample_count += 1;
    }
}
