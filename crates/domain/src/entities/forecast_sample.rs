//! A single sub-daily forecast data point

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Humidity, Temperature};

/// One forecast sample (the provider emits one every three hours)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Time the sample is valid for
    pub timestamp: DateTime<Utc>,
    /// Forecast temperature
    pub temperature: Temperature,
    /// Provider-reported minimum for the sample window
    pub temperature_min: Temperature,
    /// Provider-reported maximum for the sample window
    pub temperature_max: Temperature,
    /// Relative humidity
    pub humidity: Humidity,
    /// Wind speed in metres per second
    pub wind_speed: f64,
    /// Condition group, e.g. `"Rain"`
    pub condition_main: String,
    /// Condition detail, e.g. `"light rain"`
    pub condition_description: String,
    /// Provider icon code, e.g. `"10d"`
    pub icon_code: String,
}

impl ForecastSample {
    /// Calendar day of the sample in the given time zone
    #[must_use]
    pub fn calendar_day<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.timestamp.with_timezone(tz).date_naive()
    }
}
