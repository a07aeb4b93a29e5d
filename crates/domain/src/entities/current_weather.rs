//! Current conditions at a location

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoLocation, Humidity, Temperature};

/// Current weather as reported by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Resolved place name, e.g. `"London"`
    pub location_name: String,
    /// ISO country code, when the provider knows it
    pub country: Option<String>,
    /// Coordinates the provider resolved the query to
    pub coordinates: Option<GeoLocation>,
    /// Observation time
    pub observed_at: DateTime<Utc>,
    /// Temperature
    pub temperature: Temperature,
    /// Apparent temperature
    pub feels_like: Temperature,
    /// Minimum currently observed across the area
    pub temperature_min: Temperature,
    /// Maximum currently observed across the area
    pub temperature_max: Temperature,
    /// Relative humidity
    pub humidity: Humidity,
    /// Wind speed in metres per second
    pub wind_speed: f64,
    /// Condition group, e.g. `"Clear"`
    pub condition_main: String,
    /// Condition detail, e.g. `"clear sky"`
    pub condition_description: String,
    /// Provider icon code
    pub icon_code: String,
    /// Location's offset from UTC in seconds
    pub utc_offset_seconds: i32,
}

impl CurrentWeather {
    /// Heading line, e.g. `"Weather in London (GB)"`
    #[must_use]
    pub fn headline(&self) -> String {
        match &self.country {
            Some(country) => format!("Weather in {} ({country})", self.location_name),
            None => format!("Weather in {}", self.location_name),
        }
    }

    /// `"{main} - {description}"`
    #[must_use]
    pub fn condition_line(&self) -> String {
        format!("{} - {}", self.condition_main, self.condition_description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn london() -> CurrentWeather {
        CurrentWeather {
            location_name: "London".to_string(),
            country: Some("GB".to_string()),
            coordinates: GeoLocation::new(51.5085, -0.1257).ok(),
            observed_at: Utc::now(),
            temperature: Temperature::from_celsius(11.3),
            feels_like: Temperature::from_celsius(10.1),
            temperature_min: Temperature::from_celsius(9.8),
            temperature_max: Temperature::from_celsius(12.6),
            humidity: Humidity::clamped(81),
            wind_speed: 4.6,
            condition_main: "Clouds".to_string(),
            condition_description: "overcast clouds".to_string(),
            icon_code: "04d".to_string(),
            utc_offset_seconds: 0,
        }
    }

    #[test]
    fn headline_includes_country() {
        assert_eq!(london().headline(), "Weather in London (GB)");
    }

    #[test]
    fn headline_without_country() {
        let weather = CurrentWeather {
            country: None,
            ..london()
        };
        assert_eq!(weather.headline(), "Weather in London");
    }

    #[test]
    fn condition_line() {
        assert_eq!(london().condition_line(), "Clouds - overcast clouds");
    }
}
