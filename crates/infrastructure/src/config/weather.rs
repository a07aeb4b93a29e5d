//! Weather provider and session settings

use application::{ApplicationError, SessionSettings};
use domain::{DayBoundary, GeoLocation, LocationQuery};
use integration_weather::WeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// `[weather]` section
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherAppConfig {
    /// Provider base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// OpenWeatherMap API key
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,

    /// Number of daily forecast entries to show
    #[serde(default = "default_forecast_days")]
    pub forecast_days: usize,

    /// Calendar used to group forecast samples into days
    #[serde(default)]
    pub day_boundary: DayBoundary,

    /// City looked up when none is given on the command line
    #[serde(default)]
    pub default_city: Option<String>,

    /// Coordinates looked up when neither a city nor coordinates are given
    #[serde(default)]
    pub default_location: Option<GeoLocationConfig>,
}

/// Geographic location configuration (latitude/longitude pair)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GeoLocationConfig {
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

impl GeoLocationConfig {
    /// Convert to domain `GeoLocation` value object
    ///
    /// Returns `None` if coordinates are invalid.
    #[must_use]
    pub fn to_geo_location(&self) -> Option<GeoLocation> {
        GeoLocation::new(self.latitude, self.longitude).ok()
    }
}

pub(super) fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

pub(super) const fn default_weather_timeout() -> u64 {
    30
}

const fn default_forecast_days() -> usize {
    application::DEFAULT_FORECAST_DAYS
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            api_key: None,
            timeout_secs: default_weather_timeout(),
            forecast_days: default_forecast_days(),
            day_boundary: DayBoundary::default(),
            default_city: None,
            default_location: None,
        }
    }
}

impl WeatherAppConfig {
    /// Whether a non-blank API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Build the HTTP client configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if no API key is set.
    pub fn client_config(&self) -> Result<WeatherConfig, ApplicationError> {
        let api_key = self
            .api_key
            .as_ref()
            .filter(|_| self.has_api_key())
            .ok_or_else(|| {
                ApplicationError::Configuration(
                    "weather API key missing: set WEATHER_APP_WEATHER__API_KEY or OPENWEATHER_API_KEY"
                        .to_string(),
                )
            })?;

        Ok(WeatherConfig {
            base_url: self.base_url.clone(),
            api_key: api_key.clone(),
            timeout_secs: self.timeout_secs,
        })
    }

    /// Session tunables derived from this section
    pub const fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            forecast_days: self.forecast_days,
            day_boundary: self.day_boundary,
        }
    }

    /// Location to use when the user did not name one
    ///
    /// Configured coordinates win over a configured city.
    pub fn default_query(&self) -> Option<LocationQuery> {
        self.default_location
            .and_then(|loc| loc.to_geo_location())
            .map(LocationQuery::Coordinates)
            .or_else(|| {
                self.default_city
                    .as_deref()
                    .and_then(|city| LocationQuery::city(city).ok())
            })
    }
}
