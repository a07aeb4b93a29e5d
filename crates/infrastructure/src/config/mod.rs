//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `weather.toml`, then `WEATHER_APP_*` environment variables. Sections:
//! - `weather`: provider endpoint, API key, forecast display
//! - `preferences`: where the unit preference is stored
//! - `telemetry`: log filter and format

mod weather;

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use secrecy::SecretString;
use serde::Deserialize;
use tracing::debug;

pub use crate::telemetry::TelemetryConfig;
pub use weather::{GeoLocationConfig, WeatherAppConfig};

/// Environment variable prefix, e.g. `WEATHER_APP_WEATHER__TIMEOUT_SECS`
pub const ENV_PREFIX: &str = "WEATHER_APP";

/// Conventional variable consulted when no key is configured otherwise
pub const FALLBACK_API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Config file looked up in the working directory (extension inferred)
pub const DEFAULT_CONFIG_FILE: &str = "weather";

/// `[preferences]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PreferencesConfig {
    /// JSON file holding the unit preference
    #[serde(default = "default_preferences_path")]
    pub path: PathBuf,
}

fn default_preferences_path() -> PathBuf {
    PathBuf::from("weather-prefs.json")
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            path: default_preferences_path(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Preference storage configuration
    #[serde(default)]
    pub preferences: PreferencesConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional file and the environment
    ///
    /// With `path` set the file must exist; otherwise `weather.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let fallback_key = std::env::var(FALLBACK_API_KEY_VAR).ok();
        Self::load_from(path, env_source(), fallback_key)
    }

    /// Load with an explicit environment source and fallback API key
    pub fn load_from(
        path: Option<&Path>,
        environment: Environment,
        fallback_api_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = Config::builder()
            // Start with defaults
            .set_default("weather.base_url", weather::default_weather_base_url())?
            .set_default("weather.timeout_secs", weather::default_weather_timeout())?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables
            .add_source(environment);

        let mut config: Self = builder.build()?.try_deserialize()?;

        if !config.weather.has_api_key() {
            if let Some(key) = fallback_api_key.filter(|k| !k.trim().is_empty()) {
                debug!(var = FALLBACK_API_KEY_VAR, "Using fallback API key variable");
                config.weather.api_key = Some(SecretString::from(key));
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject values no lookup could work with
    fn validate(&self) -> Result<(), ConfigError> {
        if self.weather.timeout_secs == 0 {
            return Err(ConfigError::Message(
                "weather.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.weather.forecast_days == 0 {
            return Err(ConfigError::Message(
                "weather.forecast_days must be greater than 0".to_string(),
            ));
        }
        if let Some(loc) = self.weather.default_location {
            if loc.to_geo_location().is_none() {
                return Err(ConfigError::Message(format!(
                    "weather.default_location out of range: {}, {}",
                    loc.latitude, loc.longitude
                )));
            }
        }
        Ok(())
    }
}

/// Environment source for `WEATHER_APP_<SECTION>__<KEY>` variables
pub fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
