//! OpenWeatherMap weather client
//!
//! HTTP client for the OpenWeatherMap 2.5 API: current conditions and the
//! five-day, three-hourly forecast.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{
    CurrentWeather, Forecast, ForecastSample, GeoLocation, Humidity, LocationQuery, Temperature,
};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{ConditionData, CurrentResponse, ErrorBody, ForecastEntry, ForecastResponse};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates")]
    InvalidCoordinates,

    /// The query cannot be sent as-is
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The API key was missing or rejected
    #[error("Unauthorized: check the weather API key")]
    Unauthorized,

    /// The provider does not know the requested location
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather client configuration
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    pub base_url: String,

    /// API key sent as the `appid` query parameter
    pub api_key: SecretString,

    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
            api_key: SecretString::from(String::new()),
            timeout_secs: 30,
        }
    }
}

impl WeatherConfig {
    /// Default configuration with the given API key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            ..Self::default()
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current weather for a city or coordinates
    async fn get_current(&self, query: &LocationQuery) -> Result<CurrentWeather, WeatherError>;

    /// Get the three-hourly forecast for a city or coordinates
    async fn get_forecast(&self, query: &LocationQuery) -> Result<Forecast, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("weather-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Query parameters selecting the location, plus the API key
    fn query_params(&self, query: &LocationQuery) -> Result<Vec<(&'static str, String)>, WeatherError> {
        let mut params = match query {
            LocationQuery::City(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(WeatherError::InvalidQuery(
                        "city name must not be empty".to_string(),
                    ));
                }
                vec![("q", name.to_string())]
            },
            LocationQuery::Coordinates(loc) => {
                // Deserialized locations skip the constructor's range check
                let loc = GeoLocation::new(loc.latitude(), loc.longitude())
                    .map_err(|_| WeatherError::InvalidCoordinates)?;
                vec![
                    ("lat", loc.latitude().to_string()),
                    ("lon", loc.longitude().to_string()),
                ]
            },
        };
        params.push(("appid", self.config.api_key.expose_secret().to_string()));
        Ok(params)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// Issue a GET and deserialize a successful JSON body
    async fn fetch<T>(&self, path: &str, query: &LocationQuery) -> Result<T, WeatherError>
    where
        T: serde::de::DeserializeOwned,
    {
        let params = self.query_params(query)?;
        let url = self.endpoint(path);
        debug!(endpoint = %path, "Requesting weather provider");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    WeatherError::ConnectionFailed(e.to_string())
                } else {
                    WeatherError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, &body, query));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }

    /// Classify a non-success response
    fn status_error(status: StatusCode, body: &str, query: &LocationQuery) -> WeatherError {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.message)
            .unwrap_or_default();

        match status {
            StatusCode::UNAUTHORIZED => WeatherError::Unauthorized,
            StatusCode::NOT_FOUND => WeatherError::LocationNotFound(query.to_string()),
            StatusCode::TOO_MANY_REQUESTS => WeatherError::RateLimitExceeded,
            s if s.is_server_error() => WeatherError::ServiceUnavailable(format!("HTTP {s}")),
            s if message.is_empty() => WeatherError::RequestFailed(format!("HTTP {s}")),
            s => WeatherError::RequestFailed(format!("HTTP {s}: {message}")),
        }
    }

    fn parse_timestamp(secs: i64) -> Result<DateTime<Utc>, WeatherError> {
        DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| WeatherError::ParseError(format!("Invalid timestamp: {secs}")))
    }

    fn first_condition(conditions: &[ConditionData]) -> Result<&ConditionData, WeatherError> {
        conditions
            .first()
            .ok_or_else(|| WeatherError::ParseError("No weather condition in response".to_string()))
    }

    /// Map the `/weather` response into the domain model
    fn parse_current_weather(data: &CurrentResponse) -> Result<CurrentWeather, WeatherError> {
        let condition = Self::first_condition(&data.weather)?;
        let sys = data.sys.as_ref();

        Ok(CurrentWeather {
            location_name: data.name.clone(),
            country: sys.and_then(|s| s.country.clone()),
            coordinates: data
                .coord
                .and_then(|c| GeoLocation::new(c.lat, c.lon).ok()),
            observed_at: Self::parse_timestamp(data.dt)?,
            temperature: Temperature::from_kelvin(data.main.temp),
            feels_like: Temperature::from_kelvin(data.main.feels_like.unwrap_or(data.main.temp)),
            temperature_min: Temperature::from_kelvin(data.main.temp_min),
            temperature_max: Temperature::from_kelvin(data.main.temp_max),
            humidity: Humidity::clamped(data.main.humidity),
            wind_speed: data.wind.map_or(0.0, |w| w.speed),
            condition_main: condition.main.clone(),
            condition_description: condition.description.clone(),
            icon_code: condition.icon.clone(),
            utc_offset_seconds: data.timezone,
        })
    }

    fn parse_sample(entry: &ForecastEntry) -> Result<ForecastSample, WeatherError> {
        let condition = Self::first_condition(&entry.weather)?;

        Ok(ForecastSample {
            timestamp: Self::parse_timestamp(entry.dt)?,
            temperature: Temperature::from_kelvin(entry.main.temp),
            temperature_min: Temperature::from_kelvin(entry.main.temp_min),
            temperature_max: Temperature::from_kelvin(entry.main.temp_max),
            humidity: Humidity::clamped(entry.main.humidity),
            wind_speed: entry.wind.map_or(0.0, |w| w.speed),
            condition_main: condition.main.clone(),
            condition_description: condition.description.clone(),
            icon_code: condition.icon.clone(),
        })
    }

    /// Map the `/forecast` response into the domain model
    fn parse_forecast(data: &ForecastResponse) -> Result<Forecast, WeatherError> {
        if data.cnt != 0 && data.cnt as usize != data.list.len() {
            warn!(
                cnt = data.cnt,
                received = data.list.len(),
                "Forecast entry count does not match list length"
            );
        }

        let samples = data
            .list
            .iter()
            .map(Self::parse_sample)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Forecast {
            location_name: data.city.name.clone(),
            country: data.city.country.clone(),
            utc_offset_seconds: data.city.timezone,
            samples,
        })
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self), fields(query = %query))]
    async fn get_current(&self, query: &LocationQuery) -> Result<CurrentWeather, WeatherError> {
        let data: CurrentResponse = self.fetch("weather", query).await?;
        Self::parse_current_weather(&data)
    }

    #[instrument(skip(self), fields(query = %query))]
    async fn get_forecast(&self, query: &LocationQuery) -> Result<Forecast, WeatherError> {
        let data: ForecastResponse = self.fetch("forecast", query).await?;
        Self::parse_forecast(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CityData, Coord, MainData, SysData, WindData};

    fn condition(main: &str, description: &str) -> ConditionData {
        ConditionData {
            main: main.to_string(),
            description: description.to_string(),
            icon: "10d".to_string(),
        }
    }

    fn main_data(kelvin: f64) -> MainData {
        MainData {
            temp: kelvin,
            feels_like: Some(kelvin - 2.0),
            temp_min: kelvin - 1.0,
            temp_max: kelvin + 1.0,
            humidity: 77,
        }
    }

    fn client() -> OpenWeatherClient {
        OpenWeatherClient::new(WeatherConfig::with_api_key("test-key"))
            .expect("client creation should succeed")
    }

    #[test]
    fn test_config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.api_key.expose_secret().is_empty());
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = WeatherConfig::with_api_key("super-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_query_params_city() {
        let params = client()
            .query_params(&LocationQuery::City("London,GB".to_string()))
            .expect("valid query");
        assert_eq!(params[0], ("q", "London,GB".to_string()));
        assert_eq!(params[1], ("appid", "test-key".to_string()));
    }

    #[test]
    fn test_query_params_coordinates() {
        let query = LocationQuery::coordinates(52.52, 13.405).expect("valid");
        let params = client().query_params(&query).expect("valid query");
        assert_eq!(params[0], ("lat", "52.52".to_string()));
        assert_eq!(params[1], ("lon", "13.405".to_string()));
    }

    #[test]
    fn test_query_params_rejects_blank_city() {
        let result = client().query_params(&LocationQuery::City("  ".to_string()));
        assert!(matches!(result, Err(WeatherError::InvalidQuery(_))));
    }

    #[test]
    fn test_query_params_rejects_out_of_range_coordinates() {
        let query: LocationQuery = serde_json::from_str(
            r#"{"kind":"coordinates","value":{"latitude":91.0,"longitude":0.0}}"#,
        )
        .expect("deserializes without validation");
        let result = client().query_params(&query);
        assert!(matches!(result, Err(WeatherError::InvalidCoordinates)));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = OpenWeatherClient::new(WeatherConfig {
            base_url: "http://localhost:9000/".to_string(),
            ..WeatherConfig::default()
        })
        .expect("client");
        assert_eq!(client.endpoint("forecast"), "http://localhost:9000/forecast");
    }

    #[test]
    fn test_status_error_mapping() {
        let q = LocationQuery::City("Atlantis".to_string());
        assert!(matches!(
            OpenWeatherClient::status_error(StatusCode::UNAUTHORIZED, "", &q),
            WeatherError::Unauthorized
        ));
        assert!(matches!(
            OpenWeatherClient::status_error(StatusCode::NOT_FOUND, "", &q),
            WeatherError::LocationNotFound(ref name) if name == "Atlantis"
        ));
        assert!(matches!(
            OpenWeatherClient::status_error(StatusCode::TOO_MANY_REQUESTS, "", &q),
            WeatherError::RateLimitExceeded
        ));
        assert!(matches!(
            OpenWeatherClient::status_error(StatusCode::BAD_GATEWAY, "", &q),
            WeatherError::ServiceUnavailable(_)
        ));
    }

    #[test]
    fn test_status_error_includes_provider_message() {
        let q = LocationQuery::City("x".to_string());
        let err = OpenWeatherClient::status_error(
            StatusCode::BAD_REQUEST,
            r#"{"cod":"400","message":"wrong latitude"}"#,
            &q,
        );
        assert_eq!(err.to_string(), "Request failed: HTTP 400 Bad Request: wrong latitude");
    }

    #[test]
    fn test_parse_current_weather() {
        let data = CurrentResponse {
            coord: Some(Coord { lat: 51.51, lon: -0.13 }),
            weather: vec![condition("Rain", "light rain")],
            main: main_data(283.15),
            wind: Some(WindData { speed: 5.1 }),
            dt: 1_705_320_000,
            sys: Some(SysData {
                country: Some("GB".to_string()),
            }),
            timezone: 0,
            name: "London".to_string(),
        };

        let weather = OpenWeatherClient::parse_current_weather(&data).expect("should parse");
        assert_eq!(weather.location_name, "London");
        assert_eq!(weather.country.as_deref(), Some("GB"));
        assert!((weather.temperature.celsius() - 10.0).abs() < 1e-9);
        assert!((weather.feels_like.celsius() - 8.0).abs() < 1e-9);
        assert_eq!(weather.humidity.value(), 77);
        assert!((weather.wind_speed - 5.1).abs() < f64::EPSILON);
        assert_eq!(weather.condition_main, "Rain");
        assert!(weather.coordinates.is_some());
    }

    #[test]
    fn test_parse_current_weather_without_condition() {
        let data = CurrentResponse {
            coord: None,
            weather: vec![],
            main: main_data(283.15),
            wind: None,
            dt: 1_705_320_000,
            sys: None,
            timezone: 0,
            name: "Nowhere".to_string(),
        };

        assert!(matches!(
            OpenWeatherClient::parse_current_weather(&data),
            Err(WeatherError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_forecast_keeps_order_and_city() {
        let data = ForecastResponse {
            cnt: 2,
            list: vec![
                ForecastEntry {
                    dt: 1_705_320_000,
                    main: main_data(280.15),
                    weather: vec![condition("Clouds", "few clouds")],
                    wind: None,
                },
                ForecastEntry {
                    dt: 1_705_330_800,
                    main: main_data(282.15),
                    weather: vec![condition("Rain", "light rain")],
                    wind: None,
                },
            ],
            city: CityData {
                name: "Oslo".to_string(),
                country: Some("NO".to_string()),
                timezone: 3600,
            },
        };

        let forecast = OpenWeatherClient::parse_forecast(&data).expect("should parse");
        assert_eq!(forecast.location_name, "Oslo");
        assert_eq!(forecast.utc_offset_seconds, 3600);
        assert_eq!(forecast.samples.len(), 2);
        assert_eq!(forecast.samples[0].condition_main, "Clouds");
        assert!((forecast.samples[1].temperature.celsius() - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_weather_error_display() {
        assert!(WeatherError::Unauthorized.to_string().contains("API key"));
        assert_eq!(
            WeatherError::LocationNotFound("Atlantis".into()).to_string(),
            "Location not found: Atlantis"
        );
        assert!(WeatherError::RateLimitExceeded.to_string().contains("Rate limit"));
    }
}
