//! In-memory ports for driving a `WeatherSession` in tests

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use application::{
    ApplicationError, PreferenceStore, SessionSettings, WeatherPort, WeatherSession,
};
use async_trait::async_trait;
use chrono::DateTime;
use domain::{
    CurrentWeather, Forecast, ForecastSample, Humidity, LocationQuery, Temperature,
    UnitPreference,
};

/// 2024-01-15 00:00:00 UTC
pub const DAY1: i64 = 1_705_276_800;

pub fn current(name: &str, celsius: f64, utc_offset_seconds: i32) -> CurrentWeather {
    CurrentWeather {
        location_name: name.to_string(),
        country: Some("FR".to_string()),
        coordinates: None,
        observed_at: DateTime::from_timestamp(DAY1, 0).unwrap_or_default(),
        temperature: Temperature::from_celsius(celsius),
        feels_like: Temperature::from_celsius(celsius),
        temperature_min: Temperature::from_celsius(celsius),
        temperature_max: Temperature::from_celsius(celsius),
        humidity: Humidity::clamped(64),
        wind_speed: 3.5,
        condition_main: "Clear".to_string(),
        condition_description: "clear sky".to_string(),
        icon_code: "01d".to_string(),
        utc_offset_seconds,
    }
}

pub fn sample(timestamp: i64, celsius: f64) -> ForecastSample {
    ForecastSample {
        timestamp: DateTime::from_timestamp(timestamp, 0).unwrap_or_default(),
        temperature: Temperature::from_celsius(celsius),
        temperature_min: Temperature::from_celsius(celsius),
        temperature_max: Temperature::from_celsius(celsius),
        humidity: Humidity::clamped(70),
        wind_speed: 2.0,
        condition_main: "Rain".to_string(),
        condition_description: "light rain".to_string(),
        icon_code: "10d".to_string(),
    }
}

pub fn forecast(name: &str, utc_offset_seconds: i32, samples: Vec<ForecastSample>) -> Forecast {
    Forecast {
        location_name: name.to_string(),
        country: Some("FR".to_string()),
        utc_offset_seconds,
        samples,
    }
}

/// Answers every query with fixed data; `None` fails the call
#[derive(Debug, Default)]
pub struct StubWeather {
    pub current: Option<CurrentWeather>,
    pub forecast: Option<Forecast>,
    pub calls: AtomicUsize,
}

#[async_trait]
impl WeatherPort for StubWeather {
    async fn get_current_weather(
        &self,
        query: &LocationQuery,
    ) -> Result<CurrentWeather, ApplicationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.current
            .clone()
            .ok_or_else(|| ApplicationError::NotFound(query.to_string()))
    }

    async fn get_forecast(&self, _query: &LocationQuery) -> Result<Forecast, ApplicationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.forecast
            .clone()
            .ok_or_else(|| ApplicationError::ExternalService("forecast timed out".into()))
    }
}

/// Keeps the preference in memory and records every save
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub saved: Mutex<Vec<UnitPreference>>,
}

impl MemoryStore {
    pub fn saves(&self) -> Vec<UnitPreference> {
        self.saved.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryStore {
    async fn load(&self) -> Result<Option<UnitPreference>, ApplicationError> {
        Ok(self.saves().last().copied())
    }

    async fn save(&self, units: UnitPreference) -> Result<(), ApplicationError> {
        if let Ok(mut saved) = self.saved.lock() {
            saved.push(units);
        }
        Ok(())
    }
}

pub async fn session_with(
    weather: Arc<StubWeather>,
    store: Arc<MemoryStore>,
    settings: SessionSettings,
) -> WeatherSession {
    WeatherSession::start_with_settings(weather, store, settings).await
}
