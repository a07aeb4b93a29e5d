//! Weather session - application state for one interactive user
//!
//! Holds the unit preference, the last current-weather result and the
//! aggregated daily forecast. Lookups run the two provider calls one after
//! the other and commit each result as soon as it arrives.

use std::{fmt, sync::Arc};

use domain::{
    CurrentWeather, DailyForecast, DayBoundary, LocationQuery, Temperature, UnitPreference,
    display_temperature,
};
use tracing::{debug, error, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{PreferenceStore, WeatherPort},
};

/// Number of forecast days shown by default
pub const DEFAULT_FORECAST_DAYS: usize = 5;

/// Tunables for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Maximum number of daily entries exposed by [`WeatherSession::forecast`]
    pub forecast_days: usize,
    /// Which calendar the samples are grouped by
    pub day_boundary: DayBoundary,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            forecast_days: DEFAULT_FORECAST_DAYS,
            day_boundary: DayBoundary::default(),
        }
    }
}

/// What a [`WeatherSession::lookup`] left in the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Current weather and forecast both committed
    Complete,
    /// Current weather committed; the forecast request failed
    CurrentOnly,
    /// The current-weather request failed; earlier state is untouched
    Failed,
}

impl LookupOutcome {
    /// Whether the lookup committed a new current observation
    pub const fn has_data(self) -> bool {
        !matches!(self, Self::Failed)
    }
}

/// Application state plus the lookup and unit-toggle use cases
pub struct WeatherSession {
    weather: Arc<dyn WeatherPort>,
    preferences: Arc<dyn PreferenceStore>,
    settings: SessionSettings,
    units: UnitPreference,
    current: Option<CurrentWeather>,
    forecast: Vec<DailyForecast>,
}

impl fmt::Debug for WeatherSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherSession")
            .field("settings", &self.settings)
            .field("units", &self.units)
            .field("has_current", &self.current.is_some())
            .field("forecast_days", &self.forecast.len())
            .finish_non_exhaustive()
    }
}

impl WeatherSession {
    /// Start a session with default settings
    pub async fn start(
        weather: Arc<dyn WeatherPort>,
        preferences: Arc<dyn PreferenceStore>,
    ) -> Self {
        Self::start_with_settings(weather, preferences, SessionSettings::default()).await
    }

    /// Start a session, restoring the persisted unit preference
    ///
    /// A missing or unreadable preference falls back to metric.
    pub async fn start_with_settings(
        weather: Arc<dyn WeatherPort>,
        preferences: Arc<dyn PreferenceStore>,
        settings: SessionSettings,
    ) -> Self {
        let units = match preferences.load().await {
            Ok(Some(units)) => {
                debug!(%units, "Restored unit preference");
                units
            },
            Ok(None) => UnitPreference::default(),
            Err(e) => {
                warn!(error = %e, "Failed to load unit preference, using metric");
                UnitPreference::default()
            },
        };

        Self {
            weather,
            preferences,
            settings,
            units,
            current: None,
            forecast: Vec::new(),
        }
    }

    /// Look up current weather, then the forecast, for a location
    ///
    /// Failures are logged and leave whatever was committed so far in place.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn lookup(&mut self, query: &LocationQuery) -> LookupOutcome {
        if let Err(e) = self.refresh_current(query).await {
            error!(error = %e, "Current weather lookup failed");
            return LookupOutcome::Failed;
        }
        match self.refresh_forecast(query).await {
            Ok(()) => LookupOutcome::Complete,
            Err(e) => {
                error!(error = %e, "Forecast lookup failed");
                LookupOutcome::CurrentOnly
            },
        }
    }

    /// Same as [`lookup`](Self::lookup) but hands the first error back
    pub async fn try_lookup(&mut self, query: &LocationQuery) -> Result<(), ApplicationError> {
        self.refresh_current(query).await?;
        self.refresh_forecast(query).await
    }

    async fn refresh_current(&mut self, query: &LocationQuery) -> Result<(), ApplicationError> {
        let current = self.weather.get_current_weather(query).await?;
        debug!(location = %current.location_name, "Current weather received");
        self.current = Some(current);
        self.forecast.clear();
        Ok(())
    }

    async fn refresh_forecast(&mut self, query: &LocationQuery) -> Result<(), ApplicationError> {
        let forecast = self.weather.get_forecast(query).await?;
        self.forecast = forecast.daily(self.settings.day_boundary);
        info!(
            location = %forecast.location_name,
            samples = forecast.samples.len(),
            days = self.forecast.len(),
            "Forecast aggregated"
        );
        Ok(())
    }

    /// Flip between metric and imperial and persist the new choice
    pub async fn toggle_units(&mut self) -> UnitPreference {
        let next = self.units.toggled();
        self.set_units(next).await;
        next
    }

    /// Set the unit preference, persisting it if it changed
    ///
    /// A failed write is logged; the in-memory preference still changes.
    #[instrument(skip(self))]
    pub async fn set_units(&mut self, units: UnitPreference) {
        if units == self.units {
            return;
        }
        self.units = units;

        if let Err(e) = self.preferences.save(units).await {
            warn!(error = %e, "Failed to persist unit preference");
        }
    }

    /// Active unit preference
    pub const fn units(&self) -> UnitPreference {
        self.units
    }

    /// Last successfully fetched current weather
    pub const fn current(&self) -> Option<&CurrentWeather> {
        self.current.as_ref()
    }

    /// Daily forecast entries, at most `forecast_days` of them
    pub fn forecast(&self) -> &[DailyForecast] {
        let shown = self.forecast.len().min(self.settings.forecast_days);
        &self.forecast[..shown]
    }

    /// Settings this session was started with
    pub const fn settings(&self) -> SessionSettings {
        self.settings
    }

    /// Round a temperature for display in the active unit
    pub fn display(&self, temperature: Temperature) -> i64 {
        display_temperature(temperature, self.units)
    }
}
