//! Port to the weather provider
//!
//! One call per endpoint; the session decides ordering and aggregation.

use async_trait::async_trait;
use domain::{CurrentWeather, Forecast, LocationQuery};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Current conditions and the raw three-hourly forecast for a location
#[allow(clippy::struct_field_names)] // automock generates struct with `get_*` prefixes
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Observation at the time of the call
    async fn get_current_weather(
        &self,
        query: &LocationQuery,
    ) -> Result<CurrentWeather, ApplicationError>;

    /// Three-hourly samples, in provider order
    async fn get_forecast(&self, query: &LocationQuery) -> Result<Forecast, ApplicationError>;
}
