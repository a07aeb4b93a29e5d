//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{CurrentWeather, DomainError, Forecast, InvalidCoordinates, LocationQuery};
use integration_weather::{OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for weather services using the OpenWeatherMap API
pub struct WeatherAdapter {
    client: Box<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"WeatherClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with the given client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherClient::new(config).map_err(Self::map_error)?;
        Ok(Self::with_client(client))
    }

    /// Wrap an existing client
    pub fn with_client(client: impl WeatherClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) => ApplicationError::Internal(e),
            WeatherError::InvalidCoordinates => DomainError::from(InvalidCoordinates).into(),
            WeatherError::InvalidQuery(e) => DomainError::InvalidLocationQuery(e).into(),
            WeatherError::Unauthorized => {
                ApplicationError::NotAuthorized("weather API key rejected".into())
            },
            WeatherError::LocationNotFound(q) => ApplicationError::NotFound(q),
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(query = %query))]
    async fn get_current_weather(
        &self,
        query: &LocationQuery,
    ) -> Result<CurrentWeather, ApplicationError> {
        let result = self.client.get_current(query).await.map_err(Self::map_error);

        match &result {
            Ok(current) => {
                debug!(
                    location = %current.location_name,
                    temperature = %current.temperature,
                    condition = %current.condition_main,
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result
    }

    #[instrument(skip(self), fields(query = %query))]
    async fn get_forecast(&self, query: &LocationQuery) -> Result<Forecast, ApplicationError> {
        let result = self.client.get_forecast(query).await.map_err(Self::map_error);

        match &result {
            Ok(forecast) => {
                debug!(
                    location = %forecast.location_name,
                    samples = forecast.samples.len(),
                    "Retrieved forecast"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get forecast");
            },
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_debug() {
        let adapter = WeatherAdapter::with_config(WeatherConfig::with_api_key("secret-key"))
            .expect("adapter creation should succeed");
        let debug = format!("{adapter:?}");
        assert!(debug.contains("WeatherAdapter"));
        assert!(!debug.contains("secret-key"));
    }

    #[test]
    fn map_error_transport_is_external_service() {
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::ConnectionFailed("refused".into())),
            ApplicationError::ExternalService(_)
        ));
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::ServiceUnavailable("HTTP 503".into())),
            ApplicationError::ExternalService(_)
        ));
    }

    #[test]
    fn map_error_provider_classes() {
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::Unauthorized),
            ApplicationError::NotAuthorized(_)
        ));
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::LocationNotFound("Atlantis".into())),
            ApplicationError::NotFound(ref q) if q == "Atlantis"
        ));
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::RateLimitExceeded),
            ApplicationError::RateLimited
        ));
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::ParseError("eof".into())),
            ApplicationError::Internal(_)
        ));
    }

    #[test]
    fn map_error_validation_becomes_domain_error() {
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::InvalidCoordinates),
            ApplicationError::Domain(DomainError::InvalidCoordinates(_))
        ));
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::InvalidQuery("blank".into())),
            ApplicationError::Domain(DomainError::InvalidLocationQuery(_))
        ));
    }
}
