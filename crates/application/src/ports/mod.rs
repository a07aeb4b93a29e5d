//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces the session uses to reach the outside world.
//! Adapters in the infrastructure layer implement these ports.

mod preference_store;
mod weather_port;

pub use preference_store::PreferenceStore;
pub use weather_port::WeatherPort;

#[cfg(test)]
pub use preference_store::MockPreferenceStore;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
