//! Application services - use cases over the ports

mod weather_session;

pub use weather_session::{
    DEFAULT_FORECAST_DAYS, LookupOutcome, SessionSettings, WeatherSession,
};
