//! Domain entities - weather observations and forecasts

mod current_weather;
mod daily_forecast;
mod forecast;
mod forecast_sample;

pub use current_weather::CurrentWeather;
pub use daily_forecast::DailyForecast;
pub use forecast::Forecast;
pub use forecast_sample::ForecastSample;
