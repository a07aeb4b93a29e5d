//! Text rendering of lookup results
//!
//! ```text
//! Weather in London (GB)
//! Temperature: 15°C
//! Humidity: 72%
//! Clouds - broken clouds
//!
//! 5-day Forecast
//! Mon Jan 15 2024 06:00   10°C  (Low 8°C / High 15°C)  Clouds - overcast clouds
//! ```

use std::fmt::{Display, Write};

use application::WeatherSession;
use chrono::{FixedOffset, Local, TimeZone, Utc};
use domain::{
    CurrentWeather, DailyForecast, DayBoundary, Temperature, UnitPreference, display_temperature,
};

/// Shown when a lookup produced nothing
pub const NO_DATA: &str = "No weather data";

fn temp(t: Temperature, units: UnitPreference) -> String {
    format!("{}{}", display_temperature(t, units), units.symbol())
}

/// Current conditions block
pub fn render_current(current: &CurrentWeather, units: UnitPreference) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", current.headline());
    let _ = writeln!(out, "Temperature: {}", temp(current.temperature, units));
    let _ = writeln!(out, "Humidity: {}", current.humidity);
    let _ = writeln!(out, "{}", current.condition_line());
    out
}

/// Daily forecast block; times are shown in `tz`
pub fn render_forecast<Tz>(days: &[DailyForecast], units: UnitPreference, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if days.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}-day Forecast", days.len());
    for day in days {
        let _ = writeln!(
            out,
            "{} {}  {:>5}  (Low {} / High {})  {} - {}",
            day.date.format("%a %b %d %Y"),
            day.timestamp.with_timezone(tz).format("%H:%M"),
            temp(day.temperature, units),
            temp(day.temperature_min, units),
            temp(day.temperature_max, units),
            day.condition_main,
            day.condition_description,
        );
    }
    out
}

/// Everything the session currently holds, in `units`
pub fn render_session(session: &WeatherSession, units: UnitPreference) -> String {
    let Some(current) = session.current() else {
        return format!("{NO_DATA}\n");
    };

    let mut out = render_current(current, units);
    let forecast = match session.settings().day_boundary {
        DayBoundary::Local => render_forecast(session.forecast(), units, &Local),
        DayBoundary::Location => match FixedOffset::east_opt(current.utc_offset_seconds) {
            Some(offset) => render_forecast(session.forecast(), units, &offset),
            None => render_forecast(session.forecast(), units, &Utc),
        },
    };
    if !forecast.is_empty() {
        out.push('\n');
        out.push_str(&forecast);
    }
    out
}

/// One-line unit status, e.g. `Units: imperial (°F)`
pub fn render_units(units: UnitPreference) -> String {
    format!("Units: {units} ({})", units.symbol())
}
