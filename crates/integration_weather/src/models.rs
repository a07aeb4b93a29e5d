//! OpenWeatherMap wire models
//!
//! Raw response shapes for the `/weather` and `/forecast` endpoints.
//! Temperatures are in Kelvin (no `units` parameter is sent).

use serde::Deserialize;

/// Coordinates echoed back by the provider
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

/// One entry of the `weather` array
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionData {
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// The `main` block shared by both endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct MainData {
    pub temp: f64,
    #[serde(default)]
    pub feels_like: Option<f64>,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u16,
}

/// The `wind` block
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WindData {
    pub speed: f64,
}

/// The `sys` block of the current-weather response
#[derive(Debug, Clone, Deserialize)]
pub struct SysData {
    #[serde(default)]
    pub country: Option<String>,
}

/// Response of `GET /weather`
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    #[serde(default)]
    pub coord: Option<Coord>,
    pub weather: Vec<ConditionData>,
    pub main: MainData,
    #[serde(default)]
    pub wind: Option<WindData>,
    pub dt: i64,
    #[serde(default)]
    pub sys: Option<SysData>,
    /// Shift in seconds from UTC
    #[serde(default)]
    pub timezone: i32,
    pub name: String,
}

/// One three-hourly entry of `GET /forecast`
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    pub main: MainData,
    pub weather: Vec<ConditionData>,
    #[serde(default)]
    pub wind: Option<WindData>,
}

/// The `city` block of the forecast response
#[derive(Debug, Clone, Deserialize)]
pub struct CityData {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    /// Shift in seconds from UTC
    #[serde(default)]
    pub timezone: i32,
}

/// Response of `GET /forecast`
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub cnt: u32,
    pub list: Vec<ForecastEntry>,
    pub city: CityData,
}

/// Error body, e.g. `{"cod":"404","message":"city not found"}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_response_parses_minimal_payload() {
        let json = serde_json::json!({
            "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
            "main": {"temp": 293.15, "temp_min": 291.0, "temp_max": 295.0, "humidity": 40},
            "dt": 1_705_320_000,
            "name": "Madrid"
        });

        let parsed: CurrentResponse = serde_json::from_value(json).expect("should parse");
        assert_eq!(parsed.name, "Madrid");
        assert_eq!(parsed.timezone, 0);
        assert!(parsed.sys.is_none());
        assert!(parsed.main.feels_like.is_none());
        assert_eq!(parsed.weather[0].main, "Clear");
    }

    #[test]
    fn forecast_entry_ignores_unused_fields() {
        let json = serde_json::json!({
            "dt": 1_705_320_000,
            "main": {"temp": 280.0, "temp_min": 279.0, "temp_max": 281.0, "humidity": 90},
            "weather": [{"main": "Rain", "description": "light rain", "icon": "10n"}],
            "dt_txt": "2024-01-15 12:00:00"
        });

        let entry: ForecastEntry = serde_json::from_value(json).expect("should parse");
        assert_eq!(entry.dt, 1_705_320_000);
        assert_eq!(entry.weather[0].description, "light rain");
        assert!(entry.wind.is_none());
    }

    #[test]
    fn error_body_tolerates_numeric_cod() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"cod":401,"message":"Invalid API key"}"#).expect("parse");
        assert_eq!(body.message, "Invalid API key");
    }
}
