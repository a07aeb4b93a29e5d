//! Temperature conversion for display
//!
//! Maps a Celsius value into the selected display unit, rounded to the
//! nearest whole degree. Halves round upwards (`-0.5` becomes `0`,
//! `0.5` becomes `1`), the same way the rendered values always have.

use crate::value_objects::{Temperature, UnitPreference};

/// Convert a Celsius value to a whole number in the given display unit
///
/// Metric rounds the value; imperial applies `°C × 9/5 + 32` first.
#[must_use]
pub fn convert_temperature(celsius: f64, unit: UnitPreference) -> i64 {
    let value = match unit {
        UnitPreference::Metric => celsius,
        UnitPreference::Imperial => Temperature::from_celsius(celsius).fahrenheit(),
    };
    round_half_up(value)
}

/// Convert a [`Temperature`] to a whole number in the given display unit
#[must_use]
pub fn display_temperature(temperature: Temperature, unit: UnitPreference) -> i64 {
    convert_temperature(temperature.celsius(), unit)
}

#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i64 {
    // `value + 0.5` can itself round up just below a half
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_known_points() {
        assert_eq!(convert_temperature(0.0, UnitPreference::Metric), 0);
        assert_eq!(convert_temperature(100.0, UnitPreference::Metric), 100);
    }

    #[test]
    fn imperial_known_points() {
        assert_eq!(convert_temperature(0.0, UnitPreference::Imperial), 32);
        assert_eq!(convert_temperature(100.0, UnitPreference::Imperial), 212);
        assert_eq!(convert_temperature(-40.0, UnitPreference::Imperial), -40);
    }

    #[test]
    fn metric_rounds_to_nearest() {
        assert_eq!(convert_temperature(21.4, UnitPreference::Metric), 21);
        assert_eq!(convert_temperature(21.6, UnitPreference::Metric), 22);
        assert_eq!(convert_temperature(-3.7, UnitPreference::Metric), -4);
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(convert_temperature(2.5, UnitPreference::Metric), 3);
        assert_eq!(convert_temperature(-0.5, UnitPreference::Metric), 0);
        assert_eq!(convert_temperature(-2.5, UnitPreference::Metric), -2);
    }

    #[test]
    fn largest_value_below_a_half_rounds_down() {
        let below_half = 0.499_999_999_999_999_94;
        assert_eq!(convert_temperature(below_half, UnitPreference::Metric), 0);
        assert_eq!(convert_temperature(-below_half, UnitPreference::Metric), 0);
    }

    #[test]
    fn imperial_rounds_after_conversion() {
        // 21.5°C = 70.7°F
        assert_eq!(convert_temperature(21.5, UnitPreference::Imperial), 71);
    }

    #[test]
    fn display_temperature_from_kelvin() {
        let t = Temperature::from_kelvin(288.15);
        assert_eq!(display_temperature(t, UnitPreference::Metric), 15);
        assert_eq!(display_temperature(t, UnitPreference::Imperial), 59);
    }
}
