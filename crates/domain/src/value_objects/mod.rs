//! Value Objects - Immutable, identity-less domain primitives

mod day_boundary;
mod geo_location;
mod humidity;
mod location_query;
mod temperature;
mod unit_preference;

pub use day_boundary::DayBoundary;
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use humidity::{Humidity, InvalidHumidity};
pub use location_query::LocationQuery;
pub use temperature::{KELVIN_OFFSET, Temperature};
pub use unit_preference::UnitPreference;
