//! Forecast aggregation
//!
//! Collapses time-ordered forecast samples into one [`DailyForecast`] per
//! calendar day. Days keep the order in which they are first seen; the first
//! sample of a day supplies the descriptive fields, and the day's
//! temperature range is the min/max over every sample of that day.

use std::collections::HashMap;

use chrono::{FixedOffset, Local, NaiveDate, TimeZone, Utc};

use crate::entities::{DailyForecast, ForecastSample};
use crate::value_objects::DayBoundary;

/// Group samples by their calendar day in `tz`
///
/// Empty input yields an empty result.
pub fn aggregate_daily<'a, I, Tz>(samples: I, tz: &Tz) -> Vec<DailyForecast>
where
    I: IntoIterator<Item = &'a ForecastSample>,
    Tz: TimeZone,
{
    let mut days: Vec<DailyForecast> = Vec::new();
    let mut positions: HashMap<NaiveDate, usize> = HashMap::new();

    for sample in samples {
        let date = sample.calendar_day(tz);
        if let Some(day) = positions.get(&date).and_then(|&i| days.get_mut(i)) {
            day.absorb(sample);
        } else {
            positions.insert(date, days.len());
            days.push(DailyForecast::first_of_day(date, sample));
        }
    }

    days
}

/// Group samples by their calendar day in the machine's local time zone
pub fn aggregate_daily_local<'a, I>(samples: I) -> Vec<DailyForecast>
where
    I: IntoIterator<Item = &'a ForecastSample>,
{
    aggregate_daily(samples, &Local)
}

/// Group samples using the configured day boundary
///
/// `utc_offset_seconds` is the location's offset and only matters for
/// [`DayBoundary::Location`]; an out-of-range offset falls back to UTC.
#[must_use]
pub fn aggregate_with_boundary(
    samples: &[ForecastSample],
    boundary: DayBoundary,
    utc_offset_seconds: i32,
) -> Vec<DailyForecast> {
    match boundary {
        DayBoundary::Local => aggregate_daily_local(samples),
        DayBoundary::Location => match FixedOffset::east_opt(utc_offset_seconds) {
            Some(offset) => aggregate_daily(samples, &offset),
            None => aggregate_daily(samples, &Utc),
        },
    }
}
