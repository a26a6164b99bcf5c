//! Per-record normalization applied after loading.
//!
//! User types are forward-filled, demographic gaps are filled (birth
//! year by column mean, gender by forward fill), and durations are
//! coerced to non-negative integer seconds for every city.

use tracing::debug;

use crate::city::City;
use crate::trip::{Trip, TripRecord};

/// Fallback user type for a dataset where the column is entirely empty.
const UNKNOWN_USER_TYPE: &str = "Unknown";

/// Cleans a loaded record set.
///
/// Forward fill inherits the most recent preceding value; a leading gap
/// with nothing above it takes the first subsequent non-missing value
/// instead, so a non-empty column cleans to zero missing values.
pub fn clean(city: City, records: Vec<TripRecord>) -> Vec<Trip> {
    let total = records.len();

    let mut user_types: Vec<Option<String>> =
        records.iter().map(|r| r.user_type.clone()).collect();
    forward_fill(&mut user_types);

    let (genders, birth_years) = if city.has_demographics() {
        let mut genders: Vec<Option<String>> =
            records.iter().map(|r| r.gender.clone()).collect();
        forward_fill(&mut genders);

        let mean = birth_year_mean(&records);
        let birth_years: Vec<Option<i32>> = records
            .iter()
            .map(|r| r.birth_year.or(mean).map(|y| y as i32))
            .collect();
        (genders, birth_years)
    } else {
        (vec![None; total], vec![None; total])
    };

    let trips: Vec<Trip> = records
        .into_iter()
        .zip(user_types)
        .zip(genders.into_iter().zip(birth_years))
        .map(|((record, user_type), (gender, birth_year))| Trip {
            start_time: record.start_time,
            month: record.month,
            day_of_week: record.day_of_week,
            duration_secs: record.trip_duration.max(0.0) as i64,
            start_station: record.start_station,
            end_station: record.end_station,
            user_type: user_type.unwrap_or_else(|| UNKNOWN_USER_TYPE.to_string()),
            gender,
            birth_year,
        })
        .collect();

    debug!(city = %city, records = trips.len(), "Record set cleaned");
    trips
}

/// Replaces each `None` with the nearest preceding value; leading
/// `None`s take the first value found anywhere in the column.
fn forward_fill<T: Clone>(slots: &mut [Option<T>]) {
    let mut last = slots.iter().flatten().next().cloned();
    for slot in slots.iter_mut() {
        match slot {
            Some(value) => last = Some(value.clone()),
            None => *slot = last.clone(),
        }
    }
}

/// Mean of the non-missing birth years, or `None` if the column is empty.
fn birth_year_mean(records: &[TripRecord]) -> Option<f64> {
    let years: Vec<f64> = records.iter().filter_map(|r| r.birth_year).collect();
    if years.is_empty() {
        return None;
    }
    Some(years.iter().sum::<f64>() / years.len() as f64)
}
