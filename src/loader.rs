//! CSV dataset loading with timestamp parsing and derived calendar columns.

use std::fs::File;
use std::path::Path;

use chrono::{Datelike, NaiveDateTime};
use thiserror::Error;
use tracing::info;

use crate::city::{City, day_name, month_name};
use crate::trip::{RawTrip, TripRecord};

/// Timestamp layout used by all three city files.
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("trip data for {city} is unavailable: {source}")]
    DataUnavailable {
        city: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed row in {city} trip data: {source}")]
    MalformedRow {
        city: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("invalid start time {value:?} in {city} trip data: {source}")]
    InvalidStartTime {
        city: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Loads the full record set for a city and derives the month and
/// weekday name of every record's start time.
///
/// # Errors
///
/// Returns [`LoadError::DataUnavailable`] when the city's CSV file
/// cannot be opened; a malformed row or timestamp aborts the load.
pub fn load_city(data_dir: &Path, city: City) -> Result<Vec<TripRecord>, LoadError> {
    let path = city.data_path(data_dir);
    let file = File::open(&path).map_err(|source| LoadError::DataUnavailable {
        city: city.name(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let mut records = Vec::new();

    for row in reader.deserialize() {
        let raw: RawTrip = row.map_err(|source| LoadError::MalformedRow {
            city: city.name(),
            source,
        })?;

        let start_time = NaiveDateTime::parse_from_str(&raw.start_time, START_TIME_FORMAT)
            .map_err(|source| LoadError::InvalidStartTime {
                city: city.name(),
                value: raw.start_time.clone(),
                source,
            })?;

        records.push(TripRecord {
            start_time,
            month: month_name(start_time.month()),
            day_of_week: day_name(start_time.weekday()),
            trip_duration: raw.trip_duration,
            start_station: raw.start_station,
            end_station: raw.end_station,
            user_type: raw.user_type,
            gender: raw.gender,
            birth_year: raw.birth_year,
        });
    }

    info!(city = %city, records = records.len(), path = %path.display(), "City dataset loaded");
    Ok(records)
}
