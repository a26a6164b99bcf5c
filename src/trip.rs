//! Trip record types at each stage of the pipeline.
//!
//! `RawTrip` is the serde view of a CSV row, `TripRecord` adds the
//! parsed timestamp and derived calendar columns, and `Trip` is the
//! cleaned record every reporter consumes.

use chrono::NaiveDateTime;
use serde::Deserialize;

/// A single row deserialized from a city CSV file.
///
/// Gender and birth year default to `None` because Washington's file
/// does not carry those columns at all. User type is optional because
/// the column exists everywhere but has gaps.
#[derive(Debug, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,

    // Stored as float in the Washington source, integer elsewhere.
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,

    #[serde(rename = "Start Station")]
    pub start_station: String,

    #[serde(rename = "End Station")]
    pub end_station: String,

    #[serde(rename = "User Type")]
    pub user_type: Option<String>,

    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,

    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// A parsed but uncleaned record: timestamp and calendar names are
/// derived, missing values and source storage types are untouched.
#[derive(Debug, Clone)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub month: &'static str,
    pub day_of_week: &'static str,
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
}

/// A cleaned trip record.
///
/// Duration is a non-negative integer count of seconds and the user
/// type is always present. Gender and birth year stay optional; both
/// are `None` for every Washington record.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub month: &'static str,
    pub day_of_week: &'static str,
    pub duration_secs: i64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}
