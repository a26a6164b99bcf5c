//! City catalog and calendar name tables.
//!
//! The city→CSV mapping is fixed at compile time; the only runtime
//! configuration is the directory the files live in.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::Weekday;

/// Full English month names, indexed by `chrono` month number minus one.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English weekday names, indexed by days from Monday.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One of the three cities with published trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYork,
    Washington,
}

impl City {
    /// Parses a user-supplied city token. Comparison is case-insensitive.
    pub fn parse(token: &str) -> Option<City> {
        match token.trim().to_lowercase().as_str() {
            "chicago" => Some(City::Chicago),
            "new york" => Some(City::NewYork),
            "washington" => Some(City::Washington),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYork => "New York",
            City::Washington => "Washington",
        }
    }

    /// File name of the city's trip records within the data directory.
    pub fn csv_file(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYork => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.csv_file())
    }

    /// Washington's source file carries no gender or birth-year columns.
    pub fn has_demographics(&self) -> bool {
        !matches!(self, City::Washington)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Months a user may filter by. The published datasets cover
/// January through June only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub fn parse(token: &str) -> Option<Month> {
        match token.trim().to_lowercase().as_str() {
            "january" => Some(Month::January),
            "february" => Some(Month::February),
            "march" => Some(Month::March),
            "april" => Some(Month::April),
            "may" => Some(Month::May),
            "june" => Some(Month::June),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
        }
    }
}

/// Name of a 1-based `chrono` month number.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month as usize - 1) % 12]
}

pub fn day_name(day: Weekday) -> &'static str {
    DAY_NAMES[day.num_days_from_monday() as usize]
}

/// Parses a full weekday name. Abbreviations are not accepted; the
/// prompt spells out the seven valid answers.
pub fn parse_day(token: &str) -> Option<Weekday> {
    match token.trim().to_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_city_case_insensitive() {
        assert_eq!(City::parse("Chicago"), Some(City::Chicago));
        assert_eq!(City::parse("NEW YORK"), Some(City::NewYork));
        assert_eq!(City::parse(" washington "), Some(City::Washington));
        assert_eq!(City::parse("boston"), None);
        assert_eq!(City::parse(""), None);
    }

    #[test]
    fn test_city_files_and_demographics() {
        assert_eq!(City::Chicago.csv_file(), "chicago.csv");
        assert_eq!(City::NewYork.csv_file(), "new_york_city.csv");
        assert_eq!(City::Washington.csv_file(), "washington.csv");

        assert!(City::Chicago.has_demographics());
        assert!(City::NewYork.has_demographics());
        assert!(!City::Washington.has_demographics());
    }

    #[test]
    fn test_parse_month_only_first_six() {
        assert_eq!(Month::parse("march"), Some(Month::March));
        assert_eq!(Month::parse("June"), Some(Month::June));
        assert_eq!(Month::parse("july"), None);
        assert_eq!(Month::parse("december"), None);
    }

    #[test]
    fn test_parse_day_rejects_abbreviations() {
        assert_eq!(parse_day("friday"), Some(Weekday::Fri));
        assert_eq!(parse_day("Sunday"), Some(Weekday::Sun));
        assert_eq!(parse_day("fri"), None);
        assert_eq!(parse_day("someday"), None);
    }

    #[test]
    fn test_name_tables() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(day_name(Weekday::Mon), "Monday");
        assert_eq!(day_name(Weekday::Sun), "Sunday");
    }
}
