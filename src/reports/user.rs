//! User demographics: user types, gender, and birth years.

use std::io::{self, Write};

use crate::city::City;
use crate::trip::Trip;

use super::util::{mode, value_counts};

#[derive(Debug, PartialEq, Eq)]
pub struct BirthYearStats {
    /// Latest year in the column.
    pub youngest: i32,
    /// Earliest year in the column.
    pub oldest: i32,
    pub most_common: i32,
}

#[derive(Debug, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    /// `None` when the dataset carries no gender column.
    pub genders: Option<Vec<(String, usize)>>,
    /// `None` when the dataset carries no birth-year column.
    pub birth_years: Option<BirthYearStats>,
}

impl UserStats {
    pub fn from_trips(trips: &[Trip]) -> Self {
        let user_types = value_counts(trips, |t| t.user_type.clone());

        let gender_values: Vec<String> =
            trips.iter().filter_map(|t| t.gender.clone()).collect();
        let genders = if gender_values.is_empty() {
            None
        } else {
            Some(value_counts(&gender_values, |g| g.clone()))
        };

        let years: Vec<i32> = trips.iter().filter_map(|t| t.birth_year).collect();
        let birth_years = if years.is_empty() {
            None
        } else {
            Some(BirthYearStats {
                youngest: *years.iter().max().unwrap(),
                oldest: *years.iter().min().unwrap(),
                most_common: mode(&years, |y| *y).unwrap().0,
            })
        };

        UserStats {
            user_types,
            genders,
            birth_years,
        }
    }
}

pub fn print<W: Write>(out: &mut W, city: City, stats: &UserStats) -> io::Result<()> {
    writeln!(out, "What is the breakdown of users?")?;
    if stats.user_types.is_empty() {
        writeln!(out, "No trips matched the selected filters.")?;
    }
    for (user_type, count) in &stats.user_types {
        writeln!(out, "{user_type}: {count}")?;
    }

    writeln!(out, "What is the breakdown of gender?")?;
    match &stats.genders {
        Some(genders) => {
            for (gender, count) in genders {
                writeln!(out, "{gender}: {count}")?;
            }
        }
        None => writeln!(out, "{} has no gender data to share.", city.name())?,
    }

    writeln!(out, "What is the breakdown of year of birth?")?;
    match &stats.birth_years {
        Some(years) => {
            writeln!(out, "Youngest: {}", years.youngest)?;
            writeln!(out, "Oldest: {}", years.oldest)?;
            writeln!(out, "Popular: {}", years.most_common)?;
        }
        None => writeln!(out, "{} has no year of birth data to share.", city.name())?,
    }
    Ok(())
}
