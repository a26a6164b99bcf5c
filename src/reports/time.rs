//! Most frequent times of travel.

use std::io::{self, Write};

use chrono::Timelike;

use crate::filter::FilterSpec;
use crate::trip::Trip;

use super::util::mode;

/// Popular month and day are only computed when the session did not
/// already filter on them; the popular start hour is always computed.
#[derive(Debug, PartialEq, Eq)]
pub struct TravelTimeStats {
    pub popular_month: Option<(&'static str, usize)>,
    pub popular_day: Option<(&'static str, usize)>,
    pub popular_hour: Option<(u32, usize)>,
}

impl TravelTimeStats {
    pub fn from_trips(trips: &[Trip], filter: &FilterSpec) -> Self {
        let popular_month = if filter.month.is_none() {
            mode(trips, |t| t.month)
        } else {
            None
        };
        let popular_day = if filter.day.is_none() {
            mode(trips, |t| t.day_of_week)
        } else {
            None
        };
        let popular_hour = mode(trips, |t| t.start_time.hour());

        TravelTimeStats {
            popular_month,
            popular_day,
            popular_hour,
        }
    }
}

pub fn print<W: Write>(out: &mut W, stats: &TravelTimeStats) -> io::Result<()> {
    if let Some((month, _)) = stats.popular_month {
        writeln!(out, "What was the most popular month for traveling?\n {month}")?;
    }
    if let Some((day, _)) = stats.popular_day {
        writeln!(out, "What was the most popular day for traveling?\n {day}")?;
    }
    match stats.popular_hour {
        Some((hour, _)) => {
            writeln!(out, "What was the most popular hour for traveling?\n {hour}")?;
        }
        None => writeln!(out, "No trips matched the selected filters.")?,
    }
    Ok(())
}
