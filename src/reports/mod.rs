//! Statistics reporters for a filtered trip view.
//!
//! Four independent reporters, each computing its aggregates from the
//! read-only view and printing them framed by a heading, an
//! elapsed-time notice, and a separator line.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;
pub mod util;

use std::io::{self, Write};
use std::time::Instant;

use tracing::debug;

use crate::city::City;
use crate::filter::FilterSpec;
use crate::trip::Trip;

pub const SEPARATOR: &str = "----------------------------------------";

/// Runs all four reporters against the filtered view. The reporters
/// are independent; nothing here depends on their order.
pub fn run_all<W: Write>(
    out: &mut W,
    city: City,
    filter: &FilterSpec,
    trips: &[Trip],
) -> io::Result<()> {
    section(
        out,
        "\nCalculating The Most Frequent Times of Travel...\n",
        |out| {
            let stats = time::TravelTimeStats::from_trips(trips, filter);
            time::print(out, &stats)
        },
    )?;

    section(
        out,
        "\nCalculating The Most Popular Stations and Trip...\n",
        |out| {
            let stats = station::StationStats::from_trips(trips);
            station::print(out, &stats)
        },
    )?;

    section(out, "\nCalculating Trip Duration...\n", |out| {
        let stats = duration::DurationStats::from_trips(trips);
        duration::print(out, &stats)
    })?;

    section(out, "\nCalculating User Stats...\n", |out| {
        let stats = user::UserStats::from_trips(trips);
        user::print(out, city, &stats)
    })?;

    Ok(())
}

fn section<W: Write>(
    out: &mut W,
    heading: &str,
    body: impl FnOnce(&mut W) -> io::Result<()>,
) -> io::Result<()> {
    writeln!(out, "{heading}")?;
    let started = Instant::now();
    body(out)?;
    let elapsed = started.elapsed().as_secs_f64();
    debug!(heading = heading.trim(), elapsed, "Report section done");
    writeln!(out, "\nThis took {elapsed:.6} seconds.")?;
    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn trip() -> Trip {
        Trip {
            start_time: NaiveDateTime::parse_from_str("2017-05-05 08:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            month: "May",
            day_of_week: "Friday",
            duration_secs: 300,
            start_station: "A St".to_string(),
            end_station: "B St".to_string(),
            user_type: "Subscriber".to_string(),
            gender: None,
            birth_year: None,
        }
    }

    #[test]
    fn test_run_all_prints_four_sections() {
        let trips = vec![trip(), trip()];
        let mut out = Vec::new();
        run_all(&mut out, City::Washington, &FilterSpec::default(), &trips).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Calculating The Most Frequent Times of Travel..."));
        assert!(text.contains("Calculating The Most Popular Stations and Trip..."));
        assert!(text.contains("Calculating Trip Duration..."));
        assert!(text.contains("Calculating User Stats..."));
        assert_eq!(text.matches("This took").count(), 4);
        assert_eq!(text.matches(SEPARATOR).count(), 4);
    }

    #[test]
    fn test_run_all_handles_empty_view() {
        let mut out = Vec::new();
        run_all(&mut out, City::Chicago, &FilterSpec::default(), &[]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("This took").count(), 4);
    }
}
