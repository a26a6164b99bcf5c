//! Most popular stations and start→end trip.

use std::io::{self, Write};

use crate::trip::Trip;

use super::util::mode;

#[derive(Debug, PartialEq, Eq)]
pub struct StationStats {
    pub top_start: Option<(String, usize)>,
    pub top_end: Option<(String, usize)>,
    /// Largest (start station, end station) group and its size.
    pub top_trip: Option<((String, String), usize)>,
}

impl StationStats {
    pub fn from_trips(trips: &[Trip]) -> Self {
        StationStats {
            top_start: mode(trips, |t| t.start_station.clone()),
            top_end: mode(trips, |t| t.end_station.clone()),
            top_trip: mode(trips, |t| (t.start_station.clone(), t.end_station.clone())),
        }
    }
}

pub fn print<W: Write>(out: &mut W, stats: &StationStats) -> io::Result<()> {
    let (Some((start, start_count)), Some((end, end_count)), Some(((from, to), trip_count))) =
        (&stats.top_start, &stats.top_end, &stats.top_trip)
    else {
        return writeln!(out, "No trips matched the selected filters.");
    };

    writeln!(out, "What was the most popular start station?\n {start}")?;
    writeln!(out, "Total: {start_count} times")?;
    writeln!(out, "What was the most popular end station?\n {end}")?;
    writeln!(out, "Total: {end_count} times")?;
    writeln!(out, "What was the most popular trip from start to end?")?;
    writeln!(out, "Start Station: {from}\nEnd Station: {to}")?;
    writeln!(out, "Total: {trip_count} times")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn trip(start_station: &str, end_station: &str) -> Trip {
        Trip {
            start_time: NaiveDateTime::parse_from_str("2017-05-05 08:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            month: "May",
            day_of_week: "Friday",
            duration_secs: 60,
            start_station: start_station.to_string(),
            end_station: end_station.to_string(),
            user_type: "Subscriber".to_string(),
            gender: None,
            birth_year: None,
        }
    }

    #[test]
    fn test_station_modes_and_pair_grouping() {
        let trips = vec![
            trip("Clark & Lake", "Canal & Adams"),
            trip("Clark & Lake", "Canal & Adams"),
            trip("Clark & Lake", "State & Harrison"),
            trip("State & Harrison", "Canal & Adams"),
        ];
        let stats = StationStats::from_trips(&trips);

        assert_eq!(stats.top_start, Some(("Clark & Lake".to_string(), 3)));
        assert_eq!(stats.top_end, Some(("Canal & Adams".to_string(), 3)));
        assert_eq!(
            stats.top_trip,
            Some((("Clark & Lake".to_string(), "Canal & Adams".to_string()), 2))
        );
    }

    #[test]
    fn test_pair_count_equals_largest_group() {
        // The pair count can differ from either station's own count.
        let trips = vec![
            trip("A St", "B St"),
            trip("A St", "C St"),
            trip("A St", "B St"),
            trip("D St", "B St"),
        ];
        let stats = StationStats::from_trips(&trips);
        assert_eq!(stats.top_start.as_ref().unwrap().1, 3);
        assert_eq!(stats.top_end.as_ref().unwrap().1, 3);
        assert_eq!(stats.top_trip.as_ref().unwrap().1, 2);
    }

    #[test]
    fn test_empty_view() {
        let stats = StationStats::from_trips(&[]);
        assert_eq!(stats.top_start, None);

        let mut out = Vec::new();
        print(&mut out, &stats).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("No trips matched the selected filters."));
    }
}
