//! Trip duration aggregates.

use std::io::{self, Write};

use crate::trip::Trip;

use super::util::format_duration;

#[derive(Debug, PartialEq)]
pub struct DurationStats {
    pub count: usize,
    pub total_secs: i64,
    pub mean_secs: Option<f64>,
    pub min_secs: Option<i64>,
    pub max_secs: Option<i64>,
}

impl DurationStats {
    pub fn from_trips(trips: &[Trip]) -> Self {
        let total_secs: i64 = trips.iter().map(|t| t.duration_secs).sum();
        let mean_secs = if trips.is_empty() {
            None
        } else {
            Some(total_secs as f64 / trips.len() as f64)
        };

        DurationStats {
            count: trips.len(),
            total_secs,
            mean_secs,
            min_secs: trips.iter().map(|t| t.duration_secs).min(),
            max_secs: trips.iter().map(|t| t.duration_secs).max(),
        }
    }
}

pub fn print<W: Write>(out: &mut W, stats: &DurationStats) -> io::Result<()> {
    let (Some(mean), Some(min), Some(max)) = (stats.mean_secs, stats.min_secs, stats.max_secs)
    else {
        return writeln!(out, "No trips matched the selected filters.");
    };

    writeln!(
        out,
        "What was the total traveling time?\n {}",
        format_duration(stats.total_secs as f64)
    )?;
    writeln!(
        out,
        "What was the average traveling time?\n {}",
        format_duration(mean)
    )?;
    writeln!(
        out,
        "What was the shortest traveling time?\n {}",
        format_duration(min as f64)
    )?;
    writeln!(
        out,
        "What was the longest traveling time?\n {}",
        format_duration(max as f64)
    )?;
    Ok(())
}
