//! Interactive session loop: prompt, load, clean, filter, report, repeat.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::city::{City, Month, parse_day};
use crate::clean::clean;
use crate::filter::{FilterChoice, FilterSpec};
use crate::input::{prompt_until_valid, read_token};
use crate::loader::load_city;
use crate::reports::{self, SEPARATOR};

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";

const CITY_PROMPT: &str = "Would you like to see data for Chicago, New York, or Washington?";
const FILTER_PROMPT: &str = "Would you like to filter the data by month, day, both, or not at all? Type \"none\" for no time filter.";
const MONTH_PROMPT: &str = "Which month? January, February, March, April, May or June?";
const MONTH_REPROMPT: &str = "Please type out the correct month:";
const DAY_PROMPT: &str =
    "Which day? Monday, Tuesday, Wednesday, Thursday, Friday, Saturday or Sunday?";
const DAY_REPROMPT: &str = "Please type out the correct day:";
const RESTART_PROMPT: &str = "\nType any key to exit or type \"y\" to restart";

/// Runs interactive sessions until the user declines to restart.
///
/// Every iteration reloads and recleans the chosen city's data; nothing
/// is cached across restarts. Invalid prompt answers are re-asked
/// indefinitely; a missing data file is fatal for the whole run.
pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W, data_dir: &Path) -> Result<()> {
    writeln!(out, "{GREETING}")?;

    loop {
        let (city, filter) = gather_filters(input, out)?;
        writeln!(out, "{SEPARATOR}")?;
        info!(city = %city, ?filter, "Session filters chosen");

        let records = load_city(data_dir, city)
            .with_context(|| format!("loading {} trip data", city.name()))?;
        let cleaned = clean(city, records);
        let trips = filter.apply(cleaned);
        info!(city = %city, trips = trips.len(), "Filtered view ready");

        reports::run_all(out, city, &filter, &trips)?;

        let restart = read_token(input, out, RESTART_PROMPT)?;
        if restart != "y" {
            break;
        }
    }

    Ok(())
}

/// Walks the prompt sequence: city, filter condition, then the month
/// and day prompts the condition calls for.
fn gather_filters<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<(City, FilterSpec)> {
    let city = prompt_until_valid(input, out, CITY_PROMPT, CITY_PROMPT, City::parse)?;
    let choice = prompt_until_valid(input, out, FILTER_PROMPT, FILTER_PROMPT, FilterChoice::parse)?;

    let mut filter = FilterSpec::default();
    if choice.wants_month() {
        filter.month = Some(prompt_until_valid(
            input,
            out,
            MONTH_PROMPT,
            MONTH_REPROMPT,
            Month::parse,
        )?);
    }
    if choice.wants_day() {
        filter.day = Some(prompt_until_valid(
            input,
            out,
            DAY_PROMPT,
            DAY_REPROMPT,
            parse_day,
        )?);
    }

    Ok((city, filter))
}
