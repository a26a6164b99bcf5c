//! Time-based filtering of cleaned trip records.

use chrono::Weekday;

use crate::city::{Month, day_name};
use crate::trip::Trip;

/// Which prompts the session should fire before loading data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChoice {
    Month,
    Day,
    Both,
    None,
}

impl FilterChoice {
    pub fn parse(token: &str) -> Option<FilterChoice> {
        match token.trim().to_lowercase().as_str() {
            "month" => Some(FilterChoice::Month),
            "day" => Some(FilterChoice::Day),
            "both" => Some(FilterChoice::Both),
            "none" => Some(FilterChoice::None),
            _ => None,
        }
    }

    pub fn wants_month(&self) -> bool {
        matches!(self, FilterChoice::Month | FilterChoice::Both)
    }

    pub fn wants_day(&self) -> bool {
        matches!(self, FilterChoice::Day | FilterChoice::Both)
    }
}

/// The user-chosen month/day restriction. Both unset means no filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl FilterSpec {
    /// Retains the records matching the spec, preserving source order.
    /// An unset spec is the identity.
    pub fn apply(&self, mut trips: Vec<Trip>) -> Vec<Trip> {
        trips.retain(|t| self.matches(t));
        trips
    }

    fn matches(&self, trip: &Trip) -> bool {
        self.month.is_none_or(|m| trip.month == m.name())
            && self.day.is_none_or(|d| trip.day_of_week == day_name(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn trip(month: &'static str, day_of_week: &'static str) -> Trip {
        Trip {
            start_time: NaiveDateTime::parse_from_str("2017-01-01 00:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            month,
            day_of_week,
            duration_secs: 60,
            start_station: "A St".to_string(),
            end_station: "B St".to_string(),
            user_type: "Subscriber".to_string(),
            gender: None,
            birth_year: None,
        }
    }

    #[test]
    fn test_parse_filter_choice() {
        assert_eq!(FilterChoice::parse("month"), Some(FilterChoice::Month));
        assert_eq!(FilterChoice::parse("BOTH"), Some(FilterChoice::Both));
        assert_eq!(FilterChoice::parse("none"), Some(FilterChoice::None));
        assert_eq!(FilterChoice::parse("all"), None);
    }

    #[test]
    fn test_filter_choice_prompts() {
        assert!(FilterChoice::Month.wants_month());
        assert!(!FilterChoice::Month.wants_day());
        assert!(FilterChoice::Both.wants_month());
        assert!(FilterChoice::Both.wants_day());
        assert!(!FilterChoice::None.wants_month());
        assert!(!FilterChoice::None.wants_day());
    }

    #[test]
    fn test_unset_spec_is_identity() {
        let trips = vec![trip("March", "Friday"), trip("May", "Saturday")];
        let kept = FilterSpec::default().apply(trips.clone());
        assert_eq!(kept, trips);
    }

    #[test]
    fn test_month_filter_keeps_only_that_month() {
        let trips = vec![
            trip("March", "Friday"),
            trip("May", "Friday"),
            trip("March", "Sunday"),
        ];
        let spec = FilterSpec {
            month: Some(Month::March),
            day: None,
        };
        let kept = spec.apply(trips);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|t| t.month == "March"));
    }

    #[test]
    fn test_month_and_day_filter_combine() {
        let trips = vec![
            trip("May", "Friday"),
            trip("May", "Saturday"),
            trip("March", "Friday"),
        ];
        let spec = FilterSpec {
            month: Some(Month::May),
            day: Some(Weekday::Fri),
        };
        let kept = spec.apply(trips);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].month, "May");
        assert_eq!(kept[0].day_of_week, "Friday");
    }
}
