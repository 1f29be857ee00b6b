// File: crates/rankchart-core/src/time.rs
// Summary: Date token parsing and the day-number representation used by the time scale.

use chrono::{Datelike, NaiveDate};

use crate::error::{ChartError, ChartResult};

/// Wire format of sample dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses date tokens with a fixed chrono format string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeParser {
    format: String,
}

impl TimeParser {
    pub fn new(format: impl Into<String>) -> Self {
        Self { format: format.into() }
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn parse(&self, token: &str) -> ChartResult<NaiveDate> {
        NaiveDate::parse_from_str(token.trim(), &self.format).map_err(|_| ChartError::InvalidDate {
            token: token.to_string(),
            format: self.format.clone(),
        })
    }
}

impl Default for TimeParser {
    fn default() -> Self {
        Self::new(DATE_FORMAT)
    }
}

/// Continuous day number for a date (days since 0001-01-01 in the proleptic Gregorian calendar).
#[inline]
pub fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Inverse of [`day_number`], truncating any fractional part of the day.
pub fn date_from_day_number(days: f64) -> Option<NaiveDate> {
    if !days.is_finite() {
        return None;
    }
    let whole = days.floor();
    if whole < i32::MIN as f64 || whole > i32::MAX as f64 {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(whole as i32)
}
