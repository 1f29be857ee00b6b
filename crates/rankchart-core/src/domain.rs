// File: crates/rankchart-core/src/domain.rs
// Summary: Visible time/rank extents over a series set, plus padding of degenerate ranges.

use chrono::{Days, NaiveDate};

use crate::error::{ChartError, ChartResult};
use crate::series::SeriesSet;

/// Inclusive date extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeRange {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl TimeRange {
    pub fn contains(&self, t: NaiveDate) -> bool {
        self.min <= t && t <= self.max
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Widen a single-day range by one day on each side; wider ranges are returned unchanged.
    pub fn padded(self) -> Self {
        if !self.is_degenerate() {
            return self;
        }
        Self {
            min: self.min.checked_sub_days(Days::new(1)).unwrap_or(self.min),
            max: self.max.checked_add_days(Days::new(1)).unwrap_or(self.max),
        }
    }
}

/// Inclusive rank extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn contains(&self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }

    pub fn is_degenerate(&self) -> bool {
        (self.max - self.min).abs() < 1e-12
    }

    /// Widen a zero-width range by one rank on each side.
    pub fn padded(self) -> Self {
        if self.is_degenerate() {
            Self { min: self.min - 1.0, max: self.max + 1.0 }
        } else {
            self
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub time: TimeRange,
    pub value: ValueRange,
}

impl Domain {
    /// Union of every sample's time and rank across all series.
    pub fn from_series_set(set: &SeriesSet) -> ChartResult<Self> {
        if set.is_empty() {
            return Err(ChartError::NoData("series set is empty".into()));
        }
        let mut t_min = NaiveDate::MAX;
        let mut t_max = NaiveDate::MIN;
        let mut v_min = f64::INFINITY;
        let mut v_max = f64::NEG_INFINITY;
        for s in set.iter() {
            if s.is_empty() {
                return Err(ChartError::NoData(format!("series `{}` has no samples", s.id())));
            }
            for sample in s.samples() {
                t_min = t_min.min(sample.time);
                t_max = t_max.max(sample.time);
                v_min = v_min.min(sample.rank);
                v_max = v_max.max(sample.rank);
            }
        }
        let domain = Self {
            time: TimeRange { min: t_min, max: t_max },
            value: ValueRange { min: v_min, max: v_max },
        };
        tracing::debug!(
            series = set.len(),
            time_min = %domain.time.min,
            time_max = %domain.time.max,
            rank_min = domain.value.min,
            rank_max = domain.value.max,
            "computed domain"
        );
        Ok(domain)
    }

    /// Both ranges with degenerate extents widened, ready for scale construction.
    pub fn padded(self) -> Self {
        Self { time: self.time.padded(), value: self.value.padded() }
    }
}
