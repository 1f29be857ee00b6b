// File: crates/rankchart-core/src/ticks.rs
// Summary: Pluggable tick selection (1-2-5 rank ticks, calendar date ticks, even spacing) and label formats.

use chrono::{Datelike, Months, NaiveDate, Weekday};

/// Chooses at most `max_count` ordered tick values inside `[min, max]`.
pub trait TickSelector<T> {
    fn select_ticks(&self, min: T, max: T, max_count: usize) -> Vec<T>;
}

/// Round 1-2-5 steps, never finer than `min_step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NiceTicks {
    pub min_step: f64,
}

impl NiceTicks {
    /// Whole-number steps only.
    pub const fn integer() -> Self {
        Self { min_step: 1.0 }
    }

    pub const fn any() -> Self {
        Self { min_step: 0.0 }
    }
}

impl Default for NiceTicks {
    fn default() -> Self {
        Self::integer()
    }
}

impl TickSelector<f64> for NiceTicks {
    fn select_ticks(&self, min: f64, max: f64, max_count: usize) -> Vec<f64> {
        if max_count == 0 || !min.is_finite() || !max.is_finite() || min > max {
            return Vec::new();
        }
        if min == max {
            return vec![min];
        }

        let mut magnitude = 10f64.powf(((max - min) / max_count as f64).log10().floor());
        if !(magnitude.is_finite() && magnitude > 0.0) {
            magnitude = 1.0;
        }
        loop {
            for m in [1.0, 2.0, 5.0] {
                let step = m * magnitude;
                if step < self.min_step {
                    continue;
                }
                let start = (min / step).ceil() as i64;
                let stop = (max / step).floor() as i64;
                if stop - start + 1 <= max_count as i64 {
                    // Dividing by the reciprocal keeps decimal steps exact (0.1 * 3 != 0.3).
                    let inverse = (1.0 / step).round();
                    return (start..=stop)
                        .map(|i| if step < 1.0 && inverse > 0.0 { i as f64 / inverse } else { i as f64 * step })
                        .filter(|v| *v >= min && *v <= max)
                        .collect();
                }
            }
            magnitude *= 10.0;
        }
    }
}

/// Exactly `max_count` evenly spaced values including both ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvenTicks;

impl TickSelector<f64> for EvenTicks {
    fn select_ticks(&self, min: f64, max: f64, max_count: usize) -> Vec<f64> {
        match max_count {
            0 => Vec::new(),
            1 => vec![min],
            _ if min == max => vec![min],
            _ => linspace(min, max, max_count),
        }
    }
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps)
        .map(|i| if i + 1 == steps { end } else { start + step * i as f64 })
        .collect()
}

/// Calendar interval a date tick falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeInterval {
    /// Every k-th day of the month, counted from the 1st.
    Days(u32),
    /// Sundays.
    Week,
    /// First of every k-th month, counted from January.
    Months(u32),
    /// January 1st of every year divisible by k.
    Years(i32),
}

impl TimeInterval {
    pub fn accepts(self, d: NaiveDate) -> bool {
        match self {
            TimeInterval::Days(k) => (d.day() - 1) % k.max(1) == 0,
            TimeInterval::Week => d.weekday() == Weekday::Sun,
            TimeInterval::Months(k) => d.day() == 1 && d.month0() % k.max(1) == 0,
            TimeInterval::Years(k) => d.ordinal() == 1 && d.year().rem_euclid(k.max(1)) == 0,
        }
    }

    /// Rough upper bound on tick count, used to skip obviously-too-dense intervals.
    fn estimate(self, span_days: i64) -> i64 {
        let per = match self {
            TimeInterval::Days(k) => k as f64,
            TimeInterval::Week => 7.0,
            TimeInterval::Months(k) => 28.0 * k as f64,
            TimeInterval::Years(k) => 365.0 * k as f64,
        };
        (span_days as f64 / per).floor() as i64
    }

    /// Every accepted date in `[min, max]`, ascending.
    pub fn dates_between(self, min: NaiveDate, max: NaiveDate) -> Vec<NaiveDate> {
        match self {
            TimeInterval::Days(_) | TimeInterval::Week => min
                .iter_days()
                .take_while(|d| *d <= max)
                .filter(|d| self.accepts(*d))
                .collect(),
            TimeInterval::Months(_) => {
                let mut out = Vec::new();
                let mut cur = NaiveDate::from_ymd_opt(min.year(), min.month(), 1);
                while let Some(d) = cur {
                    if d > max {
                        break;
                    }
                    if d >= min && self.accepts(d) {
                        out.push(d);
                    }
                    cur = d.checked_add_months(Months::new(1));
                }
                out
            }
            TimeInterval::Years(_) => (min.year()..=max.year())
                .filter_map(|y| NaiveDate::from_ymd_opt(y, 1, 1))
                .filter(|d| *d >= min && *d <= max && self.accepts(*d))
                .collect(),
        }
    }
}

/// Calendar-aligned date ticks: the finest interval that fits within the tick budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CalendarTicks;

impl CalendarTicks {
    const FIXED: [TimeInterval; 5] = [
        TimeInterval::Days(1),
        TimeInterval::Days(2),
        TimeInterval::Week,
        TimeInterval::Months(1),
        TimeInterval::Months(3),
    ];

    /// The interval the selector settles on for a range and budget.
    pub fn interval_for(min: NaiveDate, max: NaiveDate, max_count: usize) -> Option<TimeInterval> {
        if max_count == 0 || min > max {
            return None;
        }
        let span = (max - min).num_days();
        let budget = max_count as i64;
        for interval in Self::FIXED {
            if interval.estimate(span) > budget + 1 {
                continue;
            }
            if interval.dates_between(min, max).len() <= max_count {
                return Some(interval);
            }
        }
        let mut years = 1i32;
        loop {
            for m in [1, 2, 5] {
                let interval = TimeInterval::Years(years.saturating_mul(m));
                if interval.dates_between(min, max).len() <= max_count {
                    return Some(interval);
                }
            }
            years = years.saturating_mul(10);
        }
    }
}

impl TickSelector<NaiveDate> for CalendarTicks {
    fn select_ticks(&self, min: NaiveDate, max: NaiveDate, max_count: usize) -> Vec<NaiveDate> {
        Self::interval_for(min, max, max_count)
            .map(|interval| interval.dates_between(min, max))
            .unwrap_or_default()
    }
}

/// Date label in the coarsest unit the date starts: year, month, week (Sunday) or day.
pub fn format_date_tick(d: NaiveDate) -> String {
    let fmt = if d.ordinal() == 1 {
        "%Y"
    } else if d.day() == 1 {
        "%B"
    } else if d.weekday() == Weekday::Sun {
        "%b %d"
    } else {
        "%a %d"
    };
    d.format(fmt).to_string()
}

/// Decimal places needed to tell ticks `step` apart (0 for whole-number steps).
pub fn precision_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        return 0;
    }
    ((-step.log10()).ceil() as usize).min(6)
}

pub fn format_rank_tick(v: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, v);
    // avoid "-0"
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}
