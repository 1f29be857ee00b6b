// File: crates/rankchart-core/src/scale.rs
// Summary: Time (X) and rank (Y) scale transforms in plot-local pixels, with inversion.

use chrono::NaiveDate;

use crate::domain::{Domain, TimeRange, ValueRange};
use crate::geometry::PlotArea;
use crate::time::{date_from_day_number, day_number};

/// Continuous, monotonic mapping between a numeric domain and a pixel range.
pub trait Scale {
    fn to_px(&self, v: f64) -> f32;
    fn from_px(&self, px: f32) -> f64;
    /// Domain bounds as (min, max).
    fn domain(&self) -> (f64, f64);
    /// Pixel images of (domain min, domain max).
    fn range(&self) -> (f32, f32);
}

/// Horizontal scale, linear in elapsed days.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub left_px: f32,
    pub right_px: f32,
    dmin: f64,
    dmax: f64,
    range: TimeRange,
}

impl TimeScale {
    /// Build from a date range; a single-day range is padded first.
    pub fn new(range: TimeRange, left_px: f32, right_px: f32) -> Self {
        let range = range.padded();
        Self {
            left_px,
            right_px,
            dmin: day_number(range.min),
            dmax: day_number(range.max),
            range,
        }
    }

    pub fn time_range(&self) -> TimeRange {
        self.range
    }

    #[inline]
    pub fn date_to_px(&self, t: NaiveDate) -> f32 {
        self.to_px(day_number(t))
    }

    pub fn px_to_date(&self, px: f32) -> Option<NaiveDate> {
        date_from_day_number(self.from_px(px))
    }
}

impl Scale for TimeScale {
    #[inline]
    fn to_px(&self, v: f64) -> f32 {
        let span = (self.dmax - self.dmin).max(1e-12);
        self.left_px + ((v - self.dmin) / span) as f32 * (self.right_px - self.left_px)
    }

    #[inline]
    fn from_px(&self, px: f32) -> f64 {
        let width = self.right_px - self.left_px;
        if width.abs() < f32::EPSILON {
            return self.dmin;
        }
        self.dmin + ((px - self.left_px) / width) as f64 * (self.dmax - self.dmin)
    }

    fn domain(&self) -> (f64, f64) {
        (self.dmin, self.dmax)
    }

    fn range(&self) -> (f32, f32) {
        (self.left_px, self.right_px)
    }
}

/// Vertical rank scale. Inverted: the lowest rank sits at `top_px`, the highest at `bottom_px`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new(range: ValueRange, top_px: f32, bottom_px: f32) -> Self {
        let range = range.padded();
        Self { top_px, bottom_px, vmin: range.min, vmax: range.max }
    }

    pub fn value_range(&self) -> ValueRange {
        ValueRange { min: self.vmin, max: self.vmax }
    }
}

impl Scale for ValueScale {
    #[inline]
    fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.top_px + ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    fn from_px(&self, py: f32) -> f64 {
        let height = self.bottom_px - self.top_px;
        if height.abs() < f32::EPSILON {
            return self.vmin;
        }
        self.vmin + ((py - self.top_px) / height) as f64 * (self.vmax - self.vmin)
    }

    fn domain(&self) -> (f64, f64) {
        (self.vmin, self.vmax)
    }

    fn range(&self) -> (f32, f32) {
        (self.top_px, self.bottom_px)
    }
}

/// The pair of scales a chart draws with, in plot-local coordinates (origin at the plot's top-left).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub x: TimeScale,
    pub y: ValueScale,
}

impl Scales {
    pub fn build(domain: &Domain, plot: &PlotArea) -> Self {
        let x = TimeScale::new(domain.time, 0.0, plot.width);
        let y = ValueScale::new(domain.value, 0.0, plot.height);
        tracing::debug!(width = plot.width, height = plot.height, "built scales");
        Self { x, y }
    }
}
