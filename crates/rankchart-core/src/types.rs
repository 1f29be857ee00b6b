// File: crates/rankchart-core/src/types.rs
// Summary: Shared types and constants (surface sizes, margins, chart variants).

use serde::Deserialize;

/// Default surface width in pixels.
pub const WIDTH: i32 = 960;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 500;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    /// Create new margins in CSS order (non-negative by type).
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal margin (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Margins of the single-series raster chart.
    pub const fn stepped() -> Self {
        Self::new(20, 20, 30, 50)
    }
    /// Margins of the multi-series vector chart; the wider right side holds end labels.
    pub const fn smoothed() -> Self {
        Self::new(20, 80, 30, 50)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::stepped()
    }
}

/// The two supported chart shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartVariant {
    /// One series, right-angle steps, raster surface.
    Stepped,
    /// Many series, basis spline, vector surface, end labels and detail lookup.
    Smoothed,
}

impl ChartVariant {
    pub fn default_margins(self) -> Margins {
        match self {
            ChartVariant::Stepped => Margins::stepped(),
            ChartVariant::Smoothed => Margins::smoothed(),
        }
    }

    /// Whether a detail fetch follows the primary render.
    pub fn has_detail(self) -> bool {
        matches!(self, ChartVariant::Smoothed)
    }
}
