// File: crates/rankchart-core/src/geometry.rs
// Summary: Plot rectangle derived from surface size and margins.

use crate::types::Margins;

/// Plot rectangle inside the drawing surface, in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl PlotArea {
    /// Surface size minus margins; a collapsed area is clamped to one pixel per side.
    pub fn from_surface(width: i32, height: i32, margins: &Margins) -> Self {
        let w = (width - margins.hsum() as i32).max(1);
        let h = (height - margins.vsum() as i32).max(1);
        Self {
            left: margins.left as f32,
            top: margins.top as f32,
            width: w as f32,
            height: h as f32,
        }
    }

    pub fn right(&self) -> f32 { self.left + self.width }
    pub fn bottom(&self) -> f32 { self.top + self.height }
}
