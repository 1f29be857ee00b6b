// File: crates/rankchart-core/src/surface.rs
// Summary: Fixed-size drawing surfaces a chart is painted onto (raster PNG, vector SVG).

use crate::error::ChartResult;
use crate::paint::{render_png, render_svg};
use crate::scene::Scene;

/// A drawing target owned by the host. Painting replaces whatever was drawn before.
pub trait Surface {
    fn size(&self) -> (i32, i32);
    fn draw(&mut self, scene: &Scene) -> ChartResult<()>;
    /// Encoded output of the last successful draw (`None` while blank).
    fn contents(&self) -> Option<&[u8]>;
}

/// Raster canvas; holds PNG bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RasterSurface {
    width: i32,
    height: i32,
    png: Option<Vec<u8>>,
}

impl RasterSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, png: None }
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn draw(&mut self, scene: &Scene) -> ChartResult<()> {
        self.png = Some(render_png(scene)?);
        Ok(())
    }

    fn contents(&self) -> Option<&[u8]> {
        self.png.as_deref()
    }
}

/// Vector surface; holds an SVG document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VectorSurface {
    width: i32,
    height: i32,
    svg: Option<Vec<u8>>,
}

impl VectorSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, svg: None }
    }

    pub fn svg_text(&self) -> Option<String> {
        self.svg.as_ref().map(|b| String::from_utf8_lossy(b).into_owned())
    }
}

impl Surface for VectorSurface {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn draw(&mut self, scene: &Scene) -> ChartResult<()> {
        self.svg = Some(render_svg(scene)?);
        Ok(())
    }

    fn contents(&self) -> Option<&[u8]> {
        self.svg.as_deref()
    }
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn size(&self) -> (i32, i32) {
        (**self).size()
    }

    fn draw(&mut self, scene: &Scene) -> ChartResult<()> {
        (**self).draw(scene)
    }

    fn contents(&self) -> Option<&[u8]> {
        (**self).contents()
    }
}
