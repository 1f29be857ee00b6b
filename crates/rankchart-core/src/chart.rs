// File: crates/rankchart-core/src/chart.rs
// Summary: Chart struct: series set -> domain -> scales -> scene, plus PNG/SVG rendering helpers.

use std::path::Path;

use crate::axis::AxisRenderer;
use crate::curve::{assign_colors, CurveRenderer, StepPosition};
use crate::domain::Domain;
use crate::error::{ChartError, ChartResult};
use crate::geometry::PlotArea;
use crate::paint;
use crate::scale::Scales;
use crate::scene::{Rgba, Scene};
use crate::series::{Payload, SeriesSet};
use crate::surface::Surface;
use crate::theme::Theme;
use crate::time::TimeParser;
use crate::types::{ChartVariant, Margins, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartOptions {
    pub width: i32,
    pub height: i32,
    pub margins: Margins,
    pub variant: ChartVariant,
    pub theme: Theme,
    /// Riser placement for the stepped variant.
    pub step: StepPosition,
}

impl ChartOptions {
    pub fn new(variant: ChartVariant, width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            margins: variant.default_margins(),
            variant,
            theme: Theme::default(),
            step: StepPosition::default(),
        }
    }

    pub fn stepped(width: i32, height: i32) -> Self {
        Self::new(ChartVariant::Stepped, width, height)
    }

    pub fn smoothed(width: i32, height: i32) -> Self {
        Self::new(ChartVariant::Smoothed, width, height)
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_step(mut self, step: StepPosition) -> Self {
        self.step = step;
        self
    }

    pub fn plot_area(&self) -> PlotArea {
        PlotArea::from_surface(self.width, self.height, &self.margins)
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self::stepped(WIDTH, HEIGHT)
    }
}

/// A chart ready to draw. Built once from a series set and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Chart {
    options: ChartOptions,
    plot: PlotArea,
    domain: Domain,
    scales: Scales,
    series: SeriesSet,
    colors: Vec<(String, Rgba)>,
}

impl Chart {
    /// Compute the domain and scales for `series`. Fails with `NoData` before any scale exists.
    pub fn build(series: SeriesSet, options: ChartOptions) -> ChartResult<Self> {
        let domain = Domain::from_series_set(&series)?;
        let plot = options.plot_area();
        let scales = Scales::build(&domain.padded(), &plot);
        let colors = match options.variant {
            ChartVariant::Stepped => series.ids().map(|id| (id.to_string(), options.theme.line_stroke)).collect(),
            ChartVariant::Smoothed => assign_colors(series.ids(), options.theme.palette),
        };
        Ok(Self { options, plot, domain, scales, series, colors })
    }

    /// Parse and build. The payload shape must match the variant: a list for stepped,
    /// a map for smoothed.
    pub fn from_payload(payload: &Payload, parser: &TimeParser, options: ChartOptions) -> ChartResult<Self> {
        match (options.variant, payload.is_multi()) {
            (ChartVariant::Stepped, true) => {
                return Err(ChartError::Payload("stepped chart expects a list of samples, got a map".into()))
            }
            (ChartVariant::Smoothed, false) => {
                return Err(ChartError::Payload("smoothed chart expects a map of series, got a list".into()))
            }
            _ => {}
        }
        Self::build(payload.parse_series(parser)?, options)
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn plot(&self) -> &PlotArea {
        &self.plot
    }

    /// Raw (unpadded) extents of the data.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn scales(&self) -> &Scales {
        &self.scales
    }

    pub fn series(&self) -> &SeriesSet {
        &self.series
    }

    /// Stroke color per series identifier, in display order.
    pub fn colors(&self) -> &[(String, Rgba)] {
        &self.colors
    }

    pub fn axis_renderer(&self) -> AxisRenderer {
        match self.options.variant {
            ChartVariant::Stepped => AxisRenderer::framed(),
            ChartVariant::Smoothed => AxisRenderer::open(),
        }
    }

    pub fn curve_renderer(&self) -> CurveRenderer {
        match self.options.variant {
            ChartVariant::Stepped => CurveRenderer::stepped(self.options.step),
            ChartVariant::Smoothed => CurveRenderer::smoothed(),
        }
    }

    /// Scene with the variant's default axis and curve renderers.
    pub fn scene(&self) -> Scene {
        self.scene_with(&self.axis_renderer(), &self.curve_renderer())
    }

    /// Axes first, then one curve per series in display order.
    pub fn scene_with(&self, axes: &AxisRenderer, curves: &CurveRenderer) -> Scene {
        let theme = &self.options.theme;
        let mut scene = Scene::new(self.options.width, self.options.height, (self.plot.left, self.plot.top), theme.background);
        axes.render_time_axis(&self.scales.x, self.plot.height, theme, &mut scene);
        axes.render_value_axis(&self.scales.y, self.plot.width, theme, &mut scene);
        for (series, (_, color)) in self.series.iter().zip(&self.colors) {
            curves.render_series(series, *color, &self.scales, theme, &mut scene);
        }
        tracing::debug!(items = scene.items.len(), variant = ?self.options.variant, "built scene");
        scene
    }

    /// Paint onto a host-provided surface.
    pub fn draw_on(&self, surface: &mut dyn Surface) -> ChartResult<()> {
        surface.draw(&self.scene())
    }

    pub fn render_to_png_bytes(&self) -> ChartResult<Vec<u8>> {
        paint::render_png(&self.scene())
    }

    pub fn render_to_rgba8(&self) -> ChartResult<(Vec<u8>, u32, u32, usize)> {
        paint::render_rgba8(&self.scene())
    }

    pub fn render_to_svg_bytes(&self) -> ChartResult<Vec<u8>> {
        paint::render_svg(&self.scene())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, output_png_path: impl AsRef<Path>) -> ChartResult<()> {
        write_creating_parent(output_png_path.as_ref(), &self.render_to_png_bytes()?)
    }

    /// Render the chart to an SVG document at `output_svg_path`.
    pub fn render_to_svg(&self, output_svg_path: impl AsRef<Path>) -> ChartResult<()> {
        write_creating_parent(output_svg_path.as_ref(), &self.render_to_svg_bytes()?)
    }
}

fn write_creating_parent(path: &Path, bytes: &[u8]) -> ChartResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
