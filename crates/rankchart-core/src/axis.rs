// File: crates/rankchart-core/src/axis.rs
// Summary: Axis model and renderer: tick selection, labels, tick marks, frame and the "Rank" title.

use chrono::NaiveDate;

use crate::scale::{Scale, TimeScale, ValueScale};
use crate::scene::{
    LinePrimitive, PathOp, PathPrimitive, Primitive, RectPrimitive, Scene, TextAlign, TextBaseline,
    TextPrimitive,
};
use crate::theme::Theme;
use crate::ticks::{
    format_date_tick, format_rank_tick, precision_for_step, CalendarTicks, NiceTicks, TickSelector,
};
use crate::time::day_number;

/// Title drawn along the value axis.
pub const RANK_TITLE: &str = "Rank";

/// A labeled reference point on an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub px: f32,
    pub label: String,
}

/// How the axis outline is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisStyle {
    /// Raster look: time baseline plus a full rectangle around the plot.
    Framed,
    /// Vector look: per-axis domain line with outer end ticks.
    Open,
}

/// Per-axis drawing parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    /// Upper bound on the number of ticks.
    pub tick_count: usize,
    pub tick_size: f32,
    pub tick_padding: f32,
    pub font_size: f32,
}

impl Axis {
    pub const fn with_ticks(tick_count: usize) -> Self {
        Self { tick_count, tick_size: 6.0, tick_padding: 3.0, font_size: 10.0 }
    }
}

/// Time ticks for a scale: selected dates inside the scale domain, positioned and labeled.
pub fn time_ticks(scale: &TimeScale, selector: &dyn TickSelector<NaiveDate>, max_count: usize) -> Vec<Tick> {
    let range = scale.time_range();
    selector
        .select_ticks(range.min, range.max, max_count)
        .into_iter()
        .take(max_count)
        .map(|d| Tick { value: day_number(d), px: scale.date_to_px(d), label: format_date_tick(d) })
        .collect()
}

/// Rank ticks for a scale, formatted with the precision their spacing needs.
pub fn rank_ticks(scale: &ValueScale, selector: &dyn TickSelector<f64>, max_count: usize) -> Vec<Tick> {
    let (min, max) = scale.domain();
    let values: Vec<f64> = selector.select_ticks(min, max, max_count).into_iter().take(max_count).collect();
    let step = match values.as_slice() {
        [a, b, ..] => b - a,
        _ => 1.0,
    };
    let precision = precision_for_step(step);
    values
        .into_iter()
        .map(|v| Tick { value: v, px: scale.to_px(v), label: format_rank_tick(v, precision) })
        .collect()
}

/// Emits both axes of a chart into a scene. Holds no per-render state.
pub struct AxisRenderer {
    pub style: AxisStyle,
    pub x: Axis,
    pub y: Axis,
    pub title: String,
    time_selector: Box<dyn TickSelector<NaiveDate> + Send + Sync>,
    rank_selector: Box<dyn TickSelector<f64> + Send + Sync>,
}

impl AxisRenderer {
    pub fn new(style: AxisStyle, x: Axis, y: Axis) -> Self {
        Self {
            style,
            x,
            y,
            title: RANK_TITLE.to_string(),
            time_selector: Box::new(CalendarTicks),
            rank_selector: Box::new(NiceTicks::integer()),
        }
    }

    /// Raster defaults: 10 date ticks, 20 rank ticks, framed plot.
    pub fn framed() -> Self {
        Self::new(AxisStyle::Framed, Axis::with_ticks(10), Axis::with_ticks(20))
    }

    /// Vector defaults: 10 ticks on each axis, open domain lines.
    pub fn open() -> Self {
        Self::new(AxisStyle::Open, Axis::with_ticks(10), Axis::with_ticks(10))
    }

    pub fn with_time_selector(mut self, selector: impl TickSelector<NaiveDate> + Send + Sync + 'static) -> Self {
        self.time_selector = Box::new(selector);
        self
    }

    pub fn with_rank_selector(mut self, selector: impl TickSelector<f64> + Send + Sync + 'static) -> Self {
        self.rank_selector = Box::new(selector);
        self
    }

    pub fn x_ticks(&self, scale: &TimeScale) -> Vec<Tick> {
        time_ticks(scale, self.time_selector.as_ref(), self.x.tick_count)
    }

    pub fn y_ticks(&self, scale: &ValueScale) -> Vec<Tick> {
        rank_ticks(scale, self.rank_selector.as_ref(), self.y.tick_count)
    }

    /// Bottom axis: marks hang below the plot, labels centered under them.
    pub fn render_time_axis(&self, scale: &TimeScale, plot_h: f32, theme: &Theme, scene: &mut Scene) {
        let ax = &self.x;
        let ticks = self.x_ticks(scale);
        for t in &ticks {
            scene.push(Primitive::Line(LinePrimitive {
                from: (t.px, plot_h),
                to: (t.px, plot_h + ax.tick_size),
                stroke: theme.tick,
                stroke_width: 1.0,
            }));
        }

        let (x0, x1) = scale.range();
        match self.style {
            AxisStyle::Framed => scene.push(Primitive::Line(LinePrimitive {
                from: (x0, plot_h),
                to: (x1, plot_h),
                stroke: theme.axis_line,
                stroke_width: 1.0,
            })),
            AxisStyle::Open => scene.push(Primitive::Path(PathPrimitive {
                ops: vec![
                    PathOp::MoveTo(x0, plot_h + ax.tick_size),
                    PathOp::LineTo(x0, plot_h),
                    PathOp::LineTo(x1, plot_h),
                    PathOp::LineTo(x1, plot_h + ax.tick_size),
                ],
                stroke: theme.axis_line,
                stroke_width: 1.0,
            })),
        }

        for t in ticks {
            scene.push(Primitive::Text(
                TextPrimitive::new(t.label, t.px, plot_h + ax.tick_size + ax.tick_padding, ax.font_size, theme.axis_label)
                    .aligned(TextAlign::Center, TextBaseline::Top),
            ));
        }
    }

    /// Left axis: marks point left, labels right-aligned and vertically centered, rotated title.
    pub fn render_value_axis(&self, scale: &ValueScale, plot_w: f32, theme: &Theme, scene: &mut Scene) {
        let ay = &self.y;
        let ticks = self.y_ticks(scale);
        for t in &ticks {
            scene.push(Primitive::Line(LinePrimitive {
                from: (0.0, t.px),
                to: (-ay.tick_size, t.px),
                stroke: theme.tick,
                stroke_width: 1.0,
            }));
        }

        let (top, bottom) = scale.range();
        match self.style {
            AxisStyle::Framed => scene.push(Primitive::Rect(RectPrimitive {
                left: 0.0,
                top,
                width: plot_w,
                height: bottom - top,
                stroke: theme.axis_line,
                stroke_width: 1.0,
            })),
            AxisStyle::Open => scene.push(Primitive::Path(PathPrimitive {
                ops: vec![
                    PathOp::MoveTo(-ay.tick_size, bottom),
                    PathOp::LineTo(0.0, bottom),
                    PathOp::LineTo(0.0, top),
                    PathOp::LineTo(-ay.tick_size, top),
                ],
                stroke: theme.axis_line,
                stroke_width: 1.0,
            })),
        }

        for t in ticks {
            scene.push(Primitive::Text(
                TextPrimitive::new(t.label, -(ay.tick_size + ay.tick_padding), t.px, ay.font_size, theme.axis_label)
                    .aligned(TextAlign::Right, TextBaseline::Middle),
            ));
        }

        let title = match self.style {
            AxisStyle::Framed => TextPrimitive::new(self.title.as_str(), 10.0, 10.0, ay.font_size, theme.axis_label).bold(),
            AxisStyle::Open => TextPrimitive::new(self.title.as_str(), 6.0, top, ay.font_size, theme.axis_label),
        };
        scene.push(Primitive::Text(title.aligned(TextAlign::Right, TextBaseline::Top).rotated(-90.0)));
    }
}

impl std::fmt::Debug for AxisRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AxisRenderer")
            .field("style", &self.style)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}
