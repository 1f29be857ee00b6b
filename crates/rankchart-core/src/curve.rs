// File: crates/rankchart-core/src/curve.rs
// Summary: Path generation (stepped, basis spline, linear), series colors and end-of-line labels.

use serde::Deserialize;

use crate::scale::{Scale, Scales};
use crate::scene::{PathOp, PathPrimitive, Primitive, Rgba, Scene, TextAlign, TextBaseline, TextPrimitive};
use crate::series::Series;
use crate::theme::Theme;

/// Where the vertical riser of a step sits between two samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepPosition {
    /// Rise at the earlier sample.
    Before,
    /// Rise halfway between samples.
    Middle,
    /// Hold the value until the next sample, then rise.
    #[default]
    After,
}

impl StepPosition {
    fn fraction(self) -> f32 {
        match self {
            StepPosition::Before => 0.0,
            StepPosition::Middle => 0.5,
            StepPosition::After => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interpolation {
    Linear,
    Step(StepPosition),
    /// Uniform cubic B-spline; passes through the end points only.
    Basis,
}

/// Path through projected points. An empty input gives no ops; a single point gives a lone move.
pub fn interpolate(points: &[(f32, f32)], interpolation: Interpolation) -> Vec<PathOp> {
    let Some(&(x0, y0)) = points.first() else {
        return Vec::new();
    };
    let mut ops = vec![PathOp::MoveTo(x0, y0)];
    match interpolation {
        Interpolation::Linear => {
            ops.extend(points[1..].iter().map(|&(x, y)| PathOp::LineTo(x, y)));
        }
        Interpolation::Step(pos) => step_ops(points, pos.fraction(), &mut ops),
        Interpolation::Basis => basis_ops(points, &mut ops),
    }
    ops
}

fn step_ops(points: &[(f32, f32)], t: f32, ops: &mut Vec<PathOp>) {
    for w in points.windows(2) {
        let ((xa, ya), (xb, yb)) = (w[0], w[1]);
        if t <= 0.0 {
            ops.push(PathOp::LineTo(xa, yb));
            ops.push(PathOp::LineTo(xb, yb));
        } else {
            let xm = xa * (1.0 - t) + xb * t;
            ops.push(PathOp::LineTo(xm, ya));
            ops.push(PathOp::LineTo(xm, yb));
        }
    }
    // A mid-step path still owes the final horizontal run.
    if t > 0.0 && t < 1.0 && points.len() > 1 {
        if let Some(&(x, y)) = points.last() {
            ops.push(PathOp::LineTo(x, y));
        }
    }
}

fn basis_ops(points: &[(f32, f32)], ops: &mut Vec<PathOp>) {
    let n = points.len();
    if n < 2 {
        return;
    }
    if n == 2 {
        let (x, y) = points[1];
        ops.push(PathOp::LineTo(x, y));
        return;
    }
    let (p0, p1) = (points[0], points[1]);
    ops.push(PathOp::LineTo((5.0 * p0.0 + p1.0) / 6.0, (5.0 * p0.1 + p1.1) / 6.0));
    // Sliding window of the two previous control points.
    let (mut a, mut b) = (p0, p1);
    for &c in &points[2..] {
        ops.push(bspline_segment(a, b, c));
        a = b;
        b = c;
    }
    ops.push(bspline_segment(a, b, b));
    ops.push(PathOp::LineTo(b.0, b.1));
}

fn bspline_segment(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> PathOp {
    PathOp::CubicTo {
        c1: ((2.0 * a.0 + b.0) / 3.0, (2.0 * a.1 + b.1) / 3.0),
        c2: ((a.0 + 2.0 * b.0) / 3.0, (a.1 + 2.0 * b.1) / 3.0),
        to: ((a.0 + 4.0 * b.0 + c.0) / 6.0, (a.1 + 4.0 * b.1 + c.1) / 6.0),
    }
}

/// Colors for identifiers in order of first appearance, cycling through the palette.
pub fn assign_colors<'a>(ids: impl IntoIterator<Item = &'a str>, palette: &[Rgba]) -> Vec<(String, Rgba)> {
    let mut seen: Vec<&str> = Vec::new();
    let mut out = Vec::new();
    for id in ids {
        if seen.contains(&id) {
            continue;
        }
        let color = if palette.is_empty() { Rgba::rgb(0, 0, 0) } else { palette[seen.len() % palette.len()] };
        seen.push(id);
        out.push((id.to_string(), color));
    }
    out
}

/// Project a series' samples into plot-local pixels.
pub fn project(series: &Series, scales: &Scales) -> Vec<(f32, f32)> {
    series
        .samples()
        .iter()
        .map(|s| (scales.x.date_to_px(s.time), scales.y.to_px(s.rank)))
        .collect()
}

/// Emits series paths (and labels, when enabled) into a scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveRenderer {
    pub interpolation: Interpolation,
    pub stroke_width: f32,
    pub end_labels: bool,
    pub label_offset: f32,
    pub font_size: f32,
}

impl CurveRenderer {
    pub fn stepped(position: StepPosition) -> Self {
        Self {
            interpolation: Interpolation::Step(position),
            stroke_width: 1.5,
            end_labels: false,
            label_offset: 3.0,
            font_size: 10.0,
        }
    }

    pub fn smoothed() -> Self {
        Self {
            interpolation: Interpolation::Basis,
            stroke_width: 1.5,
            end_labels: true,
            label_offset: 3.0,
            font_size: 10.0,
        }
    }

    /// Draw one series with `color`; the end label sits just right of its last sample.
    pub fn render_series(&self, series: &Series, color: Rgba, scales: &Scales, theme: &Theme, scene: &mut Scene) {
        let points = project(series, scales);
        scene.push(Primitive::Path(PathPrimitive {
            ops: interpolate(&points, self.interpolation),
            stroke: color,
            stroke_width: self.stroke_width,
        }));
        if !self.end_labels {
            return;
        }
        if let Some(&(x, y)) = points.last() {
            scene.push(Primitive::Text(
                TextPrimitive::new(series.id(), x + self.label_offset, y, self.font_size, theme.axis_label)
                    .aligned(TextAlign::Left, TextBaseline::Middle),
            ));
        }
    }
}
