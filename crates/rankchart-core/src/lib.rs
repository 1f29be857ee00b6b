// File: crates/rankchart-core/src/lib.rs
// Summary: Core library entry point; exports the rank-chart pipeline from payload parsing to painted surfaces.

pub mod axis;
pub mod chart;
pub mod curve;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod paint;
pub mod scale;
pub mod scene;
pub mod series;
pub mod surface;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod time;
pub mod types;

pub use axis::{Axis, AxisRenderer, AxisStyle, Tick};
pub use chart::{Chart, ChartOptions};
pub use curve::{assign_colors, interpolate, CurveRenderer, Interpolation, StepPosition};
pub use domain::{Domain, TimeRange, ValueRange};
pub use error::{ChartError, ChartResult};
pub use scale::{Scale, Scales, TimeScale, ValueScale};
pub use scene::{PathOp, Primitive, Rgba, Scene};
pub use series::{Payload, Sample, Series, SeriesSet, WirePayload};
pub use surface::{RasterSurface, Surface, VectorSurface};
pub use theme::Theme;
pub use text::TextShaper;
pub use ticks::{CalendarTicks, EvenTicks, NiceTicks, TickSelector};
pub use time::TimeParser;
pub use types::{ChartVariant, Margins};
