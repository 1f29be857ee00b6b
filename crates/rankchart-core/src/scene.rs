// File: crates/rankchart-core/src/scene.rs
// Summary: Backend-agnostic draw primitives produced by the axis and curve renderers.
// Notes:
// - Coordinates are plot-local; `Scene::origin` is the translation applied by the painter.
// - The scene is plain data so tests can inspect exactly what a chart would draw.

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let h = hex.strip_prefix('#')?;
        if h.len() != 6 || !h.is_ascii() {
            return None;
        }
        let p = |i: usize| u8::from_str_radix(&h[i..i + 2], 16).ok();
        Some(Self::rgb(p(0)?, p(2)?, p(4)?))
    }
}

/// One path command in plot-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathOp {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    CubicTo { c1: (f32, f32), c2: (f32, f32), to: (f32, f32) },
}

impl PathOp {
    pub fn end_point(&self) -> (f32, f32) {
        match *self {
            PathOp::MoveTo(x, y) | PathOp::LineTo(x, y) => (x, y),
            PathOp::CubicTo { to, .. } => to,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PathPrimitive {
    pub ops: Vec<PathOp>,
    pub stroke: Rgba,
    pub stroke_width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinePrimitive {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub stroke: Rgba,
    pub stroke_width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectPrimitive {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub stroke: Rgba,
    pub stroke_width: f32,
}

/// Horizontal anchor of a label relative to its x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchor of a label relative to its y.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Alphabetic,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub bold: bool,
    pub color: Rgba,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    /// Clockwise rotation in degrees about (x, y).
    pub rotation_deg: f32,
}

impl TextPrimitive {
    pub fn new(text: impl Into<String>, x: f32, y: f32, size: f32, color: Rgba) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            size,
            bold: false,
            color,
            align: TextAlign::Left,
            baseline: TextBaseline::Alphabetic,
            rotation_deg: 0.0,
        }
    }

    pub fn aligned(mut self, align: TextAlign, baseline: TextBaseline) -> Self {
        self.align = align;
        self.baseline = baseline;
        self
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation_deg = degrees;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line(LinePrimitive),
    Rect(RectPrimitive),
    Path(PathPrimitive),
    Text(TextPrimitive),
}

/// Everything one chart draw pass paints, in order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub origin: (f32, f32),
    pub background: Rgba,
    pub items: Vec<Primitive>,
}

impl Scene {
    pub fn new(width: i32, height: i32, origin: (f32, f32), background: Rgba) -> Self {
        Self { width, height, origin, background, items: Vec::new() }
    }

    pub fn push(&mut self, p: Primitive) {
        self.items.push(p);
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.items.iter().filter_map(|p| match p {
            Primitive::Line(l) => Some(l),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.items.iter().filter_map(|p| match p {
            Primitive::Rect(r) => Some(r),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathPrimitive> {
        self.items.iter().filter_map(|p| match p {
            Primitive::Path(path) => Some(path),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.items.iter().filter_map(|p| match p {
            Primitive::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
