// File: crates/rankchart-core/src/paint.rs
// Summary: Paints a `Scene` onto Skia canvases: CPU raster (PNG / RGBA8) and SVG vector output.

use skia_safe as skia;

use crate::error::{ChartError, ChartResult};
use crate::scene::{PathOp, Primitive, Rgba, Scene};
use crate::text::TextShaper;

#[inline]
fn sk(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(color: Rgba, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(sk(color));
    paint
}

fn to_path(ops: &[PathOp]) -> skia::Path {
    let mut path = skia::Path::new();
    for op in ops {
        match *op {
            PathOp::MoveTo(x, y) => {
                path.move_to((x, y));
            }
            PathOp::LineTo(x, y) => {
                path.line_to((x, y));
            }
            PathOp::CubicTo { c1, c2, to } => {
                path.cubic_to(c1, c2, to);
            }
        }
    }
    path
}

/// Draw every primitive of `scene`, translated by the scene origin, in order.
pub fn paint_scene(canvas: &skia::Canvas, scene: &Scene, shaper: &TextShaper) {
    canvas.clear(sk(scene.background));
    canvas.save();
    canvas.translate(scene.origin);

    for item in &scene.items {
        match item {
            Primitive::Line(l) => {
                canvas.draw_line(l.from, l.to, &stroke_paint(l.stroke, l.stroke_width));
            }
            Primitive::Rect(r) => {
                let rect = skia::Rect::from_xywh(r.left, r.top, r.width, r.height);
                canvas.draw_rect(rect, &stroke_paint(r.stroke, r.stroke_width));
            }
            Primitive::Path(p) => {
                if p.ops.len() > 1 {
                    canvas.draw_path(&to_path(&p.ops), &stroke_paint(p.stroke, p.stroke_width));
                }
            }
            Primitive::Text(t) => shaper.draw(canvas, t),
        }
    }

    canvas.restore();
}

fn raster_surface(scene: &Scene) -> ChartResult<skia::Surface> {
    skia::surfaces::raster_n32_premul((scene.width, scene.height))
        .ok_or_else(|| ChartError::Surface(format!("failed to create {}x{} raster surface", scene.width, scene.height)))
}

/// Render to PNG bytes using a CPU raster surface.
pub fn render_png(scene: &Scene) -> ChartResult<Vec<u8>> {
    let mut surface = raster_surface(scene)?;
    paint_scene(surface.canvas(), scene, &TextShaper::new());

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| ChartError::Surface("encode PNG failed".into()))?;
    Ok(data.as_bytes().to_vec())
}

/// Render to a tightly packed, unpremultiplied RGBA8 buffer. Returns (pixels, width, height, stride).
pub fn render_rgba8(scene: &Scene) -> ChartResult<(Vec<u8>, u32, u32, usize)> {
    let mut surface = raster_surface(scene)?;
    paint_scene(surface.canvas(), scene, &TextShaper::new());

    let (w, h) = (scene.width, scene.height);
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(ChartError::Surface("reading raster pixels failed".into()));
    }
    Ok((pixels, w as u32, h as u32, stride))
}

/// Render to an SVG document using Skia's SVG canvas.
pub fn render_svg(scene: &Scene) -> ChartResult<Vec<u8>> {
    if scene.width <= 0 || scene.height <= 0 {
        return Err(ChartError::Surface(format!("invalid SVG size {}x{}", scene.width, scene.height)));
    }
    let bounds = skia::Rect::from_iwh(scene.width, scene.height);
    let canvas = skia::svg::Canvas::new(bounds, None);
    paint_scene(&canvas, scene, &TextShaper::new());
    let data = canvas.end();
    Ok(data.as_bytes().to_vec())
}
