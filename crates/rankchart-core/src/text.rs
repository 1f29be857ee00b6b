// File: crates/rankchart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; anchors labels by alignment and baseline.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::scene::{TextAlign, TextBaseline, TextPrimitive};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Helvetica", "Arial", "Roboto", "DejaVu Sans", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint a label so that its anchor point (per alignment/baseline) lands on (x, y),
    /// rotating about that point when requested.
    pub fn draw(&self, canvas: &skia::Canvas, label: &TextPrimitive) {
        let c = label.color;
        let p = self.layout(&label.text, label.size, skia::Color::from_argb(c.a, c.r, c.g, c.b), label.bold);
        let w = p.longest_line();
        let dx = match label.align {
            TextAlign::Left => 0.0,
            TextAlign::Center => -w * 0.5,
            TextAlign::Right => -w,
        };
        // Paragraph draws from its top-left corner.
        let dy = match label.baseline {
            TextBaseline::Top => 0.0,
            TextBaseline::Middle => -p.height() * 0.5,
            TextBaseline::Alphabetic => -p.alphabetic_baseline(),
        };
        canvas.save();
        canvas.translate((label.x, label.y));
        if label.rotation_deg != 0.0 {
            canvas.rotate(label.rotation_deg, None);
        }
        p.paint(canvas, (dx, dy));
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
