// File: crates/sensitivity-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; places runs by anchor, baseline and rotation.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::surface::{TextAnchor, TextBaseline, TextRun};

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
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
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

    /// Paint `run` so that its anchor point lands on (run.x, run.y), rotated about that point.
    pub fn draw(&self, canvas: &skia::Canvas, run: &TextRun) {
        let p = self.layout(&run.text, run.size, run.color, run.bold);
        let w = p.longest_line();
        let dx = match run.anchor {
            TextAnchor::Start => 0.0,
            TextAnchor::Middle => -w * 0.5,
            TextAnchor::End => -w,
        };
        // Paragraph paints from its top-left corner
        let dy = match run.baseline {
            TextBaseline::Alphabetic => -p.alphabetic_baseline(),
            TextBaseline::Middle => -p.height() * 0.5,
            TextBaseline::Hanging => 0.0,
        };
        canvas.save();
        canvas.translate((run.x, run.y));
        if run.rotation != 0.0 {
            canvas.rotate(run.rotation, None);
        }
        p.paint(canvas, (dx, dy));
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
