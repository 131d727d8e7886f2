// File: crates/sensitivity-core/src/surface.rs
// Summary: Drawing-surface trait the heat-map renderer targets, plus the text run description.
// Notes:
// - Implemented by `Scene` (display list / SVG) and `RasterSurface` (Skia CPU raster).
// - A render pass always starts with `clear`, so implementations need no incremental state.

use skia_safe as skia;

use crate::geometry::{PointF, RectF};

/// Horizontal placement of a text run relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Vertical placement of a text run relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Alphabetic,
    Middle,
    /// Anchor is the top of the glyphs.
    Hanging,
}

/// What a text run labels. Backends may style or tag by role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRole {
    CellValue,
    Tick,
    Title,
    Caption,
}

impl TextRole {
    pub fn class_name(&self) -> &'static str {
        match self {
            TextRole::CellValue => "cell-label",
            TextRole::Tick => "tick",
            TextRole::Title => "title",
            TextRole::Caption => "caption",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: skia::Color,
    pub anchor: TextAnchor,
    pub baseline: TextBaseline,
    /// Rotation around (x, y) in degrees; negative turns counter-clockwise.
    pub rotation: f32,
    pub bold: bool,
    pub role: TextRole,
}

impl TextRun {
    /// Middle-anchored, middle-baseline, unrotated run.
    pub fn centered(text: impl Into<String>, x: f32, y: f32, size: f32, color: skia::Color, role: TextRole) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            size,
            color,
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Middle,
            rotation: 0.0,
            bold: false,
            role,
        }
    }

    pub fn anchored(mut self, anchor: TextAnchor, baseline: TextBaseline) -> Self {
        self.anchor = anchor;
        self.baseline = baseline;
        self
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// A rectangular visual surface the renderer owns for the duration of a pass.
pub trait Surface {
    /// Drop all prior content and paint the background.
    fn clear(&mut self, background: skia::Color);
    /// Filled rectangle; `tooltip` is the hover/inspection text, if the backend supports one.
    fn fill_rect(&mut self, rect: RectF, color: skia::Color, tooltip: Option<&str>);
    fn stroke_line(&mut self, from: PointF, to: PointF, color: skia::Color, width: f32);
    fn draw_text(&mut self, run: TextRun);
}
