// File: crates/sensitivity-core/src/scene.rs
// Summary: Display-list surface; records primitives in draw order and serializes them to SVG.

use std::fmt::Write as _;
use std::path::Path;

use skia_safe as skia;

use crate::error::Result;
use crate::geometry::{PointF, RectF};
use crate::surface::{Surface, TextAnchor, TextBaseline, TextRole, TextRun};

#[derive(Clone, Debug, PartialEq)]
pub struct FilledRect {
    pub rect: RectF,
    pub fill: skia::Color,
    pub tooltip: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineSegment {
    pub from: PointF,
    pub to: PointF,
    pub color: skia::Color,
    pub width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Rect(FilledRect),
    Line(LineSegment),
    Text(TextRun),
}

/// Retained copy of exactly one render pass.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Option<skia::Color>,
    items: Vec<Primitive>,
}

impl Scene {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, background: None, items: Vec::new() }
    }

    pub fn items(&self) -> &[Primitive] { &self.items }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn rects(&self) -> impl Iterator<Item = &FilledRect> + '_ {
        self.items.iter().filter_map(|p| match p {
            Primitive::Rect(r) => Some(r),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineSegment> + '_ {
        self.items.iter().filter_map(|p| match p {
            Primitive::Line(l) => Some(l),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRun> + '_ {
        self.items.iter().filter_map(|p| match p {
            Primitive::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn texts_with_role(&self, role: TextRole) -> impl Iterator<Item = &TextRun> + '_ {
        self.texts().filter(move |t| t.role == role)
    }

    /// Serialize the recorded primitives as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        if let Some(bg) = self.background {
            let _ = writeln!(out, r#"  <rect width="100%" height="100%" fill="{}"/>"#, hex(bg));
        }
        for item in &self.items {
            match item {
                Primitive::Rect(r) => {
                    let _ = write!(
                        out,
                        r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
                        num(r.rect.left), num(r.rect.top), num(r.rect.width), num(r.rect.height), hex(r.fill)
                    );
                    match &r.tooltip {
                        Some(tip) => { let _ = writeln!(out, "><title>{}</title></rect>", escape(tip)); }
                        None => out.push_str("/>\n"),
                    }
                }
                Primitive::Line(l) => {
                    let _ = writeln!(
                        out,
                        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                        num(l.from.0), num(l.from.1), num(l.to.0), num(l.to.1), hex(l.color), num(l.width)
                    );
                }
                Primitive::Text(t) => write_text(&mut out, t),
            }
        }
        out.push_str("</svg>\n");
        out
    }

    pub fn write_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_svg())?;
        Ok(())
    }
}

impl Surface for Scene {
    fn clear(&mut self, background: skia::Color) {
        self.items.clear();
        self.background = Some(background);
    }

    fn fill_rect(&mut self, rect: RectF, color: skia::Color, tooltip: Option<&str>) {
        self.items.push(Primitive::Rect(FilledRect { rect, fill: color, tooltip: tooltip.map(str::to_owned) }));
    }

    fn stroke_line(&mut self, from: PointF, to: PointF, color: skia::Color, width: f32) {
        self.items.push(Primitive::Line(LineSegment { from, to, color, width }));
    }

    fn draw_text(&mut self, run: TextRun) {
        self.items.push(Primitive::Text(run));
    }
}

// ---- svg helpers ------------------------------------------------------------

fn write_text(out: &mut String, t: &TextRun) {
    let anchor = match t.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let _ = write!(
        out,
        r#"  <text class="{}" x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}""#,
        t.role.class_name(), num(t.x), num(t.y), num(t.size), hex(t.color), anchor
    );
    match t.baseline {
        TextBaseline::Alphabetic => {}
        TextBaseline::Middle => out.push_str(r#" dominant-baseline="middle""#),
        TextBaseline::Hanging => out.push_str(r#" dominant-baseline="hanging""#),
    }
    if t.bold {
        out.push_str(r#" font-weight="bold""#);
    }
    if t.rotation != 0.0 {
        let _ = write!(out, r#" transform="rotate({}, {}, {})""#, num(t.rotation), num(t.x), num(t.y));
    }
    let _ = writeln!(out, ">{}</text>", escape(&t.text));
}

fn hex(c: skia::Color) -> String {
    if c.a() == 255 {
        format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
    } else {
        format!("rgba({},{},{},{:.3})", c.r(), c.g(), c.b(), c.a() as f32 / 255.0)
    }
}

/// Up to two decimals, trailing zeros dropped.
fn num(v: f32) -> String {
    let s = format!("{:.2}", v + 0.0);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
