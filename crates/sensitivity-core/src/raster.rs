// File: crates/sensitivity-core/src/raster.rs
// Summary: Headless Skia CPU raster surface; heat-map target with PNG and RGBA8 output.

use skia_safe as skia;

use crate::error::{HeatmapError, Result};
use crate::geometry::{PointF, RectF};
use crate::heatmap::RenderSpec;
use crate::surface::{Surface, TextRun};
use crate::text::TextShaper;

pub struct RasterSurface {
    surface: skia::Surface,
    width: u32,
    height: u32,
    shaper: Option<TextShaper>,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width as i32, height as i32))
            .ok_or(HeatmapError::Surface { width, height })?;
        Ok(Self { surface, width, height, shaper: Some(TextShaper::new()) })
    }

    /// Surface sized to `spec.width x spec.height`.
    pub fn for_spec(spec: &RenderSpec) -> Result<Self> {
        Self::new(spec.width, spec.height)
    }

    /// Skip text runs entirely; keeps pixel output independent of installed fonts.
    pub fn without_text(mut self) -> Self {
        self.shaper = None;
        self
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(HeatmapError::Encode("encode PNG"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.encode_png()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels as (buffer, width, height, stride).
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.width, self.height);
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(HeatmapError::Encode("read back RGBA pixels"));
        }
        Ok((px, w, h, stride))
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self, background: skia::Color) {
        self.surface.canvas().clear(background);
    }

    fn fill_rect(&mut self, rect: RectF, color: skia::Color, _tooltip: Option<&str>) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color);
        let r = skia::Rect::from_xywh(rect.left, rect.top, rect.width, rect.height);
        self.surface.canvas().draw_rect(r, &paint);
    }

    fn stroke_line(&mut self, from: PointF, to: PointF, color: skia::Color, width: f32) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width);
        paint.set_color(color);
        self.surface.canvas().draw_line(from, to, &paint);
    }

    fn draw_text(&mut self, run: TextRun) {
        if let Some(shaper) = &self.shaper {
            shaper.draw(self.surface.canvas(), &run);
        }
    }
}
