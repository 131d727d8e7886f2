// File: crates/sensitivity-core/src/heatmap.rs
// Summary: Heat-map renderer; full teardown-and-rebuild of a surface from an immutable RenderSpec.

use tracing::debug;

use crate::axis::{Axis, AxisSide};
use crate::geometry::RectF;
use crate::matrix::Matrix;
use crate::normalize::SensitivityGrid;
use crate::scale::{color_domain, BandScale, ColorScale, BAND_PADDING};
use crate::surface::{Surface, TextAnchor, TextBaseline, TextRole, TextRun};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Everything one render pass draws. Built per pass, discarded afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSpec {
    pub matrix: Matrix<f64>,
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
    pub title: Option<String>,
    pub width: u32,
    pub height: u32,
}

impl RenderSpec {
    pub fn new(matrix: Matrix<f64>, x_labels: Vec<String>, y_labels: Vec<String>) -> Self {
        Self { matrix, x_labels, y_labels, title: None, width: WIDTH, height: HEIGHT }
    }

    /// Labels formatted as `3x` / `8.0%` from the grid's keys.
    pub fn from_grid(grid: &SensitivityGrid) -> Self {
        Self::new(grid.matrix.clone(), grid.x_labels(), grid.y_labels())
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSizes {
    pub cell: f32,
    pub tick: f32,
    pub title: f32,
    pub caption: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self { cell: 11.0, tick: 11.0, title: 16.0, caption: 12.0 }
    }
}

/// Geometry and color mapping derived from a spec; useful to hit-test or inspect a render.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub plot: RectF,
    pub x: BandScale,
    pub y: BandScale,
    pub colors: ColorScale,
}

/// Cell value label, e.g. `18.0%`.
pub fn cell_label(value: f64) -> String {
    // +0.0 keeps -0.0 from printing as "-0.0"
    format!("{:.1}%", value + 0.0)
}

/// Hover text for a cell, e.g. `8.0%, 3x: 22.0%`.
pub fn cell_tooltip(y_label: &str, x_label: &str, value: f64) -> String {
    format!("{y_label}, {x_label}: {}", cell_label(value))
}

/// Stateless heat-map renderer. Holds style only; nothing survives between passes.
#[derive(Clone, Debug)]
pub struct HeatmapRenderer {
    pub theme: Theme,
    pub insets: Insets,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub band_padding: f32,
    pub fonts: FontSizes,
}

impl Default for HeatmapRenderer {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            insets: Insets::default(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            band_padding: BAND_PADDING,
            fonts: FontSizes::default(),
        }
    }
}

impl HeatmapRenderer {
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    pub fn layout(&self, spec: &RenderSpec) -> Layout {
        let plot = RectF::from_ltwh(
            self.insets.left as f32,
            self.insets.top as f32,
            spec.width as f32 - self.insets.hsum() as f32,
            spec.height as f32 - self.insets.vsum() as f32,
        );
        let x = BandScale::new(spec.x_labels.len(), plot.left, plot.right(), self.band_padding);
        let y = BandScale::new(spec.y_labels.len(), plot.top, plot.bottom(), self.band_padding);
        let colors = ColorScale::sequential(
            color_domain(&spec.matrix),
            self.theme.heat_low,
            self.theme.heat_high,
            self.theme.heat_unknown,
        );
        Layout { plot, x, y, colors }
    }

    /// Clear `target` and redraw the whole heat-map from `spec`.
    pub fn render<S: Surface + ?Sized>(&self, spec: &RenderSpec, target: &mut S) {
        target.clear(self.theme.background);
        let layout = self.layout(spec);
        let has_cells = !spec.matrix.is_empty();

        if has_cells {
            self.draw_cells(spec, &layout, target);
            self.draw_axis(&self.x_axis, &layout, &spec.x_labels, target);
            self.draw_axis(&self.y_axis, &layout, &spec.y_labels, target);
        }
        if let Some(title) = &spec.title {
            target.draw_text(
                TextRun::centered(
                    title.as_str(),
                    layout.plot.center_x(),
                    self.insets.top as f32 * 0.5,
                    self.fonts.title,
                    self.theme.title,
                    TextRole::Title,
                )
                .bold(),
            );
        }
        if has_cells {
            self.draw_captions(spec, &layout, target);
        }

        debug!(
            rows = spec.matrix.rows(),
            cols = spec.matrix.cols(),
            domain = ?layout.colors.domain(),
            width = spec.width,
            height = spec.height,
            "rendered heat-map"
        );
    }

    fn draw_cells<S: Surface + ?Sized>(&self, spec: &RenderSpec, layout: &Layout, target: &mut S) {
        let bw = layout.x.bandwidth();
        let bh = layout.y.bandwidth();
        // rects first, labels on top
        let mut labels = Vec::with_capacity(spec.matrix.len());
        for (row, col, &value) in spec.matrix.iter_cells() {
            let (Some(x), Some(y)) = (layout.x.position(col), layout.y.position(row)) else {
                continue;
            };
            let (Some(xl), Some(yl)) = (spec.x_labels.get(col), spec.y_labels.get(row)) else {
                continue;
            };
            let rect = RectF::from_ltwh(x, y, bw, bh);
            let tip = cell_tooltip(yl, xl, value);
            target.fill_rect(rect, layout.colors.color(value), Some(tip.as_str()));
            labels.push(TextRun::centered(
                cell_label(value),
                rect.center_x(),
                rect.center_y(),
                self.fonts.cell,
                self.theme.cell_text(value),
                TextRole::CellValue,
            ));
        }
        for run in labels {
            target.draw_text(run);
        }
    }

    fn draw_axis<S: Surface + ?Sized>(&self, axis: &Axis, layout: &Layout, labels: &[String], target: &mut S) {
        let plot = layout.plot;
        let color = self.theme.axis_line;
        let size = axis.tick_size;
        match axis.side {
            AxisSide::Bottom => {
                target.stroke_line((plot.left, plot.bottom()), (plot.right(), plot.bottom()), color, 1.0);
                for tick in axis.ticks(&layout.x, labels) {
                    let x = tick.position;
                    target.stroke_line((x, plot.bottom()), (x, plot.bottom() + size), color, 1.0);
                    let anchor = if axis.tick_rotation == 0.0 { TextAnchor::Middle } else { TextAnchor::End };
                    target.draw_text(
                        TextRun::centered(tick.label, x, plot.bottom() + size + 3.0, self.fonts.tick, self.theme.tick_label, TextRole::Tick)
                            .anchored(anchor, TextBaseline::Hanging)
                            .rotated(axis.tick_rotation),
                    );
                }
            }
            AxisSide::Left => {
                target.stroke_line((plot.left, plot.top), (plot.left, plot.bottom()), color, 1.0);
                for tick in axis.ticks(&layout.y, labels) {
                    let y = tick.position;
                    target.stroke_line((plot.left - size, y), (plot.left, y), color, 1.0);
                    target.draw_text(
                        TextRun::centered(tick.label, plot.left - size - 3.0, y, self.fonts.tick, self.theme.tick_label, TextRole::Tick)
                            .anchored(TextAnchor::End, TextBaseline::Middle)
                            .rotated(axis.tick_rotation),
                    );
                }
            }
        }
    }

    fn draw_captions<S: Surface + ?Sized>(&self, spec: &RenderSpec, layout: &Layout, target: &mut S) {
        let plot = layout.plot;
        for axis in [&self.x_axis, &self.y_axis] {
            let run = match axis.side {
                AxisSide::Bottom => TextRun::centered(
                    axis.caption.as_str(),
                    plot.center_x(),
                    spec.height as f32 - 8.0,
                    self.fonts.caption,
                    self.theme.caption,
                    TextRole::Caption,
                )
                .anchored(TextAnchor::Middle, TextBaseline::Alphabetic),
                AxisSide::Left => TextRun::centered(
                    axis.caption.as_str(),
                    self.fonts.caption,
                    plot.center_y(),
                    self.fonts.caption,
                    self.theme.caption,
                    TextRole::Caption,
                )
                .rotated(-90.0),
            };
            target.draw_text(run);
        }
    }
}

/// Render with the default light style.
pub fn render<S: Surface + ?Sized>(spec: &RenderSpec, target: &mut S) {
    HeatmapRenderer::default().render(spec, target);
}
