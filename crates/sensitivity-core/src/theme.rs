// File: crates/sensitivity-core/src/theme.rs
// Summary: Light/Dark theming for heat-map rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub tick_label: skia::Color,
    pub title: skia::Color,
    pub caption: skia::Color,
    /// Low end of the sequential ramp (cool).
    pub heat_low: skia::Color,
    /// High end of the sequential ramp (warm).
    pub heat_high: skia::Color,
    /// Fill for cells whose value is NaN.
    pub heat_unknown: skia::Color,
    /// Cell label color when the value is > 0.
    pub cell_text_positive: skia::Color,
    /// Cell label color otherwise (zero, negative, NaN).
    pub cell_text_other: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            tick_label: skia::Color::from_argb(255, 20, 20, 30),
            title: skia::Color::from_argb(255, 20, 20, 30),
            caption: skia::Color::from_argb(255, 60, 60, 70),
            heat_low: skia::Color::from_argb(255, 49, 130, 189),
            heat_high: skia::Color::from_argb(255, 244, 109, 67),
            heat_unknown: skia::Color::from_argb(255, 200, 200, 205),
            cell_text_positive: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
            cell_text_other: skia::Color::from_argb(255, 255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            tick_label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 235, 235, 245),
            caption: skia::Color::from_argb(255, 180, 180, 190),
            heat_low: skia::Color::from_argb(255, 64, 160, 255),
            heat_high: skia::Color::from_argb(255, 255, 140, 60),
            heat_unknown: skia::Color::from_argb(255, 70, 70, 78),
            cell_text_positive: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
            cell_text_other: skia::Color::from_argb(255, 250, 250, 252),
        }
    }

    /// Label color for a cell value. Sign-based: the background is not consulted.
    pub fn cell_text(&self, value: f64) -> skia::Color {
        if value > 0.0 { self.cell_text_positive } else { self.cell_text_other }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name)).unwrap_or_else(Theme::light)
}
