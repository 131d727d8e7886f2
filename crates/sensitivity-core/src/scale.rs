// File: crates/sensitivity-core/src/scale.rs
// Summary: Categorical band scale for cell placement and sequential color scale for cell fill.

use skia_safe as skia;

use crate::matrix::Matrix;

/// Fraction of each slot left empty between neighbouring bands.
pub const BAND_PADDING: f32 = 0.05;

/// Uniform categorical slots over `[start, end]`.
/// Slot i spans `start + i*step .. start + (i+1)*step`; its band is centered in it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandScale {
    start: f32,
    step: f32,
    bandwidth: f32,
    len: usize,
}

impl BandScale {
    pub fn new(len: usize, start: f32, end: f32, padding: f32) -> Self {
        let padding = padding.clamp(0.0, 1.0);
        let step = if len == 0 { 0.0 } else { (end - start).max(0.0) / len as f32 };
        Self { start, step, bandwidth: step * (1.0 - padding), len }
    }

    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }
    pub fn step(&self) -> f32 { self.step }
    pub fn bandwidth(&self) -> f32 { self.bandwidth }

    /// Leading edge of band `index`.
    pub fn position(&self, index: usize) -> Option<f32> {
        if index >= self.len {
            return None;
        }
        Some(self.start + self.step * index as f32 + (self.step - self.bandwidth) * 0.5)
    }

    /// Midpoint of band `index`, where ticks and cell labels go.
    pub fn center(&self, index: usize) -> Option<f32> {
        self.position(index).map(|p| p + self.bandwidth * 0.5)
    }
}

/// `[min, max]` over the non-NaN cells; each bound falls back to 0 for an empty matrix.
pub fn color_domain(matrix: &Matrix<f64>) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in matrix.values() {
        if v.is_nan() {
            continue;
        }
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo > hi { (0.0, 0.0) } else { (lo, hi) }
}

/// Sequential `value -> color` map between two anchor colors.
///
/// The domain is the data range, not centered on zero, so the same delta
/// reads differently depending on the matrix being drawn.
#[derive(Clone, Copy, Debug)]
pub struct ColorScale {
    lo: f64,
    hi: f64,
    from: skia::Color,
    to: skia::Color,
    unknown: skia::Color,
}

impl ColorScale {
    pub fn sequential(domain: (f64, f64), from: skia::Color, to: skia::Color, unknown: skia::Color) -> Self {
        Self { lo: domain.0, hi: domain.1, from, to, unknown }
    }

    pub fn domain(&self) -> (f64, f64) { (self.lo, self.hi) }

    /// Position of `v` in the domain, in [0, 1]. A zero-width domain maps to 0.5.
    pub fn unit(&self, v: f64) -> f64 {
        let span = self.hi - self.lo;
        if span == 0.0 || !span.is_finite() {
            return 0.5;
        }
        ((v - self.lo) / span).clamp(0.0, 1.0)
    }

    pub fn color(&self, v: f64) -> skia::Color {
        if v.is_nan() {
            return self.unknown;
        }
        interpolate_oklab(self.from, self.to, self.unit(v) as f32)
    }
}

// ---- OKLab interpolation ----------------------------------------------------

fn to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

fn to_srgb8(c: f32) -> u8 {
    let c = c.clamp(0.0, 1.0);
    let s = if c <= 0.003_130_8 { 12.92 * c } else { 1.055 * c.powf(1.0 / 2.4) - 0.055 };
    (s * 255.0).round().clamp(0.0, 255.0) as u8
}

fn to_oklab(c: skia::Color) -> [f32; 3] {
    let (r, g, b) = (to_linear(c.r()), to_linear(c.g()), to_linear(c.b()));
    let l = (0.412_221_46 * r + 0.536_332_55 * g + 0.051_445_995 * b).cbrt();
    let m = (0.211_903_5 * r + 0.680_699_5 * g + 0.107_396_96 * b).cbrt();
    let s = (0.088_302_46 * r + 0.281_718_85 * g + 0.629_978_7 * b).cbrt();
    [
        0.210_454_26 * l + 0.793_617_8 * m - 0.004_072_047 * s,
        1.977_998_5 * l - 2.428_592_2 * m + 0.450_593_7 * s,
        0.025_904_037 * l + 0.782_771_77 * m - 0.808_675_77 * s,
    ]
}

fn from_oklab([ll, a, b]: [f32; 3], alpha: u8) -> skia::Color {
    let l = (ll + 0.396_337_78 * a + 0.215_803_76 * b).powi(3);
    let m = (ll - 0.105_561_346 * a - 0.063_854_17 * b).powi(3);
    let s = (ll - 0.089_484_18 * a - 1.291_485_5 * b).powi(3);
    skia::Color::from_argb(
        alpha,
        to_srgb8(4.076_741_7 * l - 3.307_711_6 * m + 0.230_969_94 * s),
        to_srgb8(-1.268_438 * l + 2.609_757_4 * m - 0.341_319_38 * s),
        to_srgb8(-0.004_196_086_3 * l - 0.703_418_6 * m + 1.707_614_7 * s),
    )
}

/// Blend two colors in OKLab. `t` is clamped to [0, 1]; the endpoints return the anchors exactly.
pub fn interpolate_oklab(from: skia::Color, to: skia::Color, t: f32) -> skia::Color {
    let t = t.clamp(0.0, 1.0);
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    let (a, b) = (to_oklab(from), to_oklab(to));
    let mix = |i: usize| a[i] + (b[i] - a[i]) * t;
    let alpha = (from.a() as f32 + (to.a() as f32 - from.a() as f32) * t).round() as u8;
    from_oklab([mix(0), mix(1), mix(2)], alpha)
}
