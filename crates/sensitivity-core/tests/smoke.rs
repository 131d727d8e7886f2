// File: crates/sensitivity-core/tests/smoke.rs
// Purpose: End-to-end raster render smoke test writing a PNG and reading back RGBA pixels.

use sensitivity_core::{normalize, HeatmapRenderer, RasterSurface, RenderSpec, SamplePoint, Theme};

fn spec() -> RenderSpec {
    let grid = normalize(&[SamplePoint::new(3.0, 0.08, 0.22), SamplePoint::new(5.0, 0.10, 0.18)]);
    RenderSpec::from_grid(&grid).with_title("Equity IRR")
}

#[test]
fn render_smoke_png() {
    let spec = spec();
    let mut surface = RasterSurface::for_spec(&spec).expect("raster surface");
    HeatmapRenderer::default().render(&spec, &mut surface);

    let out = std::path::PathBuf::from("target/test_out/heatmap_smoke.png");
    surface.write_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = surface.encode_png().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let spec = spec();
    let theme = Theme::light();
    let mut surface = RasterSurface::for_spec(&spec).expect("raster surface").without_text();
    HeatmapRenderer::default().render(&spec, &mut surface);

    let (px, w, h, stride) = surface.to_rgba8().expect("rgba render");
    assert_eq!((w, h), (600, 400));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    let at = |x: usize, y: usize| &px[y * stride + x * 4..y * stride + x * 4 + 4];
    // margin shows the background
    let bg = theme.background;
    assert_eq!(at(2, 2), &[bg.r(), bg.g(), bg.b(), 255]);
    // bottom-left cell holds the maximum (22%) -> warm anchor
    let hi = theme.heat_high;
    assert_eq!(at(100, 220), &[hi.r(), hi.g(), hi.b(), 255]);
}

#[test]
fn zero_sized_surface_is_an_error() {
    assert!(RasterSurface::new(0, 0).is_err());
}
