// File: crates/sensitivity-demo/src/main.rs
// Summary: Demo loads a capital-structure sweep (JSON/CSV), normalizes it and renders the sensitivity heat-map.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sensitivity_core::{
    load_samples, normalize, normalize_sparse, theme, write_grid_csv, HeatmapRenderer, RasterSurface, RenderSpec,
    Scene, Validation,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Png,
    Svg,
    Both,
}

/// Render an equity-IRR sensitivity heat-map from a capital-structure sweep
#[derive(Parser, Debug)]
#[command(name = "sensitivity-demo")]
#[command(about = "Render a leverage x WACC sensitivity heat-map to PNG/SVG")]
struct Args {
    /// Sample file (.json grid or model response, or .csv)
    #[arg(default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/capital_structure_grid.json"))]
    input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "target/out", env = "HEATMAP_OUT_DIR")]
    out_dir: PathBuf,

    /// Chart title
    #[arg(short, long)]
    title: Option<String>,

    #[arg(long, default_value_t = 600)]
    width: u32,

    #[arg(long, default_value_t = 400)]
    height: u32,

    /// Theme preset (light, dark)
    #[arg(long, default_value = "light", env = "HEATMAP_THEME")]
    theme: String,

    #[arg(long, value_enum, default_value_t = Format::Both)]
    format: Format,

    /// Let non-numeric fields through as NaN instead of rejecting the file
    #[arg(long)]
    lenient: bool,

    /// Also write the normalized grid as a CSV table
    #[arg(long)]
    table: bool,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt().with_env_filter(filter).with_target(false).init();

    let mode = if args.lenient { Validation::Lenient } else { Validation::Strict };
    let samples = load_samples(&args.input, mode)
        .with_context(|| format!("failed to load samples from '{}'", args.input.display()))?;
    info!(samples = samples.len(), input = %args.input.display(), "loaded samples");

    let grid = normalize(&samples);
    let gaps = normalize_sparse(&samples).missing_cells();
    if gaps > 0 {
        warn!(gaps, total = grid.matrix.len(), "grid cells without a sample are drawn as 0.0%");
    }

    let mut spec = RenderSpec::from_grid(&grid).with_size(args.width, args.height);
    if let Some(title) = &args.title {
        spec = spec.with_title(title.as_str());
    }
    let renderer = HeatmapRenderer::with_theme(theme::find(&args.theme));

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    let stem = out_stem(&args.input);

    if matches!(args.format, Format::Png | Format::Both) {
        let out = args.out_dir.join(format!("{stem}.png"));
        let mut surface = RasterSurface::for_spec(&spec)?;
        renderer.render(&spec, &mut surface);
        surface.write_png(&out).with_context(|| format!("writing {}", out.display()))?;
        info!(path = %out.display(), "wrote PNG");
    }

    if matches!(args.format, Format::Svg | Format::Both) {
        let out = args.out_dir.join(format!("{stem}.svg"));
        let mut scene = Scene::new(spec.width, spec.height);
        renderer.render(&spec, &mut scene);
        scene.write_svg(&out).with_context(|| format!("writing {}", out.display()))?;
        info!(path = %out.display(), "wrote SVG");
    }

    if args.table {
        let out = args.out_dir.join(format!("{stem}.csv"));
        let file = std::fs::File::create(&out).with_context(|| format!("creating {}", out.display()))?;
        write_grid_csv(&grid, file)?;
        info!(path = %out.display(), "wrote grid table");
    }

    Ok(())
}

/// Output stem like heatmap_<input stem>.
fn out_stem(input: &Path) -> String {
    match input.file_stem().and_then(|s| s.to_str()) {
        Some(stem) if !stem.is_empty() => format!("heatmap_{stem}"),
        _ => "heatmap".to_string(),
    }
}
