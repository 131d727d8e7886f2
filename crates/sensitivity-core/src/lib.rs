// File: crates/sensitivity-core/src/lib.rs
// Summary: Core library entry point; exports sample ingestion, grid normalization and heat-map rendering.

pub mod error;
pub mod types;
pub mod geometry;
pub mod sample;
pub mod ingest;
pub mod matrix;
pub mod normalize;
pub mod scale;
pub mod axis;
pub mod theme;
pub mod surface;
pub mod scene;
pub mod heatmap;
pub mod text;
pub mod raster;
pub mod export;

pub use error::{HeatmapError, Result};
pub use sample::SamplePoint;
pub use ingest::{load_samples, samples_from_csv, samples_from_json, Validation};
pub use matrix::Matrix;
pub use normalize::{normalize, normalize_sparse, SensitivityGrid, SparseGrid};
pub use scale::{BandScale, ColorScale};
pub use axis::Axis;
pub use theme::Theme;
pub use surface::{Surface, TextAnchor, TextBaseline, TextRole, TextRun};
pub use scene::Scene;
pub use heatmap::{render, FontSizes, HeatmapRenderer, RenderSpec};
pub use text::TextShaper;
pub use raster::RasterSurface;
pub use export::write_grid_csv;
