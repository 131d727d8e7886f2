// File: crates/sensitivity-core/src/error.rs
// Summary: Error type shared by ingestion, raster output and table export.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeatmapError {
    /// A sample field was missing, non-numeric or not finite (strict ingestion only).
    #[error("sample {index}: field `{field}` is not a finite number")]
    Validation { index: usize, field: &'static str },

    #[error("sample table has no `{0}` column")]
    MissingColumn(&'static str),

    #[error("unsupported sample file `{0}` (expected .json or .csv)")]
    UnsupportedFormat(String),

    #[error("malformed sample payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: u32, height: u32 },

    #[error("failed to {0}")]
    Encode(&'static str),
}

pub type Result<T> = std::result::Result<T, HeatmapError>;
