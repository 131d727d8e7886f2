// File: crates/sensitivity-core/src/ingest.rs
// Summary: Boundary parsing of the modeling service's capital-structure rows (JSON or CSV) into samples.
// Notes:
// - The service names the fields `debt_to_ebitda`, `wacc` and `equity_irr`; rates are fractions.
// - Values may arrive as JSON numbers or numeric strings.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{HeatmapError, Result};
use crate::sample::SamplePoint;

/// What to do with a field that is missing, non-numeric or not finite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Validation {
    /// Reject the whole sample set with [`HeatmapError::Validation`].
    #[default]
    Strict,
    /// Let the field through as NaN; it renders as `NaN%`.
    Lenient,
}

const LEVERAGE_COLUMNS: &[&str] = &["debt_to_ebitda", "leverage", "debt/ebitda"];
const RATE_COLUMNS: &[&str] = &["wacc", "cost_of_capital"];
const RETURN_COLUMNS: &[&str] = &["equity_irr", "irr", "return"];

#[derive(Debug, Deserialize)]
struct WireRow {
    #[serde(default)]
    debt_to_ebitda: Value,
    #[serde(default)]
    wacc: Value,
    #[serde(default)]
    equity_irr: Value,
}

/// Either the bare grid or the model-detail response that embeds it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    Rows(Vec<WireRow>),
    Model { capital_structure_grid: Vec<WireRow> },
}

fn number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn sample(index: usize, lev: Option<f64>, rate: Option<f64>, ret: Option<f64>, mode: Validation) -> Result<SamplePoint> {
    // missing or non-numeric fields become NaN; strict mode then rejects them as non-finite
    let (lev, rate, ret) = (lev.unwrap_or(f64::NAN), rate.unwrap_or(f64::NAN), ret.unwrap_or(f64::NAN));
    match mode {
        Validation::Strict => SamplePoint::try_new(index, lev, rate, ret).map_err(|err| {
            warn!(index, %err, "rejecting sample set");
            err
        }),
        Validation::Lenient => Ok(SamplePoint::new(lev, rate, ret)),
    }
}

/// Parse a JSON array of grid rows, or an object carrying `capital_structure_grid`.
pub fn samples_from_json(json: &str, mode: Validation) -> Result<Vec<SamplePoint>> {
    let rows = match serde_json::from_str::<Payload>(json)? {
        Payload::Rows(rows) => rows,
        Payload::Model { capital_structure_grid } => capital_structure_grid,
    };
    let out = rows
        .iter()
        .enumerate()
        .map(|(i, r)| sample(i, number(&r.debt_to_ebitda), number(&r.wacc), number(&r.equity_irr), mode))
        .collect::<Result<Vec<_>>>()?;
    debug!(samples = out.len(), ?mode, "parsed JSON samples");
    Ok(out)
}

/// Parse a CSV table with a header row. Header matching is case-insensitive.
pub fn samples_from_csv<R: Read>(reader: R, mode: Validation) -> Result<Vec<SamplePoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));

    let i_lev = idx(LEVERAGE_COLUMNS).ok_or(HeatmapError::MissingColumn("debt_to_ebitda"))?;
    let i_rate = idx(RATE_COLUMNS).ok_or(HeatmapError::MissingColumn("wacc"))?;
    let i_ret = idx(RETURN_COLUMNS).ok_or(HeatmapError::MissingColumn("equity_irr"))?;

    let mut out = Vec::new();
    for (index, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        out.push(sample(index, parse(i_lev), parse(i_rate), parse(i_ret), mode)?);
    }
    debug!(samples = out.len(), ?mode, "parsed CSV samples");
    Ok(out)
}

/// Load samples from a `.json` or `.csv` file.
pub fn load_samples(path: impl AsRef<Path>, mode: Validation) -> Result<Vec<SamplePoint>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "json" => samples_from_json(&std::fs::read_to_string(path)?, mode),
        "csv" => samples_from_csv(std::fs::File::open(path)?, mode),
        _ => Err(HeatmapError::UnsupportedFormat(path.display().to_string())),
    }
}
