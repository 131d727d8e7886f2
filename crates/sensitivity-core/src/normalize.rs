// File: crates/sensitivity-core/src/normalize.rs
// Summary: Grid normalizer; turns sparse samples into sorted axis keys and a dense (y, x) matrix.
// Notes:
// - x keys: distinct leverage values, ascending, exact numeric identity.
// - y keys: distinct cost of capital in percent rounded to 1 decimal, descending (top row = highest rate).
// - Cells hold the return in percent. Colliding samples are last-write-wins.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::matrix::Matrix;
use crate::sample::SamplePoint;

/// Round a fraction to a percentage with one decimal (0.0800001 -> 8.0).
#[inline]
pub fn round_percent(fraction: f64) -> f64 {
    (fraction * 100.0 * 10.0).round() / 10.0
}

/// Leverage label, e.g. `3x` or `2.5x`.
pub fn format_leverage(value: f64) -> String {
    format!("{}x", value + 0.0)
}

/// Rate label from an already-rounded percentage, e.g. `8.0%`.
pub fn format_rate(percent: f64) -> String {
    format!("{:.1}%", percent + 0.0)
}

// Collapses -0.0 into 0.0 and every NaN payload into one NaN so that
// `total_cmp` equality matches key identity.
#[inline]
fn canonical(v: f64) -> f64 {
    if v.is_nan() {
        f64::NAN
    } else if v == 0.0 {
        0.0
    } else {
        v
    }
}

fn ascending(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut keys = values.map(canonical).collect::<Vec<_>>();
    keys.sort_by(f64::total_cmp);
    keys.dedup_by(|a, b| a.total_cmp(b) == Ordering::Equal);
    keys
}

fn axis_keys(samples: &[SamplePoint]) -> (Vec<f64>, Vec<f64>) {
    let x_keys = ascending(samples.iter().map(|s| s.leverage));
    let mut y_keys = ascending(samples.iter().map(|s| round_percent(s.cost_of_capital)));
    y_keys.reverse();
    (x_keys, y_keys)
}

fn x_index(x_keys: &[f64], leverage: f64) -> Option<usize> {
    let v = canonical(leverage);
    x_keys.binary_search_by(|k| k.total_cmp(&v)).ok()
}

fn y_index(y_keys: &[f64], cost_of_capital: f64) -> Option<usize> {
    let v = canonical(round_percent(cost_of_capital));
    // keys are descending
    y_keys.binary_search_by(|k| v.total_cmp(k)).ok()
}

/// Shared placement pass. `empty` fills cells without a sample.
fn build<T: Clone>(
    samples: &[SamplePoint],
    empty: T,
    cell: impl Fn(f64) -> T,
) -> (Vec<f64>, Vec<f64>, Matrix<T>) {
    let (x_keys, y_keys) = axis_keys(samples);
    let mut matrix = Matrix::filled(y_keys.len(), x_keys.len(), empty);
    let mut written = Matrix::filled(y_keys.len(), x_keys.len(), false);
    let mut collisions = 0usize;
    let mut dropped = 0usize;

    for s in samples {
        match (y_index(&y_keys, s.cost_of_capital), x_index(&x_keys, s.leverage)) {
            (Some(yi), Some(xi)) => {
                if written[(yi, xi)] {
                    collisions += 1;
                }
                written.set(yi, xi, true);
                matrix.set(yi, xi, cell(s.return_metric * 100.0));
            }
            _ => {
                dropped += 1;
                trace!(?s, "sample key not found on either axis; dropped");
            }
        }
    }

    debug!(
        samples = samples.len(),
        columns = x_keys.len(),
        rows = y_keys.len(),
        collisions,
        dropped,
        "normalized sensitivity grid"
    );
    (x_keys, y_keys, matrix)
}

/// Dense grid: every (rate, leverage) combination has a value, 0 when unsampled.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SensitivityGrid {
    /// Leverage multiples, ascending.
    pub x_keys: Vec<f64>,
    /// Cost of capital in percent (1 decimal), descending.
    pub y_keys: Vec<f64>,
    /// `y_keys.len()` rows by `x_keys.len()` columns, returns in percent.
    pub matrix: Matrix<f64>,
}

impl SensitivityGrid {
    pub fn is_empty(&self) -> bool { self.matrix.is_empty() }

    pub fn x_labels(&self) -> Vec<String> {
        self.x_keys.iter().copied().map(format_leverage).collect()
    }

    pub fn y_labels(&self) -> Vec<String> {
        self.y_keys.iter().copied().map(format_rate).collect()
    }

    /// Cell for a raw (leverage, fractional cost of capital) pair, using the normalizer's key rules.
    pub fn value_at(&self, leverage: f64, cost_of_capital: f64) -> Option<f64> {
        let yi = y_index(&self.y_keys, cost_of_capital)?;
        let xi = x_index(&self.x_keys, leverage)?;
        self.matrix.get(yi, xi).copied()
    }
}

/// Same shape as [`SensitivityGrid`], but cells without a sample are `None`
/// instead of an indistinguishable zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SparseGrid {
    pub x_keys: Vec<f64>,
    pub y_keys: Vec<f64>,
    pub matrix: Matrix<Option<f64>>,
}

impl SparseGrid {
    pub fn missing_cells(&self) -> usize {
        self.matrix.values().filter(|v| v.is_none()).count()
    }

    /// Densify, writing `fill` into every unsampled cell.
    pub fn fill_missing(&self, fill: f64) -> SensitivityGrid {
        SensitivityGrid {
            x_keys: self.x_keys.clone(),
            y_keys: self.y_keys.clone(),
            matrix: self.matrix.map(|v| v.unwrap_or(fill)),
        }
    }
}

/// Normalize samples into a dense grid with zero-filled gaps.
pub fn normalize(samples: &[SamplePoint]) -> SensitivityGrid {
    let (x_keys, y_keys, matrix) = build(samples, 0.0, |v| v);
    SensitivityGrid { x_keys, y_keys, matrix }
}

/// Normalize samples, leaving unsampled cells as `None`.
pub fn normalize_sparse(samples: &[SamplePoint]) -> SparseGrid {
    let (x_keys, y_keys, matrix) = build(samples, None, Some);
    SparseGrid { x_keys, y_keys, matrix }
}
