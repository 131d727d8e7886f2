// File: crates/sensitivity-core/src/sample.rs
// Summary: One observation from the capital-structure sweep: leverage, cost of capital, return.

use crate::error::{HeatmapError, Result};

/// Sample tuple as consumed by the normalizer. Rates are fractions (0.08 = 8%).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    /// Debt / EBITDA multiple (x axis).
    pub leverage: f64,
    /// WACC as a fraction (y axis before rounding).
    pub cost_of_capital: f64,
    /// Equity IRR as a fraction; may be negative.
    pub return_metric: f64,
}

impl SamplePoint {
    pub const fn new(leverage: f64, cost_of_capital: f64, return_metric: f64) -> Self {
        Self { leverage, cost_of_capital, return_metric }
    }

    /// Construct a sample, rejecting non-finite fields.
    /// `index` is the position reported in the error.
    pub fn try_new(index: usize, leverage: f64, cost_of_capital: f64, return_metric: f64) -> Result<Self> {
        let s = Self::new(leverage, cost_of_capital, return_metric);
        match s.first_invalid_field() {
            Some(field) => Err(HeatmapError::Validation { index, field }),
            None => Ok(s),
        }
    }

    /// Name of the first non-finite field, using the service's wire names.
    pub fn first_invalid_field(&self) -> Option<&'static str> {
        if !self.leverage.is_finite() {
            Some("debt_to_ebitda")
        } else if !self.cost_of_capital.is_finite() {
            Some("wacc")
        } else if !self.return_metric.is_finite() {
            Some("equity_irr")
        } else {
            None
        }
    }
}
