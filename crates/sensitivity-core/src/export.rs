// File: crates/sensitivity-core/src/export.rs
// Summary: Tabular export of a normalized grid (rate rows x leverage columns) as CSV.

use std::io::Write;

use crate::error::Result;
use crate::normalize::SensitivityGrid;

/// Header cell above the row labels.
pub const CORNER_LABEL: &str = "WACC \\ Debt/EBITDA";

/// Write `grid` as CSV: one header row of leverage labels, then one row per
/// rate label with returns in percent to one decimal.
pub fn write_grid_csv<W: Write>(grid: &SensitivityGrid, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(grid.x_keys.len() + 1);
    header.push(CORNER_LABEL.to_string());
    header.extend(grid.x_labels());
    wtr.write_record(&header)?;

    for (label, row) in grid.y_labels().into_iter().zip(grid.matrix.iter_rows()) {
        let mut rec = Vec::with_capacity(row.len() + 1);
        rec.push(label);
        rec.extend(row.iter().map(|v| format!("{:.1}", v + 0.0)));
        wtr.write_record(&rec)?;
    }
    wtr.flush()?;
    Ok(())
}
