// File: crates/sensitivity-core/tests/normalize.rs
// Purpose: Grid normalizer scenarios: key ordering, rounding merges, default-zero cells, sparse form.

use sensitivity_core::normalize::{format_leverage, format_rate, round_percent};
use sensitivity_core::{normalize, normalize_sparse, Matrix, SamplePoint};

fn approx(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

fn assert_rows(m: &Matrix<f64>, want: &[&[f64]]) {
    assert_eq!(m.rows(), want.len(), "row count");
    for (r, row) in want.iter().enumerate() {
        assert_eq!(m.row(r).unwrap().len(), row.len(), "row {r} length");
        for (c, &v) in row.iter().enumerate() {
            assert!(approx(m[(r, c)], v), "cell ({r}, {c}) = {} want {v}", m[(r, c)]);
        }
    }
}

#[test]
fn two_samples_fill_opposite_corners() {
    let samples = [SamplePoint::new(3.0, 0.08, 0.22), SamplePoint::new(5.0, 0.10, 0.18)];
    let grid = normalize(&samples);

    assert_eq!(grid.x_keys, vec![3.0, 5.0]);
    assert_eq!(grid.y_keys, vec![10.0, 8.0]);
    assert_rows(&grid.matrix, &[&[0.0, 18.0], &[22.0, 0.0]]);

    assert_eq!(grid.x_labels(), vec!["3x", "5x"]);
    assert_eq!(grid.y_labels(), vec!["10.0%", "8.0%"]);
}

#[test]
fn empty_input_yields_empty_grid() {
    let grid = normalize(&[]);
    assert!(grid.x_keys.is_empty());
    assert!(grid.y_keys.is_empty());
    assert!(grid.matrix.is_empty());
    assert_eq!(grid.matrix.rows(), 0);
    assert_eq!(grid.matrix.cols(), 0);
    assert!(grid.matrix.to_nested().is_empty());
}

#[test]
fn near_duplicate_rates_collapse_and_last_write_wins() {
    let samples = [
        SamplePoint::new(4.0, 0.0800001, 0.15),
        SamplePoint::new(4.0, 0.0799999, 0.19),
    ];
    let grid = normalize(&samples);
    assert_eq!(grid.y_keys, vec![8.0]);
    assert_eq!(grid.x_keys, vec![4.0]);
    assert!(approx(grid.matrix[(0, 0)], 19.0));
}

#[test]
fn keys_sorted_regardless_of_input_order() {
    let samples = [
        SamplePoint::new(6.0, 0.09, 0.10),
        SamplePoint::new(1.5, 0.11, 0.12),
        SamplePoint::new(0.0, 0.07, 0.08),
        SamplePoint::new(6.0, 0.07, 0.30),
    ];
    let grid = normalize(&samples);
    assert_eq!(grid.x_keys, vec![0.0, 1.5, 6.0]);
    assert_eq!(grid.y_keys, vec![11.0, 9.0, 7.0]);
    assert_eq!(grid.x_labels(), vec!["0x", "1.5x", "6x"]);
    assert_rows(
        &grid.matrix,
        &[
            &[0.0, 12.0, 0.0],
            &[0.0, 0.0, 10.0],
            &[8.0, 0.0, 30.0],
        ],
    );
}

#[test]
fn negative_returns_are_kept() {
    let grid = normalize(&[SamplePoint::new(8.0, 0.12, -0.05)]);
    assert!(approx(grid.matrix[(0, 0)], -5.0));
}

#[test]
fn signed_zero_leverage_is_one_column() {
    let grid = normalize(&[SamplePoint::new(-0.0, 0.08, 0.1), SamplePoint::new(0.0, 0.09, 0.2)]);
    assert_eq!(grid.x_keys.len(), 1);
    assert_eq!(grid.x_labels(), vec!["0x"]);
}

#[test]
fn nan_fields_flow_through_as_nan_cells() {
    let grid = normalize(&[
        SamplePoint::new(2.0, 0.08, f64::NAN),
        SamplePoint::new(3.0, 0.08, 0.1),
    ]);
    assert_eq!(grid.matrix.cols(), 2);
    assert!(grid.matrix[(0, 0)].is_nan());
    assert!(approx(grid.matrix[(0, 1)], 10.0));
}

#[test]
fn normalize_is_idempotent() {
    let samples = [
        SamplePoint::new(2.0, 0.081, 0.2),
        SamplePoint::new(4.0, 0.095, 0.25),
        SamplePoint::new(2.0, 0.095, 0.21),
    ];
    assert_eq!(normalize(&samples), normalize(&samples));
}

#[test]
fn value_at_uses_rounded_rate_lookup() {
    let grid = normalize(&[SamplePoint::new(3.0, 0.08, 0.22)]);
    assert_eq!(grid.value_at(3.0, 0.0800004).map(|v| (v * 10.0).round() / 10.0), Some(22.0));
    assert_eq!(grid.value_at(3.0, 0.09), None);
    assert_eq!(grid.value_at(4.0, 0.08), None);
}

#[test]
fn sparse_grid_marks_missing_cells() {
    let samples = [SamplePoint::new(3.0, 0.08, 0.22), SamplePoint::new(5.0, 0.10, 0.0)];
    let sparse = normalize_sparse(&samples);
    assert_eq!(sparse.missing_cells(), 2);
    assert_eq!(sparse.matrix[(0, 0)], None);
    // a computed zero stays distinguishable from a gap
    assert_eq!(sparse.matrix[(0, 1)], Some(0.0));

    let dense = sparse.fill_missing(0.0);
    assert_eq!(dense, normalize(&samples));
}

#[test]
fn formatting_helpers() {
    assert_eq!(round_percent(0.0849), 8.5);
    assert_eq!(round_percent(0.1), 10.0);
    assert_eq!(format_leverage(2.5), "2.5x");
    assert_eq!(format_leverage(7.0), "7x");
    assert_eq!(format_rate(8.0), "8.0%");
    assert_eq!(format_rate(-0.0), "0.0%");
}
