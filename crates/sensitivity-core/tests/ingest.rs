// File: crates/sensitivity-core/tests/ingest.rs
// Purpose: Service payload parsing (JSON/CSV), unit conventions and strict/lenient validation.

use sensitivity_core::{load_samples, normalize, samples_from_csv, samples_from_json, HeatmapError, SamplePoint, Validation};

const GRID_ROWS: &str = r#"[
  {"debt_to_ebitda": 0.0, "debt_to_capital": 0.0, "wacc": 0.09, "credit_rating": "AAA",
   "equity_irr": 0.09, "enterprise_value": 8.0e9, "share_price": 80.0},
  {"debt_to_ebitda": 2.0, "debt_to_capital": 0.25, "wacc": 0.0823, "credit_rating": "A",
   "equity_irr": 0.59, "enterprise_value": 8.0e9, "share_price": 60.0}
]"#;

#[test]
fn parses_service_rows_and_ignores_extra_fields() {
    let samples = samples_from_json(GRID_ROWS, Validation::Strict).expect("parse rows");
    assert_eq!(
        samples,
        vec![SamplePoint::new(0.0, 0.09, 0.09), SamplePoint::new(2.0, 0.0823, 0.59)]
    );
}

#[test]
fn parses_model_detail_wrapper() {
    let json = format!(r#"{{"id": "m-1", "ticker": "ACME", "capital_structure_grid": {GRID_ROWS}}}"#);
    let samples = samples_from_json(&json, Validation::Strict).expect("parse wrapper");
    assert_eq!(samples.len(), 2);
    let grid = normalize(&samples);
    assert_eq!(grid.y_labels(), vec!["9.0%", "8.2%"]);
}

#[test]
fn accepts_numeric_strings() {
    let json = r#"[{"debt_to_ebitda": "3", "wacc": " 0.08 ", "equity_irr": "0.22"}]"#;
    let samples = samples_from_json(json, Validation::Strict).expect("numeric strings");
    assert_eq!(samples, vec![SamplePoint::new(3.0, 0.08, 0.22)]);
}

#[test]
fn strict_rejects_whole_set_on_non_numeric_field() {
    let json = r#"[
      {"debt_to_ebitda": 1, "wacc": 0.08, "equity_irr": 0.1},
      {"debt_to_ebitda": 2, "wacc": "n/a", "equity_irr": 0.1}
    ]"#;
    let err = samples_from_json(json, Validation::Strict).unwrap_err();
    assert!(
        matches!(err, HeatmapError::Validation { index: 1, field: "wacc" }),
        "unexpected error: {err}"
    );
}

#[test]
fn strict_rejects_missing_field() {
    let json = r#"[{"debt_to_ebitda": 1, "wacc": 0.08}]"#;
    let err = samples_from_json(json, Validation::Strict).unwrap_err();
    assert!(matches!(err, HeatmapError::Validation { index: 0, field: "equity_irr" }));
}

#[test]
fn lenient_turns_bad_fields_into_nan() {
    let json = r#"[{"debt_to_ebitda": 1, "wacc": 0.08, "equity_irr": "oops"}]"#;
    let samples = samples_from_json(json, Validation::Lenient).expect("lenient parse");
    assert_eq!(samples.len(), 1);
    assert!(samples[0].return_metric.is_nan());
    assert_eq!(samples[0].first_invalid_field(), Some("equity_irr"));
}

#[test]
fn malformed_json_is_a_json_error() {
    let err = samples_from_json("{\"rows\": 3}", Validation::Strict).unwrap_err();
    assert!(matches!(err, HeatmapError::Json(_)));
}

#[test]
fn csv_with_aliases_and_mixed_case_headers() {
    let data = "Leverage, WACC ,IRR\n3,0.08,0.22\n5,0.10,0.18\n";
    let samples = samples_from_csv(data.as_bytes(), Validation::Strict).expect("csv parse");
    assert_eq!(
        samples,
        vec![SamplePoint::new(3.0, 0.08, 0.22), SamplePoint::new(5.0, 0.10, 0.18)]
    );
}

#[test]
fn csv_missing_column_is_reported() {
    let data = "debt_to_ebitda,wacc\n3,0.08\n";
    let err = samples_from_csv(data.as_bytes(), Validation::Strict).unwrap_err();
    assert!(matches!(err, HeatmapError::MissingColumn("equity_irr")));
}

#[test]
fn csv_blank_cell_strict_vs_lenient() {
    let data = "debt_to_ebitda,wacc,equity_irr\n3,,0.22\n";
    assert!(matches!(
        samples_from_csv(data.as_bytes(), Validation::Strict),
        Err(HeatmapError::Validation { index: 0, field: "wacc" })
    ));
    let lenient = samples_from_csv(data.as_bytes(), Validation::Lenient).expect("lenient csv");
    assert!(lenient[0].cost_of_capital.is_nan());
}

#[test]
fn load_samples_dispatches_on_extension() {
    let dir = std::path::PathBuf::from("target/test_out/ingest");
    std::fs::create_dir_all(&dir).unwrap();

    let json_path = dir.join("grid.json");
    std::fs::write(&json_path, GRID_ROWS).unwrap();
    assert_eq!(load_samples(&json_path, Validation::Strict).unwrap().len(), 2);

    let csv_path = dir.join("grid.CSV");
    std::fs::write(&csv_path, "debt_to_ebitda,wacc,equity_irr\n1,0.08,0.1\n").unwrap();
    assert_eq!(load_samples(&csv_path, Validation::Strict).unwrap().len(), 1);

    let txt_path = dir.join("grid.txt");
    std::fs::write(&txt_path, "").unwrap();
    assert!(matches!(
        load_samples(&txt_path, Validation::Strict),
        Err(HeatmapError::UnsupportedFormat(_))
    ));
}

#[test]
fn try_new_names_first_bad_field() {
    assert!(SamplePoint::try_new(0, 1.0, 0.08, 0.1).is_ok());
    let err = SamplePoint::try_new(4, f64::INFINITY, f64::NAN, 0.1).unwrap_err();
    assert!(matches!(err, HeatmapError::Validation { index: 4, field: "debt_to_ebitda" }));
}

#[test]
fn infinite_numeric_string_follows_validation_mode() {
    let json = r#"[{"debt_to_ebitda": "inf", "wacc": 0.08, "equity_irr": 0.1}]"#;
    let err = samples_from_json(json, Validation::Strict).unwrap_err();
    assert!(matches!(err, HeatmapError::Validation { index: 0, field: "debt_to_ebitda" }));

    let samples = samples_from_json(json, Validation::Lenient).expect("lenient parse");
    assert!(samples[0].leverage.is_infinite());
    assert_eq!(samples[0].first_invalid_field(), Some("debt_to_ebitda"));
}
