// tests/scan_parser_test.rs

use std::fs;
use std::path::Path;
use tempfile::tempdir;

use gapscan_csv_render::constants::ROLLING_WINDOW;
use gapscan_csv_render::data_input::scan_parser::parse_scan_file;
use gapscan_csv_render::error::DataLoadError;

fn write_csv(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn parses_scan_with_optional_columns() {
    let dir = tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "scan.csv",
        "angle,filtered_distance,confidence,is_gap,baseline_distance,threshold\n\
         0.0,50.0,0.9,False,60.0,45.0\n\
         1.0,20.0,0.8,True,60.0,45.0\n",
    );

    let table = parse_scan_file(&path).unwrap();
    assert_eq!(table.len(), 2);
    assert!(!table.records[0].is_gap);
    assert!(table.records[1].is_gap);
    assert_eq!(table.overlay_band(), Some((60.0, 45.0)));
    assert_eq!(table.detection_rate.len(), 2);
}

#[test]
fn optional_columns_may_be_absent() {
    let dir = tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "scan.csv",
        "angle,filtered_distance,confidence,is_gap\n0.0,50.0,0.9,0\n",
    );

    let table = parse_scan_file(&path).unwrap();
    assert_eq!(table.len(), 1);
    assert!(table.overlay_band().is_none());
}

#[test]
fn header_order_does_not_matter() {
    let dir = tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "scan.csv",
        "is_gap,confidence,angle,filtered_distance\nTrue,0.7,12.5,33.0\n",
    );

    let table = parse_scan_file(&path).unwrap();
    assert_eq!(table.records[0].angle, 12.5);
    assert_eq!(table.records[0].filtered_distance, 33.0);
    assert!(table.records[0].is_gap);
}

#[test]
fn missing_mandatory_column_is_a_load_error() {
    let dir = tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "scan.csv",
        "angle,filtered_distance,is_gap\n0.0,50.0,False\n",
    );

    match parse_scan_file(&path) {
        Err(DataLoadError::MissingColumn { name }) => assert_eq!(name, "confidence"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempdir().unwrap();
    match parse_scan_file(&dir.path().join("nope.csv")) {
        Err(DataLoadError::Io { .. }) => {}
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn invalid_rows_are_skipped_not_fatal() {
    let dir = tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "scan.csv",
        "angle,filtered_distance,confidence,is_gap\n\
         0.0,50.0,0.9,False\n\
         bad,50.0,0.9,False\n\
         2.0,51.0,not_a_number,True\n\
         3.0,49.0,0.7,maybe\n\
         4.0,48.0,0.6,True\n",
    );

    let table = parse_scan_file(&path).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.records[1].angle, 4.0);
}

#[test]
fn rolling_columns_follow_window_policy() {
    let dir = tempdir().unwrap();
    let mut content =
        String::from("angle,filtered_distance,confidence,is_gap\n");
    for i in 0..ROLLING_WINDOW + 5 {
        content.push_str(&format!("{i}.0,50.0,0.5,True\n"));
    }
    let path = write_csv(dir.path(), "scan.csv", &content);

    let table = parse_scan_file(&path).unwrap();
    assert_eq!(table.detection_rate.len(), ROLLING_WINDOW + 5);
    assert!(table.detection_rate[ROLLING_WINDOW - 2].is_nan());
    assert_eq!(table.detection_rate[ROLLING_WINDOW - 1], 100.0);
    assert!((table.confidence_ma[ROLLING_WINDOW + 4] - 0.5).abs() < 1e-12);
}
