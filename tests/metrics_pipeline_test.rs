// tests/metrics_pipeline_test.rs

use gapscan_csv_render::data_analysis::metrics::calculate_metrics;
use gapscan_csv_render::data_input::scan_data::{ScanRecord, ScanTable};

fn record(is_gap: bool, confidence: f64) -> ScanRecord {
    ScanRecord {
        angle: 0.0,
        filtered_distance: 42.0,
        confidence,
        is_gap,
        baseline_distance: None,
        threshold: None,
    }
}

#[test]
fn twenty_five_row_campaign_example() {
    // 25 rows: 5 gaps then 20 non-gaps, constant confidence 0.8.
    let mut records = vec![record(true, 0.8); 5];
    records.extend(vec![record(false, 0.8); 20]);
    let table = ScanTable::from_records(records);

    let (stats, metrics) = calculate_metrics(&table).unwrap();
    assert_eq!(stats.total_scans, 25);
    assert_eq!(stats.gaps_detected, 5);
    assert!((stats.avg_confidence - 0.8).abs() < 1e-12);

    assert_eq!(metrics.value("Detection Rate"), Some(20.0));
    assert!((metrics.value("Max Confidence").unwrap() - 80.0).abs() < 1e-9);
    assert_eq!(metrics.value("Success Rate"), Some(95.0));
}

#[test]
fn all_gap_table_saturates_detection_rate() {
    let table = ScanTable::from_records(vec![record(true, 0.9); 40]);
    for (i, v) in table.detection_rate.iter().enumerate() {
        if i < 19 {
            assert!(v.is_nan(), "entry {i} should be undefined");
        } else {
            assert_eq!(*v, 100.0, "entry {i}");
        }
    }
}

#[test]
fn constant_confidence_keeps_moving_average_flat() {
    let c = 0.63;
    let table = ScanTable::from_records(vec![record(false, c); 32]);
    for (i, v) in table.confidence_ma.iter().enumerate() {
        if i < 19 {
            assert!(v.is_nan(), "entry {i} should be undefined");
        } else {
            assert!((v - c).abs() < 1e-12, "entry {i}");
        }
    }
}

#[test]
fn empty_table_raises_empty_table_error() {
    let table = ScanTable::from_records(Vec::new());
    assert!(calculate_metrics(&table).is_err());
}

#[test]
fn gaps_detected_bounded_by_total_scans() {
    let mut records = vec![record(true, 0.2); 13];
    records.extend(vec![record(false, 0.95); 8]);
    let table = ScanTable::from_records(records);
    let (stats, metrics) = calculate_metrics(&table).unwrap();
    assert!(stats.gaps_detected <= stats.total_scans);
    assert_eq!(
        metrics.value("Detection Rate").unwrap(),
        stats.gaps_detected as f64 / stats.total_scans as f64 * 100.0
    );
}
