// src/data_input/scan_data.rs

use ndarray::Array1;

use crate::constants::ROLLING_WINDOW;
use crate::data_analysis::rolling::trailing_mean;

/// One ultrasonic scan measurement.
/// `baseline_distance` and `threshold` are only present when the rig logged
/// a calibration pass; they feed the overlay on the scatter panel and
/// nothing else.
#[derive(Debug, Clone)]
pub struct ScanRecord {
    pub angle: f64,             // Scan angle (degrees).
    pub filtered_distance: f64, // Distance after the rig's own filtering (cm).
    pub confidence: f64,        // Classification confidence, expected [0, 1].
    pub is_gap: bool,           // Row flagged as a detected gap.
    pub baseline_distance: Option<f64>,
    pub threshold: Option<f64>,
}

/// An ordered scan sequence plus the two derived rolling columns.
/// Row order is the measurement sequence; it is the dimension the trailing
/// windows run over. Records are not modified after construction.
#[derive(Debug, Clone)]
pub struct ScanTable {
    pub records: Vec<ScanRecord>,
    /// Percentage of gap rows in the trailing window, NaN for the first
    /// `ROLLING_WINDOW - 1` rows.
    pub detection_rate: Array1<f64>,
    /// Trailing mean of confidence, same windowing rule.
    pub confidence_ma: Array1<f64>,
}

impl ScanTable {
    /// Builds the table and computes both derived columns in one pass.
    pub fn from_records(records: Vec<ScanRecord>) -> Self {
        let gap_flags: Vec<f64> = records
            .iter()
            .map(|r| if r.is_gap { 1.0 } else { 0.0 })
            .collect();
        let confidences: Vec<f64> = records.iter().map(|r| r.confidence).collect();

        let detection_rate = trailing_mean(&gap_flags, ROLLING_WINDOW).mapv(|v| v * 100.0);
        let confidence_ma = trailing_mean(&confidences, ROLLING_WINDOW);

        ScanTable {
            records,
            detection_rate,
            confidence_ma,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Baseline/threshold overlay values. The rig writes the same
    /// calibration pair on every row, so the first row is authoritative.
    pub fn overlay_band(&self) -> Option<(f64, f64)> {
        let first = self.records.first()?;
        match (first.baseline_distance, first.threshold) {
            (Some(baseline), Some(threshold)) => Some((baseline, threshold)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(is_gap: bool, confidence: f64) -> ScanRecord {
        ScanRecord {
            angle: 0.0,
            filtered_distance: 50.0,
            confidence,
            is_gap,
            baseline_distance: None,
            threshold: None,
        }
    }

    #[test]
    fn derived_columns_match_row_count() {
        let table = ScanTable::from_records(vec![record(false, 0.5); 7]);
        assert_eq!(table.detection_rate.len(), 7);
        assert_eq!(table.confidence_ma.len(), 7);
        // Too few rows for a full window: every entry stays undefined.
        assert!(table.detection_rate.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn overlay_band_requires_both_columns() {
        let mut r = record(false, 0.5);
        r.baseline_distance = Some(60.0);
        let table = ScanTable::from_records(vec![r]);
        assert!(table.overlay_band().is_none());

        let mut r = record(false, 0.5);
        r.baseline_distance = Some(60.0);
        r.threshold = Some(45.0);
        let table = ScanTable::from_records(vec![r]);
        assert_eq!(table.overlay_band(), Some((60.0, 45.0)));
    }
}

// src/data_input/scan_data.rs
