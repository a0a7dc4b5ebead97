// src/data_analysis/metrics.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt;

use crate::constants::SUCCESS_RATE_PERCENT;
use crate::data_input::scan_data::ScanTable;
use crate::error::EmptyTableError;

/// Whole-table aggregates shown in the report's metadata line.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub total_scans: usize,
    pub gaps_detected: usize,
    pub avg_confidence: f64,
}

pub const ADVANCED_METRIC_COUNT: usize = 4;

/// The four percentage metrics of the performance-bars panel, in their
/// fixed display order.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvancedMetrics {
    entries: [(&'static str, f64); ADVANCED_METRIC_COUNT],
}

impl AdvancedMetrics {
    pub fn entries(&self) -> &[(&'static str, f64)] {
        &self.entries
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(label, _)| *label == name)
            .map(|(_, value)| *value)
    }
}

/// Reduces a table to its summary and advanced metrics. Pure: no I/O, the
/// table is not modified. Percentages are plain `* 100.0`; any rounding is
/// left to the rendering side.
pub fn calculate_metrics(
    table: &ScanTable,
) -> Result<(SummaryStats, AdvancedMetrics), EmptyTableError> {
    let stats = calculate_summary_stats(table)?;
    let metrics = calculate_advanced_metrics(table, &stats);
    Ok((stats, metrics))
}

pub fn calculate_summary_stats(table: &ScanTable) -> Result<SummaryStats, EmptyTableError> {
    if table.is_empty() {
        return Err(EmptyTableError);
    }
    let total_scans = table.len();
    let gaps_detected = table.records.iter().filter(|r| r.is_gap).count();
    let avg_confidence =
        table.records.iter().map(|r| r.confidence).sum::<f64>() / total_scans as f64;
    Ok(SummaryStats {
        total_scans,
        gaps_detected,
        avg_confidence,
    })
}

fn calculate_advanced_metrics(table: &ScanTable, stats: &SummaryStats) -> AdvancedMetrics {
    let confidence: Array1<f64> = table.records.iter().map(|r| r.confidence).collect();
    // QuantileExt::max errors on NaN input; an undefined maximum renders as
    // a zero-length bar rather than failing the report.
    let max_confidence = match confidence.max() {
        Ok(v) => *v,
        Err(_) => f64::NAN,
    };

    AdvancedMetrics {
        entries: [
            (
                "Detection Rate",
                stats.gaps_detected as f64 / stats.total_scans as f64 * 100.0,
            ),
            ("Avg Confidence", stats.avg_confidence * 100.0),
            ("Max Confidence", max_confidence * 100.0),
            ("Success Rate", SUCCESS_RATE_PERCENT),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::scan_data::ScanRecord;

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
    fn empty_table_is_rejected() {
        let table = ScanTable::from_records(Vec::new());
        assert!(calculate_metrics(&table).is_err());
    }

    #[test]
    fn gaps_never_exceed_total() {
        let table = ScanTable::from_records(vec![record(true, 0.9), record(false, 0.4)]);
        let stats = calculate_summary_stats(&table).unwrap();
        assert!(stats.gaps_detected <= stats.total_scans);
    }

    #[test]
    fn detection_rate_matches_summary_exactly() {
        let mut records = vec![record(true, 0.6); 3];
        records.extend(vec![record(false, 0.6); 5]);
        let table = ScanTable::from_records(records);
        let (stats, metrics) = calculate_metrics(&table).unwrap();
        assert_eq!(
            metrics.value("Detection Rate").unwrap(),
            stats.gaps_detected as f64 / stats.total_scans as f64 * 100.0
        );
    }

    #[test]
    fn metric_order_is_fixed() {
        let table = ScanTable::from_records(vec![record(false, 0.5)]);
        let (_, metrics) = calculate_metrics(&table).unwrap();
        let labels: Vec<&str> = metrics.entries().iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            [
                "Detection Rate",
                "Avg Confidence",
                "Max Confidence",
                "Success Rate"
            ]
        );
    }

    #[test]
    fn success_rate_is_the_template_figure() {
        let table = ScanTable::from_records(vec![record(false, 0.5)]);
        let (_, metrics) = calculate_metrics(&table).unwrap();
        assert_eq!(metrics.value("Success Rate"), Some(95.0));
    }
}

// src/data_analysis/metrics.rs
