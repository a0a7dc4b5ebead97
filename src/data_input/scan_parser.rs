// src/data_input/scan_parser.rs

use csv::ReaderBuilder;
use log::warn;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::data_input::scan_data::{ScanRecord, ScanTable};
use crate::error::DataLoadError;

/// Column names the loader looks for, mandatory ones first.
const TARGET_HEADERS: [&str; 6] = [
    "angle",             // 0
    "filtered_distance", // 1
    "confidence",        // 2
    "is_gap",            // 3
    "baseline_distance", // 4 (optional)
    "threshold",         // 5 (optional)
];
const MANDATORY_HEADER_COUNT: usize = 4;

/// Parses a gap-scan CSV into a `ScanTable` with both rolling columns
/// computed.
///
/// The header row is mapped to column indices by name, so column order in
/// the file does not matter. A missing mandatory column fails the whole
/// file; a missing optional column only disables the baseline/threshold
/// overlay downstream. Rows with unparseable mandatory values are skipped
/// with a warning.
pub fn parse_scan_file(input_file_path: &Path) -> Result<ScanTable, DataLoadError> {
    let file = File::open(input_file_path).map_err(|source| DataLoadError::Io {
        path: input_file_path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let header_record = reader.headers()?.clone();
    let header_indices: Vec<Option<usize>> = TARGET_HEADERS
        .iter()
        .map(|&target_header| {
            header_record
                .iter()
                .position(|h| h.trim() == target_header)
        })
        .collect();

    for i in 0..MANDATORY_HEADER_COUNT {
        if header_indices[i].is_none() {
            return Err(DataLoadError::MissingColumn {
                name: TARGET_HEADERS[i],
            });
        }
    }

    let mut records: Vec<ScanRecord> = Vec::new();
    for (row_index, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!(
                    "skipping row {} due to CSV read error: {}",
                    row_index + 1,
                    e
                );
                continue;
            }
        };

        let parse_f64_by_target_idx = |target_idx: usize| -> Option<f64> {
            header_indices
                .get(target_idx)
                .and_then(|opt_csv_idx| opt_csv_idx.as_ref())
                .and_then(|&csv_idx| record.get(csv_idx))
                .and_then(|val_str| val_str.parse::<f64>().ok())
        };

        let angle = parse_f64_by_target_idx(0);
        let filtered_distance = parse_f64_by_target_idx(1);
        let confidence = parse_f64_by_target_idx(2);
        let is_gap = header_indices[3]
            .and_then(|csv_idx| record.get(csv_idx))
            .and_then(parse_gap_flag);

        let (angle, filtered_distance, confidence, is_gap) =
            match (angle, filtered_distance, confidence, is_gap) {
                (Some(a), Some(d), Some(c), Some(g)) => (a, d, c, g),
                _ => {
                    warn!(
                        "skipping row {} due to missing or invalid mandatory value",
                        row_index + 1
                    );
                    continue;
                }
            };

        records.push(ScanRecord {
            angle,
            filtered_distance,
            confidence,
            is_gap,
            baseline_distance: parse_f64_by_target_idx(4),
            threshold: parse_f64_by_target_idx(5),
        });
    }

    Ok(ScanTable::from_records(records))
}

/// Accepts both the rig's pandas-style `True`/`False` serialization and
/// plain `1`/`0`.
fn parse_gap_flag(field: &str) -> Option<bool> {
    match field.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_flag_accepts_pandas_and_numeric_forms() {
        assert_eq!(parse_gap_flag("True"), Some(true));
        assert_eq!(parse_gap_flag("false"), Some(false));
        assert_eq!(parse_gap_flag("1"), Some(true));
        assert_eq!(parse_gap_flag("0"), Some(false));
        assert_eq!(parse_gap_flag("yes"), None);
    }
}

// src/data_input/scan_parser.rs
