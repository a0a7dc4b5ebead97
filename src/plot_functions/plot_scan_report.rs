// src/plot_functions/plot_scan_report.rs

use plotters::backend::BitMapBackend;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};

use std::error::Error;
use std::path::Path;

use crate::constants::{
    FONT_SIZE_MAIN_TITLE, FONT_SIZE_METADATA, FONT_SIZE_SUBTITLE, PLOT_HEIGHT, PLOT_WIDTH,
};
use crate::data_analysis::metrics::{AdvancedMetrics, SummaryStats};
use crate::data_input::scan_data::ScanTable;
use crate::plot_framework::{draw_centered_text, split_report_areas, StyleConfig};
use crate::plot_functions::plot_confidence_distribution::plot_confidence_distribution;
use crate::plot_functions::plot_detection_scatter::plot_detection_scatter;
use crate::plot_functions::plot_metrics_bars::plot_metrics_bars;
use crate::plot_functions::plot_time_series::plot_time_series;

/// Composes the full report figure for one experiment and writes it to
/// `output_path`. The title string follows the experiment manifest
/// convention: main title, then an optional subtitle after a newline.
pub fn render_scan_report(
    table: &ScanTable,
    stats: &SummaryStats,
    metrics: &AdvancedMetrics,
    title: &str,
    output_path: &Path,
    style: &StyleConfig,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&style.background)?;

    let areas = split_report_areas(root.clone());
    draw_title_block(&areas.title_band, title, stats, style)?;
    plot_detection_scatter(&areas.detection, table, style)?;
    plot_confidence_distribution(&areas.confidence, table, style)?;
    plot_metrics_bars(&areas.metrics, metrics, style)?;
    plot_time_series(&areas.timeseries, table, style)?;

    root.present()?;
    Ok(())
}

/// Title band: main title, subtitle, and the summary metadata line.
fn draw_title_block(
    area: &DrawingArea<BitMapBackend, Shift>,
    title: &str,
    stats: &SummaryStats,
    style: &StyleConfig,
) -> Result<(), Box<dyn Error>> {
    let mut lines = title.splitn(2, '\n');
    let main_title = lines.next().unwrap_or(title);
    let subtitle = lines.next();

    draw_centered_text(area, main_title, 14, FONT_SIZE_MAIN_TITLE, &style.text)?;
    if let Some(subtitle) = subtitle {
        draw_centered_text(area, subtitle.trim(), 60, FONT_SIZE_SUBTITLE, &style.text)?;
    }

    let metadata_text = format!(
        "Total Scans: {} | Gaps Detected: {} | Avg Confidence: {:.2}",
        stats.total_scans, stats.gaps_detected, stats.avg_confidence
    );
    draw_centered_text(area, &metadata_text, 98, FONT_SIZE_METADATA, &style.text)?;

    Ok(())
}

// src/plot_functions/plot_scan_report.rs
