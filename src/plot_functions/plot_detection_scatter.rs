// src/plot_functions/plot_detection_scatter.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::{Circle, PathElement, Rectangle};
use plotters::series::LineSeries;
use plotters::style::colors::WHITE;
use plotters::style::{Color, IntoFont};

use std::error::Error;

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, GAP_POINT_RADIUS,
    LINE_WIDTH_LEGEND, SCATTER_POINT_RADIUS,
};
use crate::data_input::scan_data::ScanTable;
use crate::plot_framework::{
    calculate_range, confidence_color, draw_unavailable_message, StyleConfig,
};

/// Main detection panel: distance vs angle, points colored by confidence,
/// detected gaps overplotted, optional baseline/threshold overlay.
pub fn plot_detection_scatter(
    area: &DrawingArea<BitMapBackend, Shift>,
    table: &ScanTable,
    style: &StyleConfig,
) -> Result<(), Box<dyn Error>> {
    let panel_name = "Gap Detection";
    if table.is_empty() {
        return draw_unavailable_message(area, panel_name, "No data points", style);
    }

    let mut angle_min = f64::INFINITY;
    let mut angle_max = f64::NEG_INFINITY;
    let mut dist_min = f64::INFINITY;
    let mut dist_max = f64::NEG_INFINITY;
    for r in &table.records {
        angle_min = angle_min.min(r.angle);
        angle_max = angle_max.max(r.angle);
        dist_min = dist_min.min(r.filtered_distance);
        dist_max = dist_max.max(r.filtered_distance);
    }
    // The overlay band must stay inside the plotted range.
    if let Some((baseline, threshold)) = table.overlay_band() {
        dist_min = dist_min.min(baseline).min(threshold);
        dist_max = dist_max.max(baseline).max(threshold);
    }
    if angle_min.is_infinite() || dist_min.is_infinite() {
        return draw_unavailable_message(area, panel_name, "No finite data points", style);
    }

    let (x_min, x_max) = calculate_range(angle_min, angle_max);
    let (y_min, y_max) = calculate_range(dist_min, dist_max);

    let mut chart = ChartBuilder::on(area)
        .caption(
            "Gap Detection Analysis",
            ("sans-serif", FONT_SIZE_CHART_TITLE)
                .into_font()
                .color(&style.text),
        )
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Angle (degrees)")
        .y_desc("Distance (cm)")
        .axis_style(style.text.mix(0.8))
        .bold_line_style(style.text.mix(0.2))
        .light_line_style(style.text.mix(0.1))
        .label_style(
            ("sans-serif", FONT_SIZE_AXIS_LABEL)
                .into_font()
                .color(&style.text),
        )
        .draw()?;

    let mut legend_series_count = 0;

    if let Some((baseline, threshold)) = table.overlay_band() {
        let (band_lo, band_hi) = if baseline <= threshold {
            (baseline, threshold)
        } else {
            (threshold, baseline)
        };
        let zone_color = style.warning.mix(0.1);
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x_min, band_lo), (x_max, band_hi)],
                zone_color.filled(),
            )))?
            .label("Threshold Zone")
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 16, y + 5)], zone_color.filled())
            });
        legend_series_count += 1;

        let baseline_color = style.warning;
        chart
            .draw_series(LineSeries::new(
                vec![(x_min, baseline), (x_max, baseline)],
                baseline_color.mix(0.6).stroke_width(2),
            ))?
            .label("Baseline")
            .legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    baseline_color.stroke_width(LINE_WIDTH_LEGEND),
                )
            });
        legend_series_count += 1;
    }

    chart.draw_series(table.records.iter().map(|r| {
        Circle::new(
            (r.angle, r.filtered_distance),
            SCATTER_POINT_RADIUS,
            confidence_color(style, r.confidence).mix(0.7).filled(),
        )
    }))?;

    let gaps: Vec<(f64, f64)> = table
        .records
        .iter()
        .filter(|r| r.is_gap)
        .map(|r| (r.angle, r.filtered_distance))
        .collect();
    if !gaps.is_empty() {
        let gap_color = style.gap;
        chart
            .draw_series(
                gaps.iter()
                    .map(|&p| Circle::new(p, GAP_POINT_RADIUS, gap_color.mix(0.6).filled())),
            )?
            .label("Detected Gaps")
            .legend(move |(x, y)| Circle::new((x + 10, y), 5, gap_color.filled()));
        legend_series_count += 1;

        // White rim so gap markers read against the confidence gradient.
        chart.draw_series(
            gaps.iter()
                .map(|&p| Circle::new(p, GAP_POINT_RADIUS, WHITE.mix(0.9).stroke_width(1))),
        )?;
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(style.background.mix(0.8))
            .border_style(style.text.mix(0.5))
            .label_font(
                ("sans-serif", FONT_SIZE_LEGEND)
                    .into_font()
                    .color(&style.text),
            )
            .draw()?;
    }

    Ok(())
}

// src/plot_functions/plot_detection_scatter.rs
