// src/plot_functions/plot_time_series.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::{Circle, PathElement};
use plotters::series::LineSeries;
use plotters::style::{Color, IntoFont};

use std::error::Error;

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, LINE_WIDTH_LEGEND,
    LINE_WIDTH_PLOT,
};
use crate::data_input::scan_data::ScanTable;
use crate::plot_framework::{calculate_range, draw_unavailable_message, StyleConfig};

/// Dual-axis time series: filtered distance over measurement index on the
/// left axis, confidence and its trailing mean on the right axis, gap rows
/// marked on the distance trace.
pub fn plot_time_series(
    area: &DrawingArea<BitMapBackend, Shift>,
    table: &ScanTable,
    style: &StyleConfig,
) -> Result<(), Box<dyn Error>> {
    let panel_name = "Time Series";
    if table.is_empty() {
        return draw_unavailable_message(area, panel_name, "No data points", style);
    }

    let (dist_min, dist_max) = table.records.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min_v, max_v), r| (min_v.min(r.filtered_distance), max_v.max(r.filtered_distance)),
    );
    if dist_min.is_infinite() {
        return draw_unavailable_message(area, panel_name, "No finite data points", style);
    }
    let (y_min, y_max) = calculate_range(dist_min, dist_max);
    let x_range = -0.5..(table.len() as f64 - 0.5);

    let mut chart = ChartBuilder::on(area)
        .caption(
            "Time Series Analysis",
            ("sans-serif", FONT_SIZE_CHART_TITLE)
                .into_font()
                .color(&style.text),
        )
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), y_min..y_max)?
        .set_secondary_coord(x_range, 0.0..1.05f64);

    chart
        .configure_mesh()
        .x_desc("Measurement Index")
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

    chart
        .configure_secondary_axes()
        .y_desc("Confidence Score")
        .axis_style(style.text.mix(0.8))
        .label_style(
            ("sans-serif", FONT_SIZE_AXIS_LABEL)
                .into_font()
                .color(&style.text),
        )
        .draw()?;

    let distance_color = style.primary;
    chart
        .draw_series(LineSeries::new(
            table
                .records
                .iter()
                .enumerate()
                .map(|(i, r)| (i as f64, r.filtered_distance)),
            distance_color.mix(0.8).stroke_width(LINE_WIDTH_PLOT),
        ))?
        .label("Filtered Distance")
        .legend(move |(x, y)| {
            PathElement::new(
                vec![(x, y), (x + 20, y)],
                distance_color.stroke_width(LINE_WIDTH_LEGEND),
            )
        });

    let gap_color = style.gap;
    let gaps: Vec<(f64, f64)> = table
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_gap)
        .map(|(i, r)| (i as f64, r.filtered_distance))
        .collect();
    if !gaps.is_empty() {
        chart
            .draw_series(
                gaps.into_iter()
                    .map(|p| Circle::new(p, 5, gap_color.mix(0.6).filled())),
            )?
            .label("Gaps")
            .legend(move |(x, y)| Circle::new((x + 10, y), 4, gap_color.filled()));
    }

    let confidence_color = style.warning;
    chart
        .draw_secondary_series(LineSeries::new(
            table
                .records
                .iter()
                .enumerate()
                .map(|(i, r)| (i as f64, r.confidence)),
            confidence_color.mix(0.6).stroke_width(LINE_WIDTH_PLOT),
        ))?
        .label("Confidence")
        .legend(move |(x, y)| {
            PathElement::new(
                vec![(x, y), (x + 20, y)],
                confidence_color.stroke_width(LINE_WIDTH_LEGEND),
            )
        });

    // The moving average is undefined for the first window; skip the NaN
    // prefix instead of letting it break the line.
    let ma_points: Vec<(f64, f64)> = table
        .confidence_ma
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .map(|(i, v)| (i as f64, *v))
        .collect();
    if !ma_points.is_empty() {
        let ma_color = style.secondary;
        chart
            .draw_secondary_series(LineSeries::new(
                ma_points,
                ma_color.mix(0.5).stroke_width(1),
            ))?
            .label("Confidence MA")
            .legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    ma_color.stroke_width(LINE_WIDTH_LEGEND),
                )
            });
    }

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

    Ok(())
}

// src/plot_functions/plot_time_series.rs
