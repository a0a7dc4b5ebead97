// src/plot_functions/plot_confidence_distribution.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::{PathElement, Rectangle};
use plotters::series::LineSeries;
use plotters::style::{Color, IntoFont};

use std::error::Error;

use crate::constants::{
    CONFIDENCE_HIST_BINS, FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND,
    LINE_WIDTH_LEGEND,
};
use crate::data_input::scan_data::ScanTable;
use crate::plot_framework::{draw_unavailable_message, StyleConfig};

/// Horizontal histogram of confidence scores with a mean marker line.
/// Bins are fixed over the confidence domain [0, 1]; out-of-range scores
/// land in the edge bins.
pub fn plot_confidence_distribution(
    area: &DrawingArea<BitMapBackend, Shift>,
    table: &ScanTable,
    style: &StyleConfig,
) -> Result<(), Box<dyn Error>> {
    let panel_name = "Confidence Distribution";
    if table.is_empty() {
        return draw_unavailable_message(area, panel_name, "No data points", style);
    }

    let bin_width = 1.0 / CONFIDENCE_HIST_BINS as f64;
    let mut counts = vec![0usize; CONFIDENCE_HIST_BINS];
    let mut confidence_sum = 0.0;
    for r in &table.records {
        let clamped = r.confidence.clamp(0.0, 1.0);
        let bin = ((clamped / bin_width) as usize).min(CONFIDENCE_HIST_BINS - 1);
        counts[bin] += 1;
        confidence_sum += r.confidence;
    }
    let mean_confidence = confidence_sum / table.len() as f64;

    let max_count = counts.iter().copied().max().unwrap_or(0).max(1);
    let x_max = max_count as f64 * 1.15;

    let mut chart = ChartBuilder::on(area)
        .caption(
            "Confidence Distribution",
            ("sans-serif", FONT_SIZE_CHART_TITLE)
                .into_font()
                .color(&style.text),
        )
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(0.0..x_max, 0.0..1.0f64)?;

    chart
        .configure_mesh()
        .x_desc("Count")
        .y_desc("Confidence Score")
        .axis_style(style.text.mix(0.8))
        .bold_line_style(style.text.mix(0.2))
        .light_line_style(style.text.mix(0.1))
        .label_style(
            ("sans-serif", FONT_SIZE_AXIS_LABEL)
                .into_font()
                .color(&style.text),
        )
        .draw()?;

    let bar_inset = bin_width * 0.08;
    chart.draw_series(counts.iter().enumerate().filter(|(_, &c)| c > 0).map(
        |(bin, &count)| {
            let y_lo = bin as f64 * bin_width + bar_inset;
            let y_hi = (bin + 1) as f64 * bin_width - bar_inset;
            Rectangle::new(
                [(0.0, y_lo), (count as f64, y_hi)],
                style.primary.mix(0.7).filled(),
            )
        },
    ))?;

    let mean_color = style.warning;
    chart
        .draw_series(LineSeries::new(
            vec![(0.0, mean_confidence), (x_max, mean_confidence)],
            mean_color.stroke_width(2),
        ))?
        .label(format!("Mean: {mean_confidence:.2}"))
        .legend(move |(x, y)| {
            PathElement::new(
                vec![(x, y), (x + 20, y)],
                mean_color.stroke_width(LINE_WIDTH_LEGEND),
            )
        });

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

// src/plot_functions/plot_confidence_distribution.rs
