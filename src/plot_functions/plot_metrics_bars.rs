// src/plot_functions/plot_metrics_bars.rs

use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::{Rectangle, Text};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_BAR_ANNOTATION, FONT_SIZE_CHART_TITLE,
};
use crate::data_analysis::metrics::AdvancedMetrics;
use crate::plot_framework::{draw_unavailable_message, StyleConfig};

/// Horizontal bars for the four advanced metrics, annotated with their
/// percentage values. Bar order follows the fixed metric order, bottom-up.
pub fn plot_metrics_bars(
    area: &DrawingArea<BitMapBackend, Shift>,
    metrics: &AdvancedMetrics,
    style: &StyleConfig,
) -> Result<(), Box<dyn Error>> {
    let panel_name = "Performance Metrics";
    let entries = metrics.entries();

    let max_value = entries
        .iter()
        .map(|(_, v)| *v)
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max);
    if max_value <= 0.0 {
        return draw_unavailable_message(area, panel_name, "No finite metric values", style);
    }
    let x_max = max_value * 1.15;

    let mut chart = ChartBuilder::on(area)
        .caption(
            "Performance Metrics",
            ("sans-serif", FONT_SIZE_CHART_TITLE)
                .into_font()
                .color(&style.text),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(0.0..x_max, 0.0..entries.len() as f64)?;

    chart
        .configure_mesh()
        .x_desc("Percent")
        .y_labels(0)
        .disable_y_mesh()
        .axis_style(style.text.mix(0.8))
        .light_line_style(style.text.mix(0.1))
        .label_style(
            ("sans-serif", FONT_SIZE_AXIS_LABEL)
                .into_font()
                .color(&style.text),
        )
        .draw()?;

    let bar_colors: [RGBColor; 4] = [style.primary, style.secondary, style.warning, style.gap];
    let annotation_font = ("sans-serif", FONT_SIZE_BAR_ANNOTATION)
        .into_font()
        .color(&style.text);

    for (i, &(label, value)) in entries.iter().enumerate() {
        let color = bar_colors[i % bar_colors.len()];
        let slot = i as f64;

        if value.is_finite() && value > 0.0 {
            chart.draw_series(std::iter::once(Rectangle::new(
                [(0.0, slot + 0.2), (value.min(x_max), slot + 0.72)],
                color.mix(0.85).filled(),
            )))?;
        }

        chart.draw_series(std::iter::once(Text::new(
            label.to_string(),
            (x_max * 0.005, slot + 0.98),
            annotation_font.clone(),
        )))?;

        let annotation = if value.is_finite() {
            format!("{value:.1}%")
        } else {
            "n/a".to_string()
        };
        let annotation_x = if value.is_finite() {
            value.min(x_max) + x_max * 0.008
        } else {
            x_max * 0.008
        };
        chart.draw_series(std::iter::once(Text::new(
            annotation,
            (annotation_x, slot + 0.62),
            annotation_font.clone(),
        )))?;
    }

    Ok(())
}

// src/plot_functions/plot_metrics_bars.rs
