// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::Text;
use plotters::style::{IntoFont, RGBColor};

use std::error::Error;

use crate::constants::{
    COLOR_BACKGROUND, COLOR_GAP, COLOR_PRIMARY, COLOR_SECONDARY, COLOR_TEXT, COLOR_WARNING,
    FONT_SIZE_MESSAGE, TITLE_BAND_HEIGHT,
};

/// Explicit styling for the rendering stage. The original tooling mutated
/// process-wide plotting defaults at start-up; here the whole theme is a
/// plain value handed to the renderer.
#[derive(Clone)]
pub struct StyleConfig {
    pub background: RGBColor,
    pub primary: RGBColor,
    pub secondary: RGBColor,
    pub warning: RGBColor,
    pub gap: RGBColor,
    pub text: RGBColor,
    pub confidence_gradient: colorous::Gradient,
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            background: COLOR_BACKGROUND,
            primary: COLOR_PRIMARY,
            secondary: COLOR_SECONDARY,
            warning: COLOR_WARNING,
            gap: COLOR_GAP,
            text: COLOR_TEXT,
            confidence_gradient: colorous::VIRIDIS,
        }
    }
}

/// Maps a confidence score in [0, 1] onto the report's continuous gradient.
pub fn confidence_color(style: &StyleConfig, confidence: f64) -> RGBColor {
    let t = if confidence.is_finite() {
        confidence.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let color = style.confidence_gradient.eval_continuous(t);
    RGBColor(color.r, color.g, color.b)
}

/// The fixed report layout: a title band, then three rows with height
/// ratio 1.5 : 1 : 1. Row 0 is split two thirds / one third between the
/// detection scatter and the confidence distribution.
pub struct ReportAreas<'a> {
    pub title_band: DrawingArea<BitMapBackend<'a>, Shift>,
    pub detection: DrawingArea<BitMapBackend<'a>, Shift>,
    pub confidence: DrawingArea<BitMapBackend<'a>, Shift>,
    pub metrics: DrawingArea<BitMapBackend<'a>, Shift>,
    pub timeseries: DrawingArea<BitMapBackend<'a>, Shift>,
}

pub fn split_report_areas<'a>(root: DrawingArea<BitMapBackend<'a>, Shift>) -> ReportAreas<'a> {
    let (_, body_y_range) = root.get_pixel_range();
    let body_height = (body_y_range.end - body_y_range.start) - TITLE_BAND_HEIGHT as i32;
    let row0_height = (body_height as f64 * 1.5 / 3.5) as i32;
    let row1_height = (body_height as f64 / 3.5) as i32;

    let (title_band, body) = root.split_vertically(TITLE_BAND_HEIGHT as i32);
    let (row0, rest) = body.split_vertically(row0_height);
    let (metrics, timeseries) = rest.split_vertically(row1_height);

    let (row0_x_range, _) = row0.get_pixel_range();
    let row0_width = row0_x_range.end - row0_x_range.start;
    let (detection, confidence) = row0.split_horizontally(row0_width * 2 / 3);

    ReportAreas {
        title_band,
        detection,
        confidence,
        metrics,
        timeseries,
    }
}

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

// Approximate character width relative to font size, for centering text
// without measuring glyphs.
const CHAR_WIDTH_RATIO: f32 = 0.6;

/// Draw a horizontally centered text line at pixel row `y`.
pub fn draw_centered_text(
    area: &DrawingArea<BitMapBackend, Shift>,
    text: &str,
    y: i32,
    font_px: i32,
    color: &RGBColor,
) -> Result<(), Box<dyn Error>> {
    let (x_range, _) = area.get_pixel_range();
    let width = x_range.end - x_range.start;
    let estimated_text_width = (text.len() as f32 * font_px as f32 * CHAR_WIDTH_RATIO) as i32;
    let x = (width - estimated_text_width).max(0) / 2;
    let text_style = ("sans-serif", font_px).into_font().color(color);
    area.draw(&Text::new(text.to_string(), (x, y), text_style))?;
    Ok(())
}

/// Draw a "Data Unavailable" message on a panel whose data is degenerate,
/// so the rest of the report still renders.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    panel_name: &str,
    reason: &str,
    style: &StyleConfig,
) -> Result<(), Box<dyn Error>> {
    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (x_range.end - x_range.start, y_range.end - y_range.start);
    let message = format!("{panel_name} Data Unavailable: {reason}");

    let estimated_text_width =
        (message.len() as f32 * FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let center_x = (width - estimated_text_width).max(0) / 2;
    let center_y = height / 2 - FONT_SIZE_MESSAGE / 2;

    let text_style = ("sans-serif", FONT_SIZE_MESSAGE)
        .into_font()
        .color(&style.gap);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_padding_is_proportional() {
        let (min, max) = calculate_range(0.0, 100.0);
        assert_eq!(min, -15.0);
        assert_eq!(max, 115.0);
    }

    #[test]
    fn degenerate_range_gets_fixed_padding() {
        let (min, max) = calculate_range(5.0, 5.0);
        assert_eq!(min, 4.5);
        assert_eq!(max, 5.5);
    }

    #[test]
    fn inverted_range_is_reordered() {
        let (min, max) = calculate_range(10.0, 0.0);
        assert!(min < max);
    }

    #[test]
    fn confidence_color_clamps_out_of_range_scores() {
        let style = StyleConfig::default();
        assert_eq!(confidence_color(&style, -1.0), confidence_color(&style, 0.0));
        assert_eq!(confidence_color(&style, 2.0), confidence_color(&style, 1.0));
        assert_eq!(
            confidence_color(&style, f64::NAN),
            confidence_color(&style, 0.0)
        );
    }
}

// src/plot_framework.rs
