// src/constants.rs

use plotters::style::RGBColor;

// Report figure dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1280;

// Trailing window length (rows) for the detection-rate and confidence
// moving-average columns.
pub const ROLLING_WINDOW: usize = 20;

// Number of bins for the confidence distribution histogram.
pub const CONFIDENCE_HIST_BINS: usize = 30;

// Fixed success-rate figure carried over from the rig's reporting template.
// It is not derived from scan data.
// TODO: replace with a measured pass/fail rate once the rig logs one per run.
pub const SUCCESS_RATE_PERCENT: f64 = 95.0;

// Vertical band reserved at the top of the figure for the title block, in pixels.
pub const TITLE_BAND_HEIGHT: u32 = 130;

// --- Dark report theme ---
pub const COLOR_BACKGROUND: RGBColor = RGBColor(31, 31, 31);
pub const COLOR_PRIMARY: RGBColor = RGBColor(52, 152, 219);
pub const COLOR_SECONDARY: RGBColor = RGBColor(46, 204, 113);
pub const COLOR_WARNING: RGBColor = RGBColor(241, 196, 15);
pub const COLOR_GAP: RGBColor = RGBColor(231, 76, 60);
pub const COLOR_TEXT: RGBColor = RGBColor(220, 220, 220);

// Font sizes (px).
pub const FONT_SIZE_MAIN_TITLE: i32 = 34;
pub const FONT_SIZE_SUBTITLE: i32 = 24;
pub const FONT_SIZE_METADATA: i32 = 19;
pub const FONT_SIZE_CHART_TITLE: i32 = 22;
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;
pub const FONT_SIZE_LEGEND: i32 = 15;
pub const FONT_SIZE_MESSAGE: i32 = 24;
pub const FONT_SIZE_BAR_ANNOTATION: i32 = 17;

// Stroke widths for lines.
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Marker radii for the scatter panels (px).
pub const SCATTER_POINT_RADIUS: i32 = 5;
pub const GAP_POINT_RADIUS: i32 = 7;

// src/constants.rs
