// src/batch.rs

use log::error;
use std::path::{Path, PathBuf};

use crate::data_analysis::metrics::calculate_metrics;
use crate::data_input::scan_parser::parse_scan_file;
use crate::error::PipelineError;
use crate::plot_framework::StyleConfig;
use crate::plot_functions::plot_scan_report::render_scan_report;

/// One batch entry: a scan file name (relative to the input directory) and
/// the report title. The title carries the figure prefix before the first
/// `:` and an optional subtitle after a newline.
#[derive(Debug, Clone)]
pub struct Experiment {
    pub file_name: String,
    pub title: String,
}

impl Experiment {
    pub fn new(file_name: &str, title: &str) -> Self {
        Experiment {
            file_name: file_name.to_string(),
            title: title.to_string(),
        }
    }
}

pub type ExperimentOutcome = Result<PathBuf, PipelineError>;

/// The five gap-scan experiments of the November 2024 measurement campaign.
pub fn default_experiments() -> Vec<Experiment> {
    vec![
        Experiment::new(
            "gap_scan_20241122_192025.csv",
            "Figure 4a: Gap Detection in Controlled Setting\nRectangular Gap Analysis with Baseline Calibration",
        ),
        Experiment::new(
            "gap_scan_20241122_194117.csv",
            "Figure 4b: Irregular Gap Analysis\nDynamic Detection with Variable Gap Sizes",
        ),
        Experiment::new(
            "gap_scan_20241122_195410.csv",
            "Figure 4c: Circular Gap Detection\nValidation with Curved Surface Analysis",
        ),
        Experiment::new(
            "gap_scan_20241122_201505.csv",
            "Figure 4d: Gap Detection in Complex Environment\nAnalysis with Environmental Obstructions",
        ),
        Experiment::new(
            "gap_scan_20241122_202705.csv",
            "Figure 4e: Natural Obstruction Analysis\nGap Detection with Environmental Variability",
        ),
    ]
}

/// Figure identifier: the title text before the first `:`.
pub fn figure_prefix(title: &str) -> &str {
    title.split(':').next().unwrap_or(title).trim()
}

/// Deterministic output name: `<figure prefix>_<input name up to the first dot>.png`.
pub fn output_file_name(title: &str, input_file_name: &str) -> String {
    let stem = input_file_name
        .split('.')
        .next()
        .unwrap_or(input_file_name);
    format!("{}_{}.png", figure_prefix(title), stem)
}

/// Runs the full pipeline for a single experiment:
/// load -> rolling columns -> metrics -> render -> save.
pub fn run_experiment(
    input_dir: &Path,
    experiment: &Experiment,
    output_dir: &Path,
    style: &StyleConfig,
) -> ExperimentOutcome {
    let input_path = input_dir.join(&experiment.file_name);
    let table = parse_scan_file(&input_path)?;
    let (stats, metrics) = calculate_metrics(&table)?;

    let output_path = output_dir.join(output_file_name(&experiment.title, &experiment.file_name));
    if let Err(e) = render_scan_report(
        &table,
        &stats,
        &metrics,
        &experiment.title,
        &output_path,
        style,
    ) {
        // A failed render must not leave a half-drawn file behind.
        let _ = std::fs::remove_file(&output_path);
        return Err(PipelineError::Render(e.to_string()));
    }
    Ok(output_path)
}

/// Best-effort batch: every experiment gets its own outcome, and a failure
/// on one file never stops the ones after it.
pub fn run_batch(
    input_dir: &Path,
    experiments: &[Experiment],
    output_dir: &Path,
    style: &StyleConfig,
) -> Vec<(String, ExperimentOutcome)> {
    let mut outcomes = Vec::with_capacity(experiments.len());
    for experiment in experiments {
        let headline = experiment.title.split('\n').next().unwrap_or("");
        println!("\nProcessing: {headline}");

        let outcome = run_experiment(input_dir, experiment, output_dir, style);
        match &outcome {
            Ok(path) => println!("Successfully created visualization: {}", path.display()),
            Err(e) => error!("error processing {}: {}", experiment.file_name, e),
        }
        outcomes.push((experiment.file_name.clone(), outcome));
    }
    outcomes
}


// src/batch.rs
