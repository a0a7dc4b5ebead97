// src/main.rs

use chrono::Local;
use log::warn;
use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use gapscan_csv_render::batch::{default_experiments, run_batch};
use gapscan_csv_render::plot_framework::StyleConfig;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input_dir> [output_dir]", args[0]);
        std::process::exit(1);
    }
    let input_dir = PathBuf::from(&args[1]);

    let requested_output_dir = match args.get(2) {
        Some(dir) => PathBuf::from(dir),
        None => input_dir.join(format!(
            "analysis_results_{}",
            Local::now().format("%Y%m%d_%H%M")
        )),
    };
    let output_dir = match fs::create_dir_all(&requested_output_dir) {
        Ok(()) => requested_output_dir,
        Err(e) => {
            warn!(
                "could not create output directory '{}': {}; writing into input directory",
                requested_output_dir.display(),
                e
            );
            input_dir.clone()
        }
    };

    let experiments = default_experiments();
    let style = StyleConfig::default();
    let outcomes = run_batch(&input_dir, &experiments, &output_dir, &style);

    let rendered = outcomes.iter().filter(|(_, r)| r.is_ok()).count();
    let failed = outcomes.len() - rendered;
    println!("\nBatch finished: {rendered} rendered, {failed} failed.");

    Ok(())
}

// src/main.rs
