//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads the observation CSV
//! - runs the bounded curve fit
//! - prints the report (estimates, Desmos line, terminal preview)
//! - writes the SVG overlay plot
//!
//! The tool takes no arguments: it reads `xy_data.csv` from the working
//! directory and writes `fit.svg` next to it.

use crate::domain::FitConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `ripplefit` binary.
pub fn run() -> Result<(), AppError> {
    let config = FitConfig::default();
    let run = pipeline::run_fit(&config)?;

    print!("{}", crate::report::format_run_summary(&run.result));
    println!();
    print!("{}", crate::report::format_estimates(&run.result));
    println!();
    print!("{}", crate::report::format_desmos(&run.result));
    println!();
    print!(
        "{}",
        crate::plot::render_preview(
            &run.observations,
            &run.curve,
            config.preview_width,
            config.preview_height,
        )
    );

    crate::plot::render_svg_plot(&config.plot_path, &run.observations, &run.curve)?;
    println!("Wrote overlay plot to {}", config.plot_path.display());

    Ok(())
}
