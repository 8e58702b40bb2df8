//! Shared "fit pipeline" logic.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load -> t-grid -> fit -> fitted-curve sampling
//!
//! The app layer then focuses purely on presentation (printing and files).
//! Each step is an ordinary function call; there is no process-wide state.

use crate::domain::{FitConfig, FitResult, Observations, T_MAX, T_MIN};
use crate::error::AppError;
use crate::fit::{fit, linspace, t_grid};
use crate::model;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub observations: Observations,
    /// The t sample assumed for each observation row.
    pub t_grid: Vec<f64>,
    pub result: FitResult,
    /// Fitted curve sampled densely over the t-domain, for plotting.
    pub curve: Vec<(f64, f64)>,
}

/// Execute the full fitting pipeline and return the computed outputs.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    // 1) Load observations; the row count fixes the t-grid resolution.
    let observations = crate::io::load_observations(&config.csv_path)?;

    // 2) Generate the t samples the rows are assumed to follow.
    let ts = t_grid(observations.len());

    // 3) Bounded nonlinear least-squares fit.
    let result = fit(&ts, &observations, config.initial_guess, config.bounds)?;

    // 4) Dense fitted-curve sampling for presentation.
    let curve = sample_curve(&result, config.curve_samples);

    Ok(RunOutput {
        observations,
        t_grid: ts,
        result,
        curve,
    })
}

/// Sample the fitted curve over the t-domain for plotting.
pub fn sample_curve(result: &FitResult, n: usize) -> Vec<(f64, f64)> {
    linspace(T_MIN, T_MAX, n.max(2))
        .into_iter()
        .map(|t| model::evaluate(&result.params, t))
        .collect()
}
