//! Bounded nonlinear least-squares fit.
//!
//! Given:
//! - the t-grid `t_i`
//! - observed coordinates `(x_i, y_i)`
//! - an initial guess and box constraints
//!
//! we minimize the stacked sum-of-squares residual with Levenberg–Marquardt
//! and derive the parameter covariance from the Jacobian at the optimum.
//!
//! Failures are terminal: shape mismatches, an infeasible initial guess,
//! solver non-convergence, and a singular Jacobian all surface as errors.
//! No retry with alternate starting points is performed.

use levenberg_marquardt::LevenbergMarquardt;
use nalgebra::{Dyn, OMatrix, U3};

use crate::domain::{CurveParams, FitResult, Observations, ParamBounds};
use crate::error::AppError;
use crate::fit::problem::CurveProblem;
use crate::fit::stack::stack;
use crate::math::{BoundedTransform, covariance_from_jacobian};
use crate::model;

/// Fit the curve parameters to the observed point cloud.
pub fn fit(
    ts: &[f64],
    observations: &Observations,
    initial_guess: CurveParams,
    bounds: ParamBounds,
) -> Result<FitResult, AppError> {
    let n = observations.len();
    if n == 0 {
        return Err(AppError::data("No observations to fit."));
    }
    if observations.xs.len() != observations.ys.len() {
        return Err(AppError::data(format!(
            "Observation columns have different lengths: {} x values vs {} y values.",
            observations.xs.len(),
            observations.ys.len()
        )));
    }
    if ts.len() != n {
        return Err(AppError::data(format!(
            "Shape mismatch: {n} observations vs {} t samples.",
            ts.len()
        )));
    }
    // Three parameters against 2N stacked residuals.
    if 2 * n <= 3 {
        return Err(AppError::data(
            "Need at least 2 observation rows to fit 3 parameters.",
        ));
    }

    let transform = BoundedTransform::new(&bounds);
    let u0 = transform.to_internal(&initial_guess.to_vector()).ok_or_else(|| {
        AppError::fit("Initial guess lies outside the parameter bounds; cannot start the fit.")
    })?;

    let observed = stack(&observations.xs, &observations.ys);
    let problem = CurveProblem {
        ts: ts.to_vec(),
        observed: observed.clone(),
        transform,
        u: u0,
    };

    let (solved, report) = LevenbergMarquardt::new().minimize(problem);
    if !report.termination.was_successful() {
        return Err(AppError::fit(format!(
            "Fit did not converge: {:?}.",
            report.termination
        )));
    }

    let params = solved.external_params();
    if !params.is_finite() {
        return Err(AppError::fit("Solver returned non-finite parameters."));
    }

    // Residuals and Jacobian in external parameter space at the optimum; the
    // covariance is quoted for the original parameters, not the internal
    // coordinates the solver iterated over.
    let (xs, ys) = model::evaluate_grid(&params, ts);
    let residual = stack(&xs, &ys) - &observed;
    let sse = residual.norm_squared();
    if !sse.is_finite() {
        return Err(AppError::fit("Non-finite residual at the fitted optimum."));
    }

    let m = 2 * n;
    let mut jac = OMatrix::<f64, Dyn, U3>::zeros(m);
    for (i, &t) in ts.iter().enumerate() {
        let d = model::partials(&params, t);
        for j in 0..3 {
            jac[(i, j)] = d.dx[j];
            jac[(n + i, j)] = d.dy[j];
        }
    }

    let covariance = covariance_from_jacobian(&jac, sse).ok_or_else(|| {
        AppError::fit("Covariance undefined: singular Jacobian at the fitted optimum.")
    })?;

    let std_errs = [
        covariance[(0, 0)].sqrt(),
        covariance[(1, 1)].sqrt(),
        covariance[(2, 2)].sqrt(),
    ];
    if std_errs.iter().any(|v| !v.is_finite()) {
        return Err(AppError::fit(
            "Covariance undefined: negative variance estimate at the optimum.",
        ));
    }

    Ok(FitResult {
        params,
        covariance,
        std_errs,
        sse,
        rmse: (sse / m as f64).sqrt(),
        n_obs: n,
        n_evaluations: report.number_of_evaluations,
    })
}
