//! Result formatting.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized
//!
//! Three pieces: a short run summary, the parameter estimates with their
//! one-standard-deviation uncertainties, and a Desmos-ready single-line
//! parametric expression of the fitted curve.

use crate::domain::FitResult;

/// Format the run summary (dataset size + fit diagnostics).
pub fn format_run_summary(result: &FitResult) -> String {
    let mut out = String::new();
    out.push_str("=== ripplefit - parametric curve fit ===\n");
    out.push_str(&format!(
        "Points: n={} | residuals: 2N={}\n",
        result.n_obs,
        2 * result.n_obs
    ));
    out.push_str(&format!(
        "Fit: SSE={:.6e} RMSE={:.6e} | {} residual evaluations\n",
        result.sse, result.rmse, result.n_evaluations
    ));
    out
}

/// Format the three estimate lines, four decimals, ± one standard deviation.
pub fn format_estimates(result: &FitResult) -> String {
    let p = &result.params;
    let se = &result.std_errs;

    let mut out = String::new();
    out.push_str("Estimated Parameters:\n");
    out.push_str(&format!(
        "Theta (°): {:.4} ± {:.4}\n",
        p.theta_deg, se[0]
    ));
    out.push_str(&format!("M: {:.4} ± {:.4}\n", p.rate, se[1]));
    out.push_str(&format!("X: {:.4} ± {:.4}\n", p.offset, se[2]));
    out
}

/// Format the fitted curve as a single parametric expression.
///
/// The line can be pasted into a graphing tool as-is: θ appears in radians at
/// six decimals, M and X at four, and the curve's t-domain is annotated.
pub fn format_desmos(result: &FitResult) -> String {
    let theta = result.params.theta_rad();
    let m = result.params.rate;
    let x = result.params.offset;

    let mut out = String::new();
    out.push_str("Desmos format:\n");
    out.push_str(&format!(
        "( (t*cos({theta:.6})-e^({m:.4}*t)*sin(0.3*t)*sin({theta:.6}))+{x:.4} , \
         42+t*sin({theta:.6})+e^({m:.4}*t)*sin(0.3*t)*cos({theta:.6}) ), 6<t<60 )\n"
    ));
    out
}
