//! Parameter covariance from the Jacobian at the optimum.
//!
//! Following the usual nonlinear least-squares estimate, the covariance of the
//! fitted parameters is
//!
//! ```text
//! cov = (JᵀJ)⁻¹ · SSE / (m − n)
//! ```
//!
//! where J is the m×n residual Jacobian in *external* (original) parameter
//! space, m the stacked residual count, and n the parameter count. The
//! SSE/(m−n) factor scales the unit-weight covariance by the residual
//! variance, so the quoted standard errors reflect the observed scatter.

use nalgebra::{Dyn, Matrix3, OMatrix, U3};

/// Compute the 3×3 parameter covariance.
///
/// Returns `None` when the problem is degenerate: fewer residuals than
/// parameters, a singular JᵀJ (covariance undefined), or a non-finite result.
pub fn covariance_from_jacobian(jac: &OMatrix<f64, Dyn, U3>, sse: f64) -> Option<Matrix3<f64>> {
    let m = jac.nrows();
    let n = jac.ncols();
    if m <= n {
        return None;
    }

    let jtj: Matrix3<f64> = jac.transpose() * jac;
    let inv = jtj.try_inverse()?;

    let s2 = sse / (m - n) as f64;
    let cov = inv * s2;
    if cov.iter().all(|v| v.is_finite()) {
        Some(cov)
    } else {
        None
    }
}
