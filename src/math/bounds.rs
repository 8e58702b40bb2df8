//! Bounded ↔ unbounded parameter transform.
//!
//! The Levenberg–Marquardt solver we use is unconstrained, so box constraints
//! are imposed by reparameterizing each bounded parameter p ∈ [lo, hi] through
//! an internal free parameter u:
//!
//! ```text
//! p(u) = lo + (hi − lo) · (sin(u) + 1) / 2
//! ```
//!
//! This is the MINUIT/lmfit convention: p(u) covers exactly [lo, hi] for all
//! real u, so every point the solver visits is feasible. The Jacobian of a
//! residual wrt u is the external-space Jacobian times `dp/du` per axis
//! (chain rule), which `scale` provides.
//!
//! Near a bound `dp/du → 0`, so a parameter pinned at a bound stops moving;
//! that matches how the reference optimizers behave there.

use nalgebra::Vector3;

use crate::domain::ParamBounds;

#[derive(Debug, Clone)]
pub struct BoundedTransform {
    lo: Vector3<f64>,
    hi: Vector3<f64>,
}

impl BoundedTransform {
    pub fn new(bounds: &ParamBounds) -> Self {
        Self {
            lo: bounds.lo.to_vector(),
            hi: bounds.hi.to_vector(),
        }
    }

    /// Map a feasible external point into internal coordinates.
    ///
    /// Returns `None` if any component lies outside its [lo, hi] interval
    /// (the solver must not be started from an infeasible point).
    pub fn to_internal(&self, p: &Vector3<f64>) -> Option<Vector3<f64>> {
        let mut u = Vector3::zeros();
        for i in 0..3 {
            let span = self.hi[i] - self.lo[i];
            let z = 2.0 * (p[i] - self.lo[i]) / span - 1.0;
            if !(-1.0..=1.0).contains(&z) {
                return None;
            }
            u[i] = z.asin();
        }
        Some(u)
    }

    /// Map internal coordinates back to the external box.
    pub fn to_external(&self, u: &Vector3<f64>) -> Vector3<f64> {
        let mut p = Vector3::zeros();
        for i in 0..3 {
            let span = self.hi[i] - self.lo[i];
            p[i] = self.lo[i] + span * (u[i].sin() + 1.0) / 2.0;
        }
        p
    }

    /// Per-axis `dp/du` at the given internal point.
    pub fn scale(&self, u: &Vector3<f64>) -> Vector3<f64> {
        let mut s = Vector3::zeros();
        for i in 0..3 {
            s[i] = (self.hi[i] - self.lo[i]) / 2.0 * u[i].cos();
        }
        s
    }
}
