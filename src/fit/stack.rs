//! Flatten adapter for joint x+y fitting.
//!
//! The solver minimizes a single residual vector, but the model produces two
//! coupled coordinate sequences. We stack them into one vector of length 2N —
//! all x's first, then all y's, index-aligned to the same t-grid — and fit the
//! stacked observations against the stacked predictions. The stacking lives
//! here at the fitter boundary so the model itself stays a clean two-output
//! function usable for plotting.

use nalgebra::DVector;

/// Stack equal-length x and y sequences into one 2N vector.
///
/// # Panics
/// Panics in debug builds if the lengths differ; callers validate shapes
/// before stacking.
pub fn stack(xs: &[f64], ys: &[f64]) -> DVector<f64> {
    debug_assert_eq!(xs.len(), ys.len());
    let mut out = Vec::with_capacity(xs.len() + ys.len());
    out.extend_from_slice(xs);
    out.extend_from_slice(ys);
    DVector::from_vec(out)
}
