//! Plot rendering: SVG overlay plot and an ASCII terminal preview.

pub mod ascii;
pub mod svg;

pub use ascii::*;
pub use svg::*;

use crate::domain::Observations;

/// Joint axis bounds over the observed points and the fitted curve samples.
///
/// Returns `None` when there is nothing finite to plot.
pub(crate) fn joint_bounds(
    observations: &Observations,
    curve: &[(f64, f64)],
) -> Option<((f64, f64), (f64, f64))> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    let points = observations
        .xs
        .iter()
        .zip(observations.ys.iter())
        .map(|(&x, &y)| (x, y))
        .chain(curve.iter().copied());

    for (x, y) in points {
        if !(x.is_finite() && y.is_finite()) {
            continue;
        }
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite() {
        Some(((x_min, x_max), (y_min, y_max)))
    } else {
        None
    }
}

/// Widen a range by `frac` on each side; degenerate ranges get a unit span.
pub(crate) fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = max - min;
    if span <= 0.0 {
        return (min - 0.5, max + 0.5);
    }
    (min - span * frac, max + span * frac)
}
