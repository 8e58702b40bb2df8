//! t-grid generation.
//!
//! The observation file carries no t column; row i is assumed to correspond to
//! the i-th of N evenly spaced samples spanning [6, 60] inclusive. This
//! mirrors how the dataset was produced, but it is an assumption about row
//! ordering, not something the file format guarantees.

use crate::domain::{T_MAX, T_MIN};

/// N evenly spaced samples over the curve's t-domain, endpoints included.
pub fn t_grid(n: usize) -> Vec<f64> {
    linspace(T_MIN, T_MAX, n)
}

/// Evenly spaced samples over [a, b], endpoints included for `n >= 2`.
pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![a],
        _ => {
            let step = (b - a) / (n - 1) as f64;
            (0..n).map(|i| a + step * i as f64).collect()
        }
    }
}
