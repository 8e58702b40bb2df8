//! Curve fitting.
//!
//! Responsibilities:
//!
//! - generate the t-grid the observations are assumed to follow
//! - stack the two coordinate sequences into one joint residual vector
//! - run the bounded Levenberg–Marquardt fit and derive the covariance

pub mod fitter;
pub mod problem;
pub mod stack;
pub mod t_grid;

pub use fitter::*;
pub use stack::*;
pub use t_grid::*;
