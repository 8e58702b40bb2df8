//! The parametric curve model.
//!
//! The fitter and the plot layer rely on two primitive operations:
//! - evaluate (x(t), y(t)) for a parameter triple (for residuals/plots)
//! - evaluate the partial derivatives wrt the parameters (for the Jacobian)
//!
//! Both are implemented here as pure functions.

pub mod curve;

pub use curve::*;
