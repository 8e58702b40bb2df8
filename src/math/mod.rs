//! Numeric utilities: box-constraint transform and covariance estimation.

pub mod bounds;
pub mod covariance;

pub use bounds::*;
pub use covariance::*;
