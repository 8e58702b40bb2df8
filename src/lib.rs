//! `ripple-fit` library crate.
//!
//! The binary (`ripplefit`) is a thin wrapper around this library so that:
//!
//! - core logic (model, fitter, ingest) is testable without spawning processes
//! - each pipeline step is independently callable (no module-level execution)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod model;
pub mod plot;
pub mod report;
