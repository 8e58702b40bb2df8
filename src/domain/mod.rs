//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the fitted parameter triple (`CurveParams`) and its box (`ParamBounds`)
//! - the loaded observation set (`Observations`)
//! - run configuration (`FitConfig`) and fit outputs (`FitResult`)

pub mod types;

pub use types::*;
