//! Observation file ingest.

pub mod ingest;

pub use ingest::*;
