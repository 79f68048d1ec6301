//! Domain layer: PRD stub value types
//!
//! This layer has no I/O dependencies.

pub mod entities;

pub use entities::{OutcomeReport, PrdRequest, STUB_CONTENT};
