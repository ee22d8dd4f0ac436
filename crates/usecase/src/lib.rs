//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: the counting run, from directory checks to the report
//! - [`dto`]: data returned across the use case boundary
//!
//! Use cases depend on domain and ports, never on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{RunOutcome, RunStage};
pub use orchestrator::CountLinesOfCode;
