//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: directory traversal and decoding source files to text
//! - [`report`]: preparing the output directory and persisting the report
//! - [`progress`]: per-file and end-of-run notifications
//!
//! These ports keep the counting use case independent of the filesystem,
//! the XML writer and the logging backend.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod progress;
pub mod report;

pub use filesystem::{SourceReader, SourceWalker, WalkOutcome};
pub use progress::ProgressSink;
pub use report::ReportWriter;
