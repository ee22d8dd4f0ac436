// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod persistence;
pub mod progress;
pub mod report;

pub use filesystem::TreeWalker;
pub use persistence::{DecodingReader, FileWriter, resolve_encoding};
pub use progress::TracingProgress;
pub use report::XmlReportWriter;
