#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod counting;
pub mod model;
pub mod options;

pub use analytics::{Aggregator, ExtensionReport};
pub use config::{REPORT_FILE_NAME, RunConfig};
pub use counting::{is_blank, tally_lines};
pub use model::{CountResult, ExtensionKey, LineTally};
pub use options::CountingMode;
