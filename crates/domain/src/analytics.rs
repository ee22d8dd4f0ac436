pub mod aggregate;

pub use aggregate::{Aggregator, ExtensionReport};
