pub mod extension_key;
pub mod line_tally;

pub use extension_key::ExtensionKey;
pub use line_tally::LineTally;
