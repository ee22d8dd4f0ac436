pub mod entities;
pub mod value_objects;

pub use entities::CountResult;
pub use value_objects::{ExtensionKey, LineTally};
