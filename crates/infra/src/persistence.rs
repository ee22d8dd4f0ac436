pub mod file_reader;
pub mod file_writer;

pub use file_reader::{DecodingReader, resolve_encoding};
pub use file_writer::FileWriter;
