use std::path::Path;

use encoding_rs::Encoding;
use tlocc_ports::filesystem::SourceReader;
use tlocc_shared_kernel::{DomainError, DomainResult, InfrastructureError, ReadFailure, Result};

/// Look up a WHATWG encoding label (`UTF-8`, `latin1`, `Shift_JIS`, ...).
pub fn resolve_encoding(label: &str) -> DomainResult<&'static Encoding> {
    let encoding = Encoding::for_label(label.trim().as_bytes());
    encoding.ok_or_else(|| DomainError::UnknownEncoding {
        label: label.to_string(),
    })
}

/// Reads source files and decodes them strictly in one encoding.
///
/// A leading byte-order mark is dropped. Malformed input is an error rather
/// than being replaced with U+FFFD.
#[derive(Debug, Clone, Copy)]
pub struct DecodingReader {
    encoding: &'static Encoding,
}

impl DecodingReader {
    pub fn new(encoding: &'static Encoding) -> Self {
        Self { encoding }
    }

    /// Read the entire file into memory.
    pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
        std::fs::read(path).map_err(|source| {
            InfrastructureError::FileReadFailed {
                path: path.to_path_buf(),
                source: ReadFailure::Io(source),
            }
            .into()
        })
    }

    pub fn decode(&self, path: &Path, bytes: &[u8]) -> Result<String> {
        let (text, had_errors) = self.encoding.decode_with_bom_removal(bytes);
        if had_errors {
            let encoding = self.encoding.name().to_string();
            return Err(InfrastructureError::FileReadFailed {
                path: path.to_path_buf(),
                source: ReadFailure::Decode { encoding },
            }
            .into());
        }
        Ok(text.into_owned())
    }
}

impl Default for DecodingReader {
    fn default() -> Self {
        Self::new(encoding_rs::UTF_8)
    }
}

impl SourceReader for DecodingReader {
    fn read_text(&self, path: &Path) -> Result<String> {
        let bytes = Self::read_bytes(path)?;
        self.decode(path, &bytes)
    }
}
