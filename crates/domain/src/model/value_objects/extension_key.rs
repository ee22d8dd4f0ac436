use std::{borrow::Borrow, fmt, path::Path};

use serde::{Deserialize, Serialize};

/// Bucket key grouping files by extension.
///
/// The key is the path's suffix starting at its last `.` (dot included), or
/// [`ExtensionKey::UNDEFINED`] when the path has no dot at all. The whole
/// path is searched, so a dot in a parent directory is picked up when the
/// file name itself has none: `config.d/Makefile` keys on `.d/Makefile`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionKey(String);

impl ExtensionKey {
    pub const UNDEFINED: &'static str = "undefined";

    pub fn undefined() -> Self {
        Self(Self::UNDEFINED.to_string())
    }

    pub fn from_path(path: &Path) -> Self {
        Self::from_path_str(&path.to_string_lossy())
    }

    pub fn from_path_str(path: &str) -> Self {
        match path.rfind('.') {
            Some(pos) => Self(path[pos..].to_string()),
            None => Self::undefined(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_undefined(&self) -> bool {
        self.0 == Self::UNDEFINED
    }
}

impl fmt::Display for ExtensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ExtensionKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}
