use std::path::{Path, PathBuf};

use tlocc_shared_kernel::{Result, TloccError};

/// Files found under one root plus the entries that had to be skipped.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    pub files: Vec<PathBuf>,
    /// Recoverable per-directory failures, in the order they were hit.
    pub skipped: Vec<TloccError>,
}

impl WalkOutcome {
    pub fn single(path: PathBuf) -> Self {
        Self {
            files: vec![path],
            skipped: Vec::new(),
        }
    }

    pub fn append(&mut self, mut other: WalkOutcome) {
        self.files.append(&mut other.files);
        self.skipped.append(&mut other.skipped);
    }
}

/// Port for enumerating every regular file below a root.
pub trait SourceWalker: Send + Sync {
    fn exists(&self, root: &Path) -> bool;

    /// Directories are descended into, never listed. A root that is itself a
    /// file yields just that file. Order follows the directory listing.
    fn walk(&self, root: &Path) -> Result<WalkOutcome>;
}

/// Port for reading one source file as text in the configured encoding.
pub trait SourceReader: Send + Sync {
    fn read_text(&self, path: &Path) -> Result<String>;
}
