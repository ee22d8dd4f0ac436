// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};
use tlocc_ports::filesystem::{SourceWalker, WalkOutcome};
use tlocc_shared_kernel::{InfrastructureError, Result, TloccError};
use tracing::trace;

/// Filesystem adapter implementing the `SourceWalker` port.
///
/// Every regular file is reported: no ignore files, hidden-file or VCS
/// filtering is applied. Symlinks are followed; loops end up in
/// [`WalkOutcome::skipped`].
#[derive(Debug, Default)]
pub struct TreeWalker;

impl TreeWalker {
    pub fn new() -> Self {
        Self
    }
}

impl SourceWalker for TreeWalker {
    fn exists(&self, root: &Path) -> bool {
        root.exists()
    }

    fn walk(&self, root: &Path) -> Result<WalkOutcome> {
        if root.is_file() {
            return Ok(WalkOutcome::single(root.to_path_buf()));
        }
        Ok(walk_tree(root))
    }
}

fn walk_tree(root: &Path) -> WalkOutcome {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(true)
        .build();

    let mut outcome = WalkOutcome::default();
    for result in walker {
        match result {
            Ok(entry) if is_regular_file(&entry) => {
                trace!(path = %entry.path().display(), "found file");
                outcome.files.push(entry.into_path());
            }
            Ok(_) => {}
            Err(err) => outcome.skipped.push(to_skip_error(root, &err)),
        }
    }
    outcome
}

fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_file())
}

fn to_skip_error(root: &Path, err: &ignore::Error) -> TloccError {
    let path = error_path(err).unwrap_or_else(|| root.to_path_buf());
    InfrastructureError::DirectoryListFailed {
        path,
        reason: err.to_string(),
    }
    .into()
}

fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        ignore::Error::Partial(errs) => errs.iter().find_map(error_path),
        _ => None,
    }
}
