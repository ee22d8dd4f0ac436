use serde::{Deserialize, Serialize};
use tlocc_shared_kernel::{FileCount, LineCount};

use crate::model::LineTally;

/// Accumulated counts for every file sharing one extension.
///
/// Only grows: there is no way to subtract from a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountResult {
    files: FileCount,
    empty_lines: LineCount,
    total_lines: LineCount,
}

impl CountResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_empty(&mut self, lines: LineCount) {
        self.empty_lines += lines;
    }

    pub fn add_total(&mut self, lines: LineCount) {
        self.total_lines += lines;
    }

    pub fn increment_files(&mut self) {
        self.files = self.files.increment();
    }

    /// Fold one file's tally into this bucket.
    pub fn accumulate(&mut self, tally: LineTally) {
        self.add_empty(tally.empty_lines);
        self.add_total(tally.total_lines);
        self.increment_files();
    }

    /// Merge another bucket into this one (used for grand totals).
    pub fn merge(&mut self, other: &CountResult) {
        self.add_empty(other.empty_lines);
        self.add_total(other.total_lines);
        self.files += other.files;
    }

    pub fn files(&self) -> FileCount {
        self.files
    }

    pub fn empty_lines(&self) -> LineCount {
        self.empty_lines
    }

    pub fn total_lines(&self) -> LineCount {
        self.total_lines
    }
}
