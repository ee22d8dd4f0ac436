use std::{fmt, path::PathBuf};

use tlocc_domain::ExtensionReport;

/// Phases of a run. A run only ever moves forward through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    Initializing,
    Scanning,
    Reporting,
    Done,
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Initializing => "initializing",
            Self::Scanning => "scanning",
            Self::Reporting => "reporting",
            Self::Done => "done",
        };
        f.write_str(label)
    }
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub report: ExtensionReport,
    pub report_path: PathBuf,
    pub files_scanned: usize,
    pub read_failures: usize,
    pub skipped_entries: usize,
}
