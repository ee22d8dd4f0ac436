use std::path::Path;

use tlocc_domain::{ExtensionReport, LineTally};
use tlocc_ports::progress::ProgressSink;
use tlocc_shared_kernel::TloccError;
use tracing::{error, info, warn};

/// Reports progress through `tracing`.
///
/// Per-file lines are `<emptyLines>\t<totalLines>\t<path>` at INFO level.
#[derive(Debug, Default)]
pub struct TracingProgress;

impl TracingProgress {
    pub fn new() -> Self {
        Self
    }
}

/// Tab-separated per-file line, without trailing newline.
pub fn format_file_line(path: &Path, tally: LineTally) -> String {
    let (empty, total) = (tally.empty_lines, tally.total_lines);
    format!("{empty}\t{total}\t{}", path.display())
}

impl ProgressSink for TracingProgress {
    fn on_file(&self, path: &Path, tally: LineTally) {
        info!("{}", format_file_line(path, tally));
    }

    fn on_file_error(&self, _path: &Path, error: &TloccError) {
        error!("{error}");
    }

    fn on_skipped(&self, error: &TloccError) {
        warn!("skipping: {error}");
    }

    fn on_complete(&self, report: &ExtensionReport, destination: &Path) {
        let totals = report.totals();
        info!(
            files = totals.files().value(),
            total_lines = totals.total_lines().value(),
            empty_lines = totals.empty_lines().value(),
            extensions = report.len(),
            "wrote {}",
            destination.display()
        );
    }
}
