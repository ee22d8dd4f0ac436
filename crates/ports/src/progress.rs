use std::path::Path;

use tlocc_domain::{ExtensionReport, LineTally};
use tlocc_shared_kernel::TloccError;

pub trait ProgressSink: Send + Sync {
    fn on_file(&self, path: &Path, tally: LineTally);
    fn on_file_error(&self, path: &Path, error: &TloccError);
    fn on_skipped(&self, error: &TloccError);
    fn on_complete(&self, report: &ExtensionReport, destination: &Path);
}
