use std::path::Path;

use tlocc_domain::ExtensionReport;
use tlocc_shared_kernel::Result;

/// Port for persisting the aggregate report.
pub trait ReportWriter: Send + Sync {
    /// Create `output_dir` (with parents) unless it already exists.
    fn prepare(&self, output_dir: &Path) -> Result<()>;

    fn write_report(&self, report: &ExtensionReport, destination: &Path) -> Result<()>;
}
