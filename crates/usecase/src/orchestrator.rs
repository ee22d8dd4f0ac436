use std::path::Path;

use tlocc_domain::{Aggregator, LineTally, RunConfig, tally_lines};
use tlocc_ports::{ProgressSink, ReportWriter, SourceReader, SourceWalker, WalkOutcome};
use tlocc_shared_kernel::{ApplicationError, ErrorContext, Result};
use tracing::debug;

use crate::dto::{RunOutcome, RunStage};

/// Counts every file under the configured roots and writes the report.
pub struct CountLinesOfCode<'a> {
    walker: &'a dyn SourceWalker,
    reader: &'a dyn SourceReader,
    writer: &'a dyn ReportWriter,
    progress: &'a dyn ProgressSink,
}

impl<'a> CountLinesOfCode<'a> {
    pub fn new(
        walker: &'a dyn SourceWalker,
        reader: &'a dyn SourceReader,
        writer: &'a dyn ReportWriter,
        progress: &'a dyn ProgressSink,
    ) -> Self {
        Self {
            walker,
            reader,
            writer,
            progress,
        }
    }

    pub fn run(&self, config: &RunConfig) -> Result<RunOutcome> {
        enter(RunStage::Initializing);
        self.writer.prepare(&config.output_dir)?;
        if !self.walker.exists(&config.source_dir) {
            let missing = ApplicationError::DirectoryMissing {
                role: "Source".into(),
                path: config.source_dir.clone(),
            };
            return Err(missing.into());
        }

        enter(RunStage::Scanning);
        let listing = self.collect_files(config)?;
        for skipped in &listing.skipped {
            self.progress.on_skipped(skipped);
        }

        let mut read_failures = 0usize;
        let files_scanned = listing.files.len();
        let report = Aggregator::aggregate(listing.files.iter().map(|path| {
            let tally = self.count_file(path, config).unwrap_or_else(|err| {
                read_failures += 1;
                self.progress.on_file_error(path, &err);
                LineTally::zero()
            });
            self.progress.on_file(path, tally);
            (path, tally)
        }));

        enter(RunStage::Reporting);
        let report_path = config.report_path();
        self.writer.write_report(&report, &report_path)?;
        self.progress.on_complete(&report, &report_path);

        enter(RunStage::Done);
        Ok(RunOutcome {
            report,
            report_path,
            files_scanned,
            read_failures,
            skipped_entries: listing.skipped.len(),
        })
    }

    fn collect_files(&self, config: &RunConfig) -> Result<WalkOutcome> {
        let mut listing = self.walk_root(&config.source_dir)?;
        if let Some(test_dir) = &config.test_source_dir {
            if self.walker.exists(test_dir) {
                listing.append(self.walk_root(test_dir)?);
            } else {
                let missing = ApplicationError::DirectoryMissing {
                    role: "Test source".into(),
                    path: test_dir.clone(),
                };
                listing.skipped.push(missing.into());
            }
        }
        Ok(listing)
    }

    fn walk_root(&self, root: &Path) -> Result<WalkOutcome> {
        self.walker
            .walk(root)
            .with_context(|| format!("walking {}", root.display()))
    }

    fn count_file(&self, path: &Path, config: &RunConfig) -> Result<LineTally> {
        let text = self.reader.read_text(path)?;
        Ok(tally_lines(&text, config.counting))
    }
}

fn enter(stage: RunStage) {
    debug!(%stage, "entering stage");
}
