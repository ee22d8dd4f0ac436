// src/app.rs
use anyhow::{Context, Result};
use tlocc_infra::{DecodingReader, TracingProgress, TreeWalker, XmlReportWriter};
use tlocc_usecase::{CountLinesOfCode, RunOutcome};
use tracing::{debug, warn};

use crate::config::Config;

/// Wire the filesystem adapters into the use case and run it once.
pub fn run(config: &Config) -> Result<RunOutcome> {
    let settings = &config.run;
    debug!(
        version = crate::VERSION,
        source = %settings.source_dir.display(),
        output = %settings.output_dir.display(),
        encoding = config.encoding.name(),
        counting = %settings.counting,
        "starting tlocc"
    );

    let walker = TreeWalker::new();
    let reader = DecodingReader::new(config.encoding);
    let writer = XmlReportWriter::new(config.encoding);
    let progress = TracingProgress::new();

    let outcome = CountLinesOfCode::new(&walker, &reader, &writer, &progress)
        .run(settings)
        .context("line count failed")?;

    if outcome.read_failures > 0 {
        warn!(
            failures = outcome.read_failures,
            "some files could not be read and were counted as empty"
        );
    }
    Ok(outcome)
}
