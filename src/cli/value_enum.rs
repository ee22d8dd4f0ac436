use clap::ValueEnum;
use tlocc_domain::CountingMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliCountingMode {
    /// Every line is counted
    Exact,
    /// Every line but the last is counted, trailing blank lines included
    ///
    /// Older token-based releases stopped at the last non-blank line, so
    /// files ending in blank lines report more lines here.
    Legacy,
}

impl From<CliCountingMode> for CountingMode {
    fn from(value: CliCountingMode) -> Self {
        match value {
            CliCountingMode::Exact => CountingMode::Exact,
            CliCountingMode::Legacy => CountingMode::Legacy,
        }
    }
}
