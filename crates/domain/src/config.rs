use std::path::PathBuf;

use crate::options::CountingMode;

/// File name of the generated report inside the output directory.
pub const REPORT_FILE_NAME: &str = "tlocc-result.xml";

/// Directories and counting convention for one run.
///
/// The text encoding is resolved separately by the adapters that need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub output_dir: PathBuf,
    pub source_dir: PathBuf,
    pub test_source_dir: Option<PathBuf>,
    pub counting: CountingMode,
}

impl RunConfig {
    pub fn new(output_dir: impl Into<PathBuf>, source_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            source_dir: source_dir.into(),
            test_source_dir: None,
            counting: CountingMode::default(),
        }
    }

    #[must_use]
    pub fn with_test_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.test_source_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn with_counting(mut self, counting: CountingMode) -> Self {
        self.counting = counting;
        self
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(REPORT_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn report_lands_in_output_dir() {
        let config = RunConfig::new("target", "src/main");
        assert_eq!(
            config.report_path(),
            Path::new("target").join("tlocc-result.xml")
        );
    }

    #[test]
    fn builders_fill_optional_fields() {
        let config = RunConfig::new("target", "src/main")
            .with_test_source_dir("src/test")
            .with_counting(CountingMode::Legacy);
        assert_eq!(config.test_source_dir, Some(PathBuf::from("src/test")));
        assert_eq!(config.counting, CountingMode::Legacy);
    }

    #[test]
    fn defaults_count_every_line_without_tests() {
        let config = RunConfig::new("target", "src");
        assert_eq!(config.test_source_dir, None);
        assert_eq!(config.counting, CountingMode::Exact);
    }
}
