// src/config.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use encoding_rs::Encoding;
use serde::Deserialize;
use tlocc_domain::{CountingMode, RunConfig};
use tlocc_infra::resolve_encoding;
use tlocc_shared_kernel::{
    DomainError, PresentationError, Result, TloccError, path::logical_absolute,
};

use crate::cli::Args;

pub const DEFAULT_OUTPUT_DIR: &str = "target";
pub const DEFAULT_SOURCE_DIR: &str = "src/main";
pub const DEFAULT_TEST_SOURCE_DIR: &str = "src/test";
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Options read from `--config`. Keys use the Maven parameter names.
///
/// ```json
/// { "sourceDirectory": "src", "encoding": "latin1", "counting": "legacy" }
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FileConfig {
    pub output_directory: Option<PathBuf>,
    pub source_directory: Option<PathBuf>,
    pub test_source_directory: Option<PathBuf>,
    pub encoding: Option<String>,
    pub counting: Option<CountingMode>,
}

impl FileConfig {
    /// Read and parse a config file. `.yaml`/`.yml` files are YAML, anything
    /// else is JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|err| load_failed(path, err.to_string()))?;
        Self::parse(path, &text)
    }

    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let parsed = if is_yaml(path) {
            serde_yaml::from_str(text).map_err(|err| err.to_string())
        } else {
            serde_json::from_str(text).map_err(|err| err.to_string())
        };
        parsed.map_err(|reason| load_failed(path, reason))
    }
}

fn is_yaml(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml")
}

fn load_failed(path: &Path, reason: String) -> TloccError {
    PresentationError::ConfigLoadFailed {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}

/// Resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub run: RunConfig,
    pub encoding: &'static Encoding,
}

impl Config {
    /// Combine CLI/env values, the optional config file and defaults, in
    /// that order of precedence.
    pub fn resolve(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(args, file)
    }

    pub fn merge(args: &Args, file: FileConfig) -> Result<Self> {
        let output_dir = args.output_dir.clone().or(file.output_directory);
        let output_dir = directory("output", output_dir, DEFAULT_OUTPUT_DIR)?;
        let source_dir = args.source_dir.clone().or(file.source_directory);
        let source_dir = directory("source", source_dir, DEFAULT_SOURCE_DIR)?;
        let test_source_dir = args.test_source_dir.clone().or(file.test_source_directory);
        let test_source_dir = directory("test source", test_source_dir, DEFAULT_TEST_SOURCE_DIR)?;

        let label = args.encoding.clone().or(file.encoding);
        let encoding = resolve_encoding(label.as_deref().unwrap_or(DEFAULT_ENCODING))?;
        let counting = args.counting.map(CountingMode::from).or(file.counting);

        let run = RunConfig::new(output_dir, source_dir)
            .with_test_source_dir(test_source_dir)
            .with_counting(counting.unwrap_or_default());
        Ok(Self { run, encoding })
    }
}

/// Apply the default and reject an empty path, then anchor it to the
/// working directory.
fn directory(name: &str, dir: Option<PathBuf>, default: &str) -> Result<PathBuf> {
    let dir = dir.unwrap_or_else(|| PathBuf::from(default));
    if dir.as_os_str().is_empty() {
        let reason = format!("{name} directory is empty");
        return Err(DomainError::InvalidConfiguration { reason }.into());
    }
    Ok(logical_absolute(&dir))
}
