// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::CliCountingMode;

/// Top-level CLI arguments parsed via clap.
///
/// Path and encoding options are optional here so that values from a config
/// file can fill the gaps; defaults are applied in [`crate::Config::resolve`].
#[derive(Parser, Debug, Default)]
#[command(
    name = "tlocc",
    version = crate::VERSION,
    about = "Count total and empty lines per file extension and write tlocc-result.xml"
)]
pub struct Args {
    /// Directory the report is written to [default: target]
    #[arg(
        long,
        env = "TLOCC_OUTPUT_DIR",
        value_hint = ValueHint::DirPath,
        help_heading = "Paths"
    )]
    pub output_dir: Option<PathBuf>,

    /// Main source tree; must exist [default: src/main]
    #[arg(
        long,
        env = "TLOCC_SOURCE_DIR",
        value_hint = ValueHint::DirPath,
        help_heading = "Paths"
    )]
    pub source_dir: Option<PathBuf>,

    /// Test source tree; skipped with a warning when missing [default: src/test]
    #[arg(
        long,
        env = "TLOCC_TEST_SOURCE_DIR",
        value_hint = ValueHint::DirPath,
        help_heading = "Paths"
    )]
    pub test_source_dir: Option<PathBuf>,

    /// Encoding label used to read sources and write the report [default: UTF-8]
    #[arg(long, env = "TLOCC_ENCODING", help_heading = "Counting")]
    pub encoding: Option<String>,

    /// Line-counting convention [default: exact]
    #[arg(long, value_enum, env = "TLOCC_COUNTING", help_heading = "Counting")]
    pub counting: Option<CliCountingMode>,

    /// JSON or YAML file supplying any of the options above
    #[arg(long, env = "TLOCC_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        conflicts_with = "quiet",
        help_heading = "Logging"
    )]
    pub verbose: u8,

    /// Errors only
    #[arg(short, long, help_heading = "Logging")]
    pub quiet: bool,
}
