// tests/common/mod.rs
//! Shared helpers for the binary tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use tempfile::TempDir;

const ENV_VARS: [&str; 7] = [
    "TLOCC_OUTPUT_DIR",
    "TLOCC_SOURCE_DIR",
    "TLOCC_TEST_SOURCE_DIR",
    "TLOCC_ENCODING",
    "TLOCC_COUNTING",
    "TLOCC_CONFIG",
    "RUST_LOG",
];

/// A throwaway project directory laid out like a Maven module.
#[derive(Debug)]
pub struct Project {
    dir: TempDir,
}

#[allow(dead_code)]
impl Project {
    pub fn new() -> Self {
        let dir = tempfile::Builder::new()
            .prefix("tlocc")
            .tempdir()
            .expect("tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("mkdir");
        }
        fs::write(&path, contents).expect("write");
        path
    }

    /// `tlocc` running inside the project with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tlocc"));
        cmd.current_dir(self.dir.path());
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    pub fn report_path(&self) -> PathBuf {
        self.dir.path().join("target").join("tlocc-result.xml")
    }

    pub fn report(&self) -> String {
        fs::read_to_string(self.report_path()).expect("report written")
    }
}

/// Report text with all whitespace removed, for layout-independent matching.
#[allow(dead_code)]
pub fn compact(xml: &str) -> String {
    xml.chars().filter(|c| !c.is_whitespace()).collect()
}

/// One `<entry>` as it appears in [`compact`] output.
#[allow(dead_code)]
pub fn entry(ext: &str, files: usize, empty: usize, total: usize) -> String {
    format!(
        "<entry><string>{ext}</string><data><files>{files}</files><emptyLines>{empty}</emptyLines>\
         <totalLines>{total}</totalLines></data></entry>"
    )
}
