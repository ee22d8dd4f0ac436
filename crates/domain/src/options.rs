// crates/domain/src/options.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Line-counting convention.
///
/// `Exact` counts every line. `Legacy` is line based and never tallies the
/// last line of a file, so empty and single-line files both report zero
/// lines. It does not reproduce the token lookahead of the old Maven goal:
/// a file ending in blank lines still has every line but the last tallied
/// here, where the goal stopped at the last non-blank token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountingMode {
    #[default]
    Exact,
    Legacy,
}

impl CountingMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Legacy => "legacy",
        }
    }
}

impl fmt::Display for CountingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
