use serde::{Deserialize, Serialize};
use tlocc_shared_kernel::LineCount;

/// Empty and total line counts for a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineTally {
    pub empty_lines: LineCount,
    pub total_lines: LineCount,
}

impl LineTally {
    pub const fn zero() -> Self {
        Self {
            empty_lines: LineCount::zero(),
            total_lines: LineCount::zero(),
        }
    }

    pub fn new(empty_lines: impl Into<LineCount>, total_lines: impl Into<LineCount>) -> Self {
        let tally = Self {
            empty_lines: empty_lines.into(),
            total_lines: total_lines.into(),
        };
        debug_assert!(
            tally.empty_lines <= tally.total_lines,
            "more empty lines than lines: {tally:?}"
        );
        tally
    }

    /// Tally one more line.
    #[must_use]
    pub fn with_line(self, blank: bool) -> Self {
        Self {
            empty_lines: if blank {
                self.empty_lines.increment()
            } else {
                self.empty_lines
            },
            total_lines: self.total_lines.increment(),
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.total_lines.is_zero()
    }
}
