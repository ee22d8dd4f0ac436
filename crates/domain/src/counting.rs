//! Line tallying over decoded file contents.
//!
//! Lines are split on `\n` and `\r\n`; a trailing terminator does not start an
//! extra line. A line is empty when nothing but whitespace remains after
//! trimming.

use crate::{model::LineTally, options::CountingMode};

const BOM: char = '\u{feff}';

/// Count total and empty lines of `text` under `mode`.
pub fn tally_lines(text: &str, mode: CountingMode) -> LineTally {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    match mode {
        CountingMode::Exact => tally_exact(text.lines()),
        CountingMode::Legacy => tally_legacy(text.lines()),
    }
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn tally_exact<'a>(lines: impl Iterator<Item = &'a str>) -> LineTally {
    lines.fold(LineTally::zero(), |tally, line| {
        tally.with_line(is_blank(line))
    })
}

// The previous line is tallied only once a further line is known to exist.
fn tally_legacy<'a>(mut lines: impl Iterator<Item = &'a str>) -> LineTally {
    let mut tally = LineTally::zero();
    let Some(mut previous) = lines.next() else {
        return tally;
    };
    for line in lines {
        tally = tally.with_line(is_blank(previous));
        previous = line;
    }
    tally
}
