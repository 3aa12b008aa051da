use anyhow::{Context, Result};
use log::trace;
use std::fs;
use std::path::Path;

use crate::line_comparison::LineComparison;

/// Count the lines that differ by position between two files.
///
/// Both files are read in full for this call only; nothing is cached between
/// calls. A missing, unreadable or non-UTF-8 file is an error.
pub fn count_diff_lines<P: AsRef<Path>, Q: AsRef<Path>>(old_path: P, new_path: Q) -> Result<usize> {
    let old_text = read_text(old_path.as_ref())?;
    let new_text = read_text(new_path.as_ref())?;

    Ok(count_diff_lines_in_text(&old_text, &new_text))
}

/// Count the lines that differ by position between two texts
pub fn count_diff_lines_in_text(old_text: &str, new_text: &str) -> usize {
    LineComparison::new(old_text, new_text).diff_count()
}

/// Split text into lines, keeping each line's terminator.
///
/// `\n`, `\r\n` and a lone `\r` each end a line, as in a text-mode read. A
/// trailing line without a terminator is still a line. Empty text has no lines.
pub fn read_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let end = match bytes[i] {
            b'\n' => Some(i),
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => Some(i + 1),
            b'\r' => Some(i),
            _ => None,
        };
        if let Some(end) = end {
            lines.push(&text[start..=end]);
            start = end + 1;
            i = end;
        }
        i += 1;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Strip exactly one trailing line terminator (`\r\n`, `\n` or `\r`)
pub fn trim_line(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .or_else(|| line.strip_suffix('\r'))
        .unwrap_or(line)
}

fn read_text(path: &Path) -> Result<String> {
    trace!("Reading {}", path.display());
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
