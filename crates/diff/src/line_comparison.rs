#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::line_count::{read_lines, trim_line};

/// The outcome of comparing two texts line by line, by position
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineComparison {
    /// The number of lines in the old text
    pub old_line_count: usize,

    /// The number of lines in the new text
    pub new_line_count: usize,

    /// Indices (0-based) at which the trimmed lines differ
    pub differing_lines: Vec<usize>,
}

impl LineComparison {
    /// Compare two texts position by position.
    ///
    /// The shorter text is padded with empty lines up to the length of the
    /// longer one, so shifted content is never realigned.
    pub fn new(old_text: &str, new_text: &str) -> Self {
        let old_lines = read_lines(old_text);
        let new_lines = read_lines(new_text);
        let max_len = old_lines.len().max(new_lines.len());

        let differing_lines = (0..max_len)
            .filter(|&i| {
                let old_line = old_lines.get(i).map_or("", |line| trim_line(line));
                let new_line = new_lines.get(i).map_or("", |line| trim_line(line));
                old_line != new_line
            })
            .collect();

        Self {
            old_line_count: old_lines.len(),
            new_line_count: new_lines.len(),
            differing_lines,
        }
    }

    /// Get the number of positions that differ
    pub fn diff_count(&self) -> usize {
        self.differing_lines.len()
    }

    /// Get the number of positions that were compared
    pub fn max_len(&self) -> usize {
        self.old_line_count.max(self.new_line_count)
    }

    /// Check if every compared position matched
    pub fn is_identical(&self) -> bool {
        self.differing_lines.is_empty()
    }

    /// Check if the line at the given position differs
    pub fn differs_at(&self, line: usize) -> bool {
        self.differing_lines.binary_search(&line).is_ok()
    }
}
