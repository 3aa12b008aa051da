use anyhow::{Context, Result};
use derive_more::Display;
use log::{debug, warn};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::line_count::count_diff_lines;
use crate::pairs::pairs;

/// The difference count for one pair of files
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[display(
    fmt = "{} vs {}: {} different lines",
    "self.first.display()",
    "self.second.display()",
    diff
)]
pub struct PairResult {
    /// The path that came first in the file list
    pub first: PathBuf,

    /// The path that came second in the file list
    pub second: PathBuf,

    /// The number of positions whose lines differ
    pub diff: usize,
}

impl PairResult {
    /// Create a new pair result
    pub fn new(first: impl Into<PathBuf>, second: impl Into<PathBuf>, diff: usize) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            diff,
        }
    }

    /// Check if both files matched at every position
    pub fn is_identical(&self) -> bool {
        self.diff == 0
    }
}

/// Difference counts keyed by `(first, second)`, in insertion order.
///
/// Storing a pair that is already present replaces its count but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairReport {
    results: Vec<PairResult>,
    positions: HashMap<(PathBuf, PathBuf), usize>,
}

impl PairReport {
    /// Compare every pair of files on disk with [`count_diff_lines`]
    pub fn compare_files<P: AsRef<Path>>(files: &[P]) -> Result<Self> {
        Self::build(files, |first, second| count_diff_lines(first, second))
    }

    /// Run `counter` on every pair of `files` in enumeration order.
    ///
    /// The first failing pair aborts the whole report.
    pub fn build<P, F>(files: &[P], mut counter: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: FnMut(&Path, &Path) -> Result<usize>,
    {
        if files.len() < 2 {
            warn!("Only {} file(s) given, no pairs to compare", files.len());
        }

        let mut report = Self::default();

        for (first, second) in pairs(files) {
            let (first, second) = (first.as_ref(), second.as_ref());
            let diff = counter(first, second).with_context(|| {
                format!("Failed to compare {} vs {}", first.display(), second.display())
            })?;

            debug!("{} vs {}: {}", first.display(), second.display(), diff);
            report.insert(PairResult::new(first, second, diff));
        }

        Ok(report)
    }

    /// Store a result, replacing the count of an existing `(first, second)` key
    pub fn insert(&mut self, result: PairResult) {
        let key = (result.first.clone(), result.second.clone());
        match self.positions.get(&key) {
            Some(&index) => {
                debug!(
                    "Replacing {} vs {}: {} -> {}",
                    result.first.display(),
                    result.second.display(),
                    self.results[index].diff,
                    result.diff
                );
                self.results[index].diff = result.diff;
            }
            None => {
                self.positions.insert(key, self.results.len());
                self.results.push(result);
            }
        }
    }

    /// Get the results in insertion order
    pub fn results(&self) -> &[PairResult] {
        &self.results
    }

    /// Iterate over the results in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, PairResult> {
        self.results.iter()
    }

    /// Get the number of distinct pairs
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Check if the report has no pairs
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Get the difference count stored for `(first, second)`
    pub fn get<P: AsRef<Path>, Q: AsRef<Path>>(&self, first: P, second: Q) -> Option<usize> {
        let key = (first.as_ref().to_path_buf(), second.as_ref().to_path_buf());
        self.positions.get(&key).map(|&index| self.results[index].diff)
    }

    /// Iterate over the pairs whose files matched at every position
    pub fn identical_pairs(&self) -> impl Iterator<Item = &PairResult> {
        self.results.iter().filter(|r| r.is_identical())
    }
}

impl fmt::Display for PairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.results {
            writeln!(f, "{}", result)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PairReport {
    type Item = &'a PairResult;
    type IntoIter = std::slice::Iter<'a, PairResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
