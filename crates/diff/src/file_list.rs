use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// The ordered list of files to compare pairwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileList {
    paths: Vec<PathBuf>,
}

impl FileList {
    /// Create a file list from explicit paths, keeping their order
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a numbered sequence such as `output_1.cnf` .. `output_9.cnf`
    pub fn numbered(prefix: &str, suffix: &str, numbers: RangeInclusive<usize>) -> Self {
        Self::new(numbers.map(|n| format!("{prefix}{n}{suffix}")))
    }

    /// Get the paths in order
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Get the number of files
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if the list has no files
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over the paths in order
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}

impl Default for FileList {
    /// `output_1.cnf` through `output_9.cnf` in the working directory
    fn default() -> Self {
        Self::numbered("output_", ".cnf", 1..=9)
    }
}
