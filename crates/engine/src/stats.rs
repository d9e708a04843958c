use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Non-blank line count of a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCount {
    pub path: PathBuf,
    pub lines: usize,
}

/// Aggregated scan outcome: per-file counts and their sum.
///
/// `total` always equals the sum of the recorded counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    counts: BTreeMap<PathBuf, usize>,
    total: usize,
}

impl ScanResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the count for `path`, replacing any earlier count for it.
    pub fn record(&mut self, path: PathBuf, lines: usize) {
        if let Some(previous) = self.counts.insert(path, lines) {
            self.total -= previous;
        }
        self.total += lines;
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[must_use]
    pub fn get(&self, path: &Path) -> Option<usize> {
        self.counts.get(path).copied()
    }

    /// Files in ascending path order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, usize)> {
        self.counts.iter().map(|(p, n)| (p.as_path(), *n))
    }
}

impl FromIterator<FileCount> for ScanResult {
    fn from_iter<I: IntoIterator<Item = FileCount>>(iter: I) -> Self {
        let mut result = Self::new();
        for FileCount { path, lines } in iter {
            result.record(path, lines);
        }
        result
    }
}
