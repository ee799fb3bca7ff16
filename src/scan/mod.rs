// Directory walk and per-directory aggregation
//
// Walks the tree top-down, applies the matcher to every file, and
// records one count per directory (relative to the root). Counts are
// for immediate files only, never rolled up into ancestors.

use crate::error::{Error, Result};
use crate::matcher::Matcher;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use walkdir::WalkDir;

/// Per-directory match counts, keyed by path relative to the scan
/// root (the root itself is the empty string). Keys appear in
/// traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchCounts {
    counts: IndexMap<String, u64>,
}

impl MatchCounts {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a directory key exists, starting at zero
    pub fn record_dir(&mut self, key: impl Into<String>) {
        self.counts.entry(key.into()).or_insert(0);
    }

    /// Increment the count for a directory
    pub fn record_match(&mut self, key: impl Into<String>) {
        *self.counts.entry(key.into()).or_insert(0) += 1;
    }

    /// Count for a directory key, if present
    pub fn get(&self, key: &str) -> Option<u64> {
        self.counts.get(key).copied()
    }

    /// Number of directories in the mapping
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the mapping has no directories
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate directory keys and counts in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of all per-directory counts
    pub fn total_matches(&self) -> u64 {
        self.counts.values().sum()
    }
}

/// Walks a directory tree and aggregates match counts
pub struct Scanner {
    matcher: Matcher,
    verbose: bool,
}

impl Scanner {
    /// Create a scanner around a configured matcher
    pub fn new(matcher: Matcher) -> Self {
        Self {
            matcher,
            verbose: false,
        }
    }

    /// Enable per-directory progress output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Walk `root` top-down and count matching files per directory.
    ///
    /// Every visited directory becomes a key, including empty ones.
    /// Unreadable entries are skipped with a warning on stderr.
    pub fn scan(&self, root: &Path) -> Result<MatchCounts> {
        if !root.exists() {
            return Err(Error::PathNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(Error::NotADirectory(root.to_path_buf()));
        }

        let mut results = MatchCounts::new();

        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    eprintln!("Warning: skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());

            if entry.file_type().is_dir() {
                let key = dir_key(relative);
                if self.verbose {
                    println!("Scanning: {}", entry.path().display());
                }
                results.record_dir(key);
            } else if entry.file_type().is_file() {
                if self.matcher.matches(entry.path()) {
                    let parent = relative.parent().unwrap_or_else(|| Path::new(""));
                    results.record_match(dir_key(parent));
                }
            }
        }

        Ok(results)
    }
}

/// Convert a relative directory path to a mapping key. The root maps
/// to the empty string; separators are normalized to `/`.
fn dir_key(relative: &Path) -> String {
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}
