// File match predicate
//
// Applies a compiled regex to a file's base name, its content, or
// both. Content is read line by line and decoded lossily so binary
// files never error out of a scan.

use crate::error::Result;
use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Which file property the pattern is applied against
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Match against the file's base name only
    Filename,
    /// Match against the file's content only
    Content,
    /// Filename first, content as fallback
    #[default]
    Both,
}

/// Decides whether a file matches the configured pattern
#[derive(Debug)]
pub struct Matcher {
    regex: Regex,
    mode: SearchMode,
}

impl Matcher {
    /// Compile the pattern once up front. A malformed pattern fails
    /// here, before any traversal starts.
    pub fn new(pattern: &str, mode: SearchMode) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(Self { regex, mode })
    }

    /// The configured search mode
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// The original pattern string
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Check whether a file matches under the configured mode
    pub fn matches(&self, path: &Path) -> bool {
        match self.mode {
            SearchMode::Filename => self.matches_name(path),
            SearchMode::Content => self.matches_content(path),
            SearchMode::Both => self.matches_name(path) || self.matches_content(path),
        }
    }

    /// Substring regex search against the base name
    fn matches_name(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| self.regex.is_match(&name.to_string_lossy()))
            .unwrap_or(false)
    }

    /// Line-by-line content search. Unreadable files and read errors
    /// are treated as non-matching, never surfaced.
    fn matches_content(&self, path: &Path) -> bool {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(_) => return false,
        };

        let mut reader = BufReader::new(file);
        let mut line = Vec::new();

        loop {
            line.clear();
            match reader.read_until(b'\n', &mut line) {
                Ok(0) => return false,
                Ok(_) => {
                    if self.regex.is_match(&String::from_utf8_lossy(&line)) {
                        return true;
                    }
                }
                Err(_) => return false,
            }
        }
    }
}
