//! Matchmap - Count regex-matching files per directory
//!
//! Walks a directory tree, counts files per subdirectory that match a
//! regex (by filename, content, or both), and writes the counts as
//! JSON plus a bar-chart image.

pub mod cli;
pub mod config;
pub mod error;
pub mod matcher;
pub mod output;
pub mod scan;

// Re-export main types
pub use config::{ChartSettings, Config};
pub use error::{Error, Result};
pub use matcher::{Matcher, SearchMode};
pub use output::{ChartRenderer, JsonWriter};
pub use scan::{MatchCounts, Scanner};
