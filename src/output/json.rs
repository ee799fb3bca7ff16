// JSON result writer
//
// Serializes the match counts as a plain JSON object with pretty
// indentation, one key per directory.

use crate::error::Result;
use crate::scan::MatchCounts;
use std::fs;
use std::path::Path;

/// Writes match counts as pretty-printed JSON
pub struct JsonWriter;

impl JsonWriter {
    /// Serialize the counts to a string
    pub fn to_pretty_string(results: &MatchCounts) -> Result<String> {
        Ok(serde_json::to_string_pretty(results)?)
    }

    /// Write the counts to a file
    pub fn write(results: &MatchCounts, path: &Path) -> Result<()> {
        let json = Self::to_pretty_string(results)?;
        fs::write(path, json)?;
        Ok(())
    }
}
