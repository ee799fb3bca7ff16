//! CLI argument parsing

use crate::matcher::SearchMode;
use clap::Parser;
use std::path::PathBuf;

/// Count regex-matching files per directory and chart the results
#[derive(Parser, Debug)]
#[command(name = "matchmap")]
#[command(about = "Count regex-matching files per directory and chart the results")]
#[command(version)]
pub struct Args {
    /// Root directory to start traversal
    #[arg(long = "root_dir")]
    pub root_dir: PathBuf,

    /// Regex pattern to match
    #[arg(long = "keyword")]
    pub keyword: String,

    /// Search in filename, content, or both
    #[arg(long, value_enum, default_value_t = SearchMode::Both)]
    pub mode: SearchMode,

    /// Directory to save results (created if missing)
    #[arg(long = "output_dir", default_value = ".")]
    pub output_dir: PathBuf,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
