//! CLI module for Matchmap

mod args;

pub use args::Args;

use crate::config::Config;
use crate::error::Result;
use crate::matcher::Matcher;
use crate::output::{ChartRenderer, JsonWriter};
use crate::scan::Scanner;
use std::path::Path;
use std::process::ExitCode;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    // Compile the pattern first so a malformed regex fails before any
    // traversal or output setup.
    let matcher = Matcher::new(&args.keyword, args.mode)?;

    // An explicit config path must load cleanly; the implicit
    // fallback file is optional.
    let cfg = match &args.config {
        Some(config_path) => Config::load(config_path)?,
        None => Config::load_or_default(Path::new("matchmap.toml")),
    };

    if args.verbose {
        println!("Root: {}", args.root_dir.display());
        println!("Pattern: {}", args.keyword);
        println!("Mode: {:?}", args.mode);
        println!("Output: {}", args.output_dir.display());
        println!("Chart: {}x{}", cfg.chart.width, cfg.chart.height);
    }

    let scanner = Scanner::new(matcher).with_verbose(args.verbose);
    let results = scanner.scan(&args.root_dir)?;

    std::fs::create_dir_all(&args.output_dir)?;

    let json_path = args.output_dir.join("results.json");
    JsonWriter::write(&results, &json_path)?;

    let chart_path = args.output_dir.join("results.png");
    ChartRenderer::new(cfg.chart).render(&results, &chart_path)?;

    println!("Results saved to {}", json_path.display());
    println!("Chart saved to {}", chart_path.display());

    Ok(())
}
