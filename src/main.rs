//! Trace Merge CLI
//!
//! Merges JSON-per-line trace logs into one JSON array on stdout.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use trace_merge::commands::{execute_convert, ConvertArgs};
use trace_merge::output::format_summary;

/// Trace Merge - combine JSON trace logs for a trace viewer
#[derive(Parser, Debug)]
#[command(name = "trace-merge")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Trace log files to merge, in order
    #[arg(required = true, value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Put *WaitForEvent events on tid 2 and all others on tid 1
    #[arg(short, long)]
    collapse_threads: bool,

    /// Indent the output array
    #[arg(short, long)]
    pretty: bool,

    /// Write the array to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a summary to stderr
    #[arg(short, long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for the JSON array
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = ConvertArgs {
        inputs: cli.files,
        collapse_threads: cli.collapse_threads,
        output: cli.output,
        pretty: cli.pretty,
    };

    let stats = execute_convert(&args)?;

    if cli.summary {
        eprint!("{}", format_summary(&stats, args.collapse_threads));
    }

    Ok(())
}
