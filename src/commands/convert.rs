//! Convert command implementation.
//!
//! The convert command:
//! 1. Reads every input file, in order
//! 2. Keeps the lines that are JSON
//! 3. Merges the events into one sequence
//! 4. Optionally collapses thread ids
//! 5. Writes one JSON array
//!
//! Nothing is written until steps 1-4 have succeeded for all inputs.

use crate::aggregator::{AggregateStats, TraceAggregator};
use crate::output::{write_json, write_json_file};
use crate::parser::TraceEvent;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Arguments for the convert command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct ConvertArgs {
    /// Input trace files, merged in this order
    pub inputs: Vec<PathBuf>,

    /// Collapse thread ids into wait / non-wait rows
    pub collapse_threads: bool,

    /// Write to this file instead of stdout
    pub output: Option<PathBuf>,

    /// Indent the output array
    pub pretty: bool,
}

/// Validate convert arguments before doing any I/O
pub fn validate_args(args: &ConvertArgs) -> Result<()> {
    if args.inputs.is_empty() {
        bail!("At least one input file is required");
    }

    if let Some(output) = &args.output {
        if args.inputs.iter().any(|input| same_file(input, output)) {
            bail!(
                "Output path {} is also an input file",
                output.display()
            );
        }
    }

    Ok(())
}

/// Whether two paths name the same file
///
/// **Private** - paths that do not exist yet are only compared literally
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Execute the convert command
///
/// **Public** - main entry point called from main.rs
///
/// Writes to `args.output` when set, otherwise to stdout.
///
/// # Errors
/// * Invalid arguments
/// * An input file cannot be read
/// * An event has no string `name` while collapsing
/// * The output cannot be written
pub fn execute_convert(args: &ConvertArgs) -> Result<AggregateStats> {
    validate_args(args)?;

    let (events, stats) = merge_inputs(args)?;

    match &args.output {
        Some(path) => write_json_file(&events, path, args.pretty)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => write_json(&events, std::io::stdout().lock(), args.pretty)
            .context("Failed to write to stdout")?,
    }

    info!("Wrote {} events", events.len());

    Ok(stats)
}

/// Run the conversion, writing to `writer` regardless of `args.output`
///
/// **Public** - used by tests and library callers that own the destination
pub fn convert_to_writer<W: Write>(args: &ConvertArgs, writer: W) -> Result<AggregateStats> {
    validate_args(args)?;

    let (events, stats) = merge_inputs(args)?;
    write_json(&events, writer, args.pretty).context("Failed to write output")?;

    Ok(stats)
}

/// Read, merge and optionally collapse all inputs
///
/// **Private** - shared by both entry points
fn merge_inputs(args: &ConvertArgs) -> Result<(Vec<TraceEvent>, AggregateStats)> {
    let mut aggregator = TraceAggregator::new();

    for (index, input) in args.inputs.iter().enumerate() {
        info!(
            "Reading input {}/{}: {}",
            index + 1,
            args.inputs.len(),
            input.display()
        );
        aggregator.add_file(input)?;
    }

    let (events, stats) = aggregator
        .finish(args.collapse_threads)
        .context("Failed to collapse thread ids")?;

    debug!(
        "Merged {} events from {} files ({} lines skipped)",
        stats.events, stats.files, stats.skipped_lines
    );

    Ok((events, stats))
}
