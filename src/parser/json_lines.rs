//! JSON-line filtering.
//!
//! Trace logs interleave one-event-per-line JSON with arbitrary prose.
//! A line is kept iff it parses as one complete JSON value; everything
//! else is dropped without being reported as an error.

use super::schema::TraceEvent;
use crate::utils::error::InputError;
use log::debug;
use std::path::Path;

/// Events parsed from one block of text, plus line counts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedLines {
    /// Successfully parsed values, in line order
    pub events: Vec<TraceEvent>,

    /// Number of lines seen
    pub total_lines: usize,
}

impl ParsedLines {
    /// Lines that were not valid JSON
    pub fn skipped_lines(&self) -> usize {
        self.total_lines - self.events.len()
    }
}

/// Parse a single line as a complete JSON value
///
/// Surrounding whitespace is accepted, trailing garbage is not.
/// Empty lines are rejected.
pub fn parse_json_line(line: &str) -> Option<TraceEvent> {
    serde_json::from_str(line).ok()
}

/// Keep only the lines that are valid JSON, parsed, in input order
///
/// **Public** - the line filter used for every input
pub fn filter_json_lines<'a, I>(lines: I) -> Vec<TraceEvent>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().filter_map(parse_json_line).collect()
}

/// Split text on `\n`, `\r\n` and lone `\r`
///
/// A trailing line break does not start an extra empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(pos) => {
                let line = &rest[..pos];
                let break_len = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + break_len..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Split text into lines and filter them
pub fn parse_trace_text(text: &str) -> ParsedLines {
    let mut parsed = ParsedLines::default();

    for line in split_lines(text) {
        parsed.total_lines += 1;
        if let Some(event) = parse_json_line(line) {
            parsed.events.push(event);
        }
    }

    parsed
}

/// Read a whole trace file and filter its lines
///
/// # Errors
/// * `InputError::ReadFailed` - file missing, unreadable, or not UTF-8
pub fn parse_trace_file(path: impl AsRef<Path>) -> Result<ParsedLines, InputError> {
    let path = path.as_ref();

    debug!("Reading trace file: {}", path.display());

    // read_to_string owns the handle for the duration of the call only
    let text = std::fs::read_to_string(path).map_err(|source| InputError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = parse_trace_text(&text);

    debug!(
        "{}: {} lines, {} events, {} skipped",
        path.display(),
        parsed.total_lines,
        parsed.events.len(),
        parsed.skipped_lines()
    );

    Ok(parsed)
}
