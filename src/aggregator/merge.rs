//! Ordered merging of events from several trace files.

use super::thread_collapse::collapse_threads;
use crate::parser::json_lines::{parse_trace_file, ParsedLines};
use crate::parser::schema::TraceEvent;
use crate::utils::error::{CollapseError, InputError};
use std::path::Path;

/// Line counts for a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateStats {
    pub files: usize,
    pub total_lines: usize,
    pub events: usize,
    pub skipped_lines: usize,
}

/// Accumulates events in file order, then line order
///
/// The aggregator owns the only copy of the merged sequence until
/// [`TraceAggregator::finish`] hands it out.
#[derive(Debug, Default)]
pub struct TraceAggregator {
    events: Vec<TraceEvent>,
    stats: AggregateStats,
}

impl TraceAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the events of an already parsed block of lines
    pub fn add_parsed(&mut self, parsed: ParsedLines) {
        self.stats.files += 1;
        self.stats.total_lines += parsed.total_lines;
        self.stats.skipped_lines += parsed.skipped_lines();
        self.stats.events += parsed.events.len();
        self.events.extend(parsed.events);
    }

    /// Read a trace file and append its events
    ///
    /// # Errors
    /// * `InputError::ReadFailed` - the file cannot be read; nothing is appended
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> Result<(), InputError> {
        let parsed = parse_trace_file(path)?;
        self.add_parsed(parsed);
        Ok(())
    }

    pub fn stats(&self) -> AggregateStats {
        self.stats
    }

    #[cfg(test)]
    fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Take the merged sequence, collapsing thread ids over all of it if asked
    ///
    /// # Errors
    /// * `CollapseError` - only when `collapse` is set and an event has no string `name`
    pub fn finish(
        self,
        collapse: bool,
    ) -> Result<(Vec<TraceEvent>, AggregateStats), CollapseError> {
        let mut events = self.events;
        if collapse {
            collapse_threads(&mut events)?;
        }
        Ok((events, self.stats))
    }
}
