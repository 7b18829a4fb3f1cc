//! Trace log parsing.
//!
//! This module handles:
//! - Filtering raw log lines down to the ones that are JSON
//! - Reading whole trace files
//! - Accessing the few event fields the converter looks at

pub mod json_lines;
pub mod schema;

// Re-export main types
pub use json_lines::{
    filter_json_lines, parse_json_line, parse_trace_file, parse_trace_text, split_lines,
    ParsedLines,
};
pub use schema::{event_name, event_tid, TraceEvent};
