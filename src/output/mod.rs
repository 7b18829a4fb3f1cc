//! Output writers for merged trace data.
//!
//! This module handles:
//! - The JSON event array (compact or pretty, stdout or file)
//! - Text summaries

pub mod json;
pub mod summary;

// Re-export main functions
pub use json::{write_json, write_json_file};
pub use summary::format_summary;
