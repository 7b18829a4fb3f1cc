//! Aggregation of parsed trace events.
//!
//! This module turns per-file event lists into the final output sequence:
//! - Ordered merge across input files
//! - Optional thread id collapsing

pub mod merge;
pub mod thread_collapse;

// Re-export main types and functions
pub use merge::{AggregateStats, TraceAggregator};
pub use thread_collapse::{classify_event_name, collapse_threads, ThreadBucket};
