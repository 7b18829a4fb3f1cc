//! Trace Merge
//!
//! Merges line-delimited JSON trace logs into the single event array
//! that trace viewers such as `chrome://tracing` and Perfetto load.
//!
//! Each input line that is a complete JSON value becomes one event;
//! every other line is dropped. Events keep file order, then line order.
//! Optionally, thread ids are collapsed so that `*WaitForEvent` events
//! sit on one row and everything else on another.
//!
//! ## Getting Started
//!
//! ```bash
//! trace-merge --collapse-threads run1.log run2.log > trace.json
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
