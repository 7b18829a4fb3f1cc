//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod convert;

// Re-export main command functions
pub use convert::{convert_to_writer, execute_convert, validate_args, ConvertArgs};
