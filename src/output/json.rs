//! JSON array output writer.
//!
//! Serializes the merged event sequence as one JSON array followed by a
//! newline, either to any writer (stdout) or to a file.

use crate::utils::error::OutputError;
use log::{debug, info};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a value as JSON to a writer
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `value` - Data to write, normally the event slice
/// * `writer` - Destination, e.g. locked stdout
/// * `pretty` - Indent the output instead of writing it compactly
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
pub fn write_json<T, W>(value: &T, writer: W, pretty: bool) -> Result<(), OutputError>
where
    T: Serialize + ?Sized,
    W: Write,
{
    let mut writer = BufWriter::new(writer);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }

    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}

/// Write a value as JSON to a file
///
/// Parent directories are created when missing.
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
pub fn write_json_file<T>(
    value: &T,
    output_path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), OutputError>
where
    T: Serialize + ?Sized,
{
    let output_path = output_path.as_ref();

    info!("Writing events to: {}", output_path.display());

    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    write_json(value, file, pretty)?;

    debug!(
        "Output written ({} bytes)",
        std::fs::metadata(output_path).map(|m| m.len()).unwrap_or(0)
    );

    Ok(())
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
