//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read_to_string` with consistent `Error::internal_io` formatting.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Read a file as UTF-8 text, separating I/O failures from decode failures.
///
/// Raw bytes are read first so that non-text content surfaces as
/// `file.decode_failed` rather than a generic I/O error.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("read {}", path.display()))))?;
    String::from_utf8(bytes)
        .map_err(|e| Error::file_decode_failed(path.display().to_string(), e.to_string()))
}

/// Write content to file with standardized error handling.
///
/// Whole-file overwrite, not atomic: a crash mid-write can leave the file truncated.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}
