//! File extension validation.
//!
//! Responsibilities:
//! - Decide whether a file name names a file this source may parse.
//!
//! Does NOT handle:
//! - Checking that the file exists or is readable (see `mod.rs`).
//!
//! Invariants:
//! - Pure string inspection, performed before any I/O.
//! - Only the final path component is inspected, so dots in directory names
//!   never count as an extension.

use std::path::Path;

use crate::constants::SUPPORTED_EXTENSIONS;
use crate::error::SourceError;

/// Validates that `file_name` carries a supported extension.
///
/// Returns the extension as written on success.
///
/// # Errors
///
/// - [`SourceError::InvalidPath`] if there is no extension. Empty names,
///   dot-files such as `.ini` and names ending in `.` all count as missing.
/// - [`SourceError::UnsupportedExtension`] if the extension is not in
///   [`SUPPORTED_EXTENSIONS`] (compared ASCII case-insensitively).
pub fn validate_extension(file_name: &str) -> Result<&str, SourceError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .ok_or_else(|| SourceError::InvalidPath {
            file_name: file_name.to_string(),
        })?;

    if SUPPORTED_EXTENSIONS
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(extension))
    {
        Ok(extension)
    } else {
        Err(SourceError::UnsupportedExtension {
            extension: extension.to_string(),
        })
    }
}
