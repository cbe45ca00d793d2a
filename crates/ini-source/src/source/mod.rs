//! Loading INI files as configuration sources.
//!
//! Responsibilities:
//! - Define the `ConfigSource` abstraction and its INI implementation.
//! - Sequence validation, the async file read, parsing and root-offset nesting.
//! - Assemble the `SourceResult` description from the resolved path.
//!
//! Does NOT handle:
//! - INI tokenizing, which is delegated to `rust-ini` (see `parse.rs`).
//! - Caching, file watching or writing files back.
//!
//! Invariants / Assumptions:
//! - Extension validation happens before any I/O.
//! - The file read is the only suspension point of `load_config`.
//! - Malformed content never fails a load; it yields an empty or partial mapping.

use std::path::PathBuf;

mod extension;
mod offset;
mod parse;
mod result;

#[cfg(test)]
mod tests;

pub use extension::validate_extension;
pub use offset::nest_under_offset;
pub use parse::parse_ini_str;
pub use result::SourceResult;

use crate::constants::DESCRIPTION_PREFIX;
use crate::error::SourceError;

/// A source that can asynchronously produce configuration data.
pub trait ConfigSource {
    /// Loads the configuration.
    fn load_config(&self) -> impl Future<Output = Result<SourceResult, SourceError>> + Send;
}

/// Configuration source backed by an `.ini` file on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniSource {
    file_name: String,
    root_offset: String,
}

impl IniSource {
    /// Create a source for `file_name` with no root offset.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            root_offset: String::new(),
        }
    }

    /// Nest the loaded data under a dotted path such as `new.location`.
    pub fn with_root_offset(mut self, root_offset: impl Into<String>) -> Self {
        self.root_offset = root_offset.into();
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn root_offset(&self) -> &str {
        &self.root_offset
    }
}

impl ConfigSource for IniSource {
    /// Reads, parses and nests the file.
    ///
    /// # Errors
    ///
    /// - `SourceError::InvalidPath` if the file name has no extension.
    /// - `SourceError::UnsupportedExtension` if the extension is not `ini`.
    /// - `SourceError::FileSystem` if the file cannot be read as UTF-8 text.
    async fn load_config(&self) -> Result<SourceResult, SourceError> {
        validate_extension(&self.file_name)
            .inspect_err(|e| tracing::debug!(error = %e, "Rejected INI source file name"))?;

        let path = PathBuf::from(&self.file_name);
        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| SourceError::FileSystem {
                path: path.clone(),
                source,
            })?;

        let data = nest_under_offset(parse_ini_str(&text), &self.root_offset);
        let resolved = std::path::absolute(&path).unwrap_or(path);

        tracing::debug!(
            path = %resolved.display(),
            root_offset = %self.root_offset,
            keys = data.len(),
            "Loaded INI source"
        );

        Ok(SourceResult {
            description: format!("{DESCRIPTION_PREFIX}{}", resolved.display()),
            data,
        })
    }
}
