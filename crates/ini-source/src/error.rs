//! Error types for loading an INI source.
//!
//! Responsibilities:
//! - Define error variants for every way `load_config` can fail.
//! - Expose a coarse `SourceErrorKind` for callers that match on kind.
//!
//! Does NOT handle:
//! - Malformed INI content, which degrades to an empty or partial mapping
//!   (see `source/parse.rs`).
//!
//! Invariants:
//! - Validation variants carry the caller's input verbatim.
//! - `FileSystem` keeps the native `std::io::Error` as its source and renders
//!   its message unmodified, followed by the path it concerned.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a configuration source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The file name has no extension (this includes the empty string).
    #[error("File '{file_name}' is not a valid or is missing a file extension")]
    InvalidPath { file_name: String },

    /// The file name has an extension this source cannot parse.
    #[error("File extension '{extension}' not supported")]
    UnsupportedExtension { extension: String },

    /// Reading the file failed.
    #[error("{source}, open '{path}'")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of a [`SourceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceErrorKind {
    InvalidPath,
    UnsupportedExtension,
    FileSystem,
}

impl SourceError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> SourceErrorKind {
        match self {
            SourceError::InvalidPath { .. } => SourceErrorKind::InvalidPath,
            SourceError::UnsupportedExtension { .. } => SourceErrorKind::UnsupportedExtension,
            SourceError::FileSystem { .. } => SourceErrorKind::FileSystem,
        }
    }

    /// Returns the underlying I/O error kind for `FileSystem` errors.
    pub fn io_kind(&self) -> Option<ErrorKind> {
        match self {
            SourceError::FileSystem { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
