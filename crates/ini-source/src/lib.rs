//! INI configuration source.
//!
//! This crate loads an `.ini` file from disk into a nested JSON-like mapping,
//! optionally relocating the result under a dotted root offset, and reports
//! where the data came from.

pub mod constants;
mod error;
mod source;

pub use error::{SourceError, SourceErrorKind};
pub use source::{
    ConfigSource, IniSource, SourceResult, nest_under_offset, parse_ini_str,
    validate_extension,
};
