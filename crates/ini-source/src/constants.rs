//! Centralized constants for the INI source crate.
//!
//! Values shared between validation, parsing and result assembly live here
//! so they are not repeated as magic strings.

// =============================================================================
// File Validation
// =============================================================================

/// File extensions this source is permitted to parse, lowercase and without a leading dot.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["ini"];

// =============================================================================
// Result Assembly
// =============================================================================

/// Prefix of every `SourceResult::description`, followed by the resolved file path.
pub const DESCRIPTION_PREFIX: &str = "INI file: ";

/// Separator between segments of a root offset and of dotted section names.
pub const PATH_SEPARATOR: char = '.';

// =============================================================================
// INI Syntax
// =============================================================================

/// Byte-order mark some editors write at the start of UTF-8 files.
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Characters that start a comment line.
pub const COMMENT_PREFIXES: &[char] = &[';', '#'];

/// Characters that separate a key from its value.
pub const KEY_VALUE_DELIMITERS: &[char] = &['=', ':'];

/// Key suffix marking an entry that accumulates into an array.
pub const ARRAY_KEY_SUFFIX: &str = "[]";
