//! Tests for loading INI sources.
//!
//! Responsibilities:
//! - Test `IniSource::load_config` against files written to temp directories.
//! - Test that validation failures happen before any file is touched.
//! - Test root-offset handling end to end.
//!
//! Does NOT handle:
//! - Parser shaping details (tested in parse.rs).
//! - Offset nesting edge cases (tested in offset.rs).
//!
//! Invariants:
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::Path;

pub mod validation_tests;

/// Writes `content` to `name` inside `dir` and returns the path as a string.
pub fn write_ini(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}
