//! Root-offset nesting.
//!
//! Relocates a parsed mapping under a dotted path such as `new.location`.
//! Segments are read left to right; empty segments are dropped with a warning.

use serde_json::{Map, Value};

use crate::constants::PATH_SEPARATOR;

/// Nests `data` under the dotted `root_offset`.
///
/// An empty offset returns `data` unchanged. Otherwise each non-empty segment
/// becomes a single-key mapping, with `data` as the innermost value:
/// `"a.b"` turns `{x: 1}` into `{a: {b: {x: 1}}}`.
pub fn nest_under_offset(data: Map<String, Value>, root_offset: &str) -> Map<String, Value> {
    if root_offset.is_empty() {
        return data;
    }

    let segments: Vec<&str> = root_offset.split(PATH_SEPARATOR).collect();
    let non_empty: Vec<&str> = segments.iter().copied().filter(|s| !s.is_empty()).collect();

    if non_empty.len() != segments.len() {
        tracing::warn!(
            root_offset = %root_offset,
            skipped = segments.len() - non_empty.len(),
            "Root offset contains empty segments, ignoring them"
        );
    }

    non_empty.iter().rev().fold(data, |inner, segment| {
        let mut outer = Map::new();
        outer.insert((*segment).to_string(), Value::Object(inner));
        outer
    })
}
