//! INI text to nested mapping.
//!
//! Responsibilities:
//! - Delegate tokenizing to `rust-ini`, after dropping lines it would reject.
//! - Shape the flat section/key output into a nested `serde_json` mapping.
//!
//! Does NOT handle:
//! - Reading files (see `mod.rs`).
//! - Root-offset relocation (see `offset.rs`).
//!
//! Invariants:
//! - Parsing never fails: malformed lines are skipped, and if the parser still
//!   rejects the input the result is an empty mapping.
//! - Warnings report line numbers only, never line contents.

use ini::{Ini, ParseOption};
use serde_json::{Map, Value};

use crate::constants::{
    ARRAY_KEY_SUFFIX, BYTE_ORDER_MARK, COMMENT_PREFIXES, KEY_VALUE_DELIMITERS, PATH_SEPARATOR,
};

/// Parses INI text into a nested mapping.
///
/// - Keys before the first `[section]` land at the top level.
/// - `[a.b]` nests as `{a: {b: {...}}}`.
/// - `true`, `false` and `null` are coerced; every other value stays a string.
/// - `key[]` entries accumulate into an array under `key`.
pub fn parse_ini_str(text: &str) -> Map<String, Value> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    load_sanitized(&drop_malformed_lines(text))
}

/// Hands already-filtered text to `rust-ini`, falling back to an empty mapping on rejection.
fn load_sanitized(sanitized: &str) -> Map<String, Value> {
    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };

    match Ini::load_from_str_opt(sanitized, options) {
        Ok(ini) => shape(&ini),
        Err(e) => {
            tracing::warn!(error = %e, "INI parser rejected input, using empty mapping");
            Map::new()
        }
    }
}

/// Keeps section headers and key/value lines, dropping blanks, comments and anything else.
fn drop_malformed_lines(text: &str) -> String {
    let mut kept = String::with_capacity(text.len());
    let mut skipped = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIXES) {
            continue;
        }
        if is_section_header(trimmed) || is_key_value(trimmed) {
            kept.push_str(trimmed);
            kept.push('\n');
        } else {
            skipped.push(index + 1);
        }
    }

    if !skipped.is_empty() {
        tracing::warn!(lines = ?skipped, "Skipping malformed INI lines");
    }

    kept
}

fn is_section_header(line: &str) -> bool {
    line.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .is_some_and(|name| !name.contains(['[', ']']))
}

/// A key/value line needs a delimiter with a non-empty key before it.
fn is_key_value(line: &str) -> bool {
    !line.starts_with('[')
        && line
            .split_once(KEY_VALUE_DELIMITERS)
            .is_some_and(|(key, _)| !key.trim().is_empty())
}

fn shape(ini: &Ini) -> Map<String, Value> {
    let mut root = Map::new();

    for (section, properties) in ini.iter() {
        let table = match section {
            Some(name) => section_table(&mut root, name),
            None => &mut root,
        };
        for (key, value) in properties.iter() {
            insert_entry(table, key.trim(), coerce(value.trim()));
        }
    }

    root
}

/// Walks (creating as needed) the nested table for a possibly dotted section name.
fn section_table<'a>(root: &'a mut Map<String, Value>, name: &str) -> &'a mut Map<String, Value> {
    let name = name.trim();
    let mut segments: Vec<&str> = name
        .split(PATH_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if segments.is_empty() {
        segments.push(name);
    }

    segments
        .into_iter()
        .fold(root, |table, segment| child_table(table, segment))
}

fn child_table<'a>(table: &'a mut Map<String, Value>, key: &str) -> &'a mut Map<String, Value> {
    let slot = table
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    // A later section wins over a scalar of the same name.
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!("slot holds an object"),
    }
}

fn insert_entry(table: &mut Map<String, Value>, key: &str, value: Value) {
    let Some(base) = key.strip_suffix(ARRAY_KEY_SUFFIX) else {
        table.insert(key.to_string(), value);
        return;
    };

    let slot = table
        .entry(base.to_string())
        .or_insert_with(|| Value::Array(Vec::new()));
    match slot {
        Value::Array(items) => items.push(value),
        other => *other = Value::Array(vec![value]),
    }
}

fn coerce(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => Value::String(raw.to_string()),
    }
}
