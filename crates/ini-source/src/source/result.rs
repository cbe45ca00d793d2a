//! The outcome of a successful load.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::PATH_SEPARATOR;

/// Parsed configuration together with a description of where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceResult {
    /// Human-readable provenance, containing the resolved file path.
    pub description: String,
    /// Parsed (and possibly nested) configuration. Never absent; may be empty.
    pub data: Map<String, Value>,
}

impl SourceResult {
    /// Looks up a value by dotted path, e.g. `server.limits.max`.
    ///
    /// Empty segments are ignored, so an empty path returns `None`.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split(PATH_SEPARATOR).filter(|s| !s.is_empty());
        let first = self.data.get(segments.next()?)?;
        segments.try_fold(first, |value, segment| value.as_object()?.get(segment))
    }

    /// Consumes the result, returning only the data.
    pub fn into_data(self) -> Map<String, Value> {
        self.data
    }
}
