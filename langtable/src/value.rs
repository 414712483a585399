//! The format-agnostic document tree that every decoder produces.
//!
//! Decoders reduce JSON, YAML and TOML documents to two shapes: text leaves and
//! string-keyed maps. Scalars are stringified while decoding:
//!
//! - strings are kept verbatim;
//! - integers use their decimal form (`3`);
//! - floats keep a fractional part (`1.0`, `2.5`), in every format;
//! - booleans become `true` / `false`;
//! - null becomes the empty string;
//! - arrays become maps keyed by element index (`0`, `1`, ...).

use std::collections::BTreeMap;

/// A decoded translation document node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A leaf, already coerced to its textual form.
    Text(String),
    /// A nested mapping. Iterates in key order.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Creates an empty map node.
    pub fn empty_map() -> Self {
        Value::Map(BTreeMap::new())
    }

    /// Builds a map node from a sequence, keying each element by its index.
    pub fn from_sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Map(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item))
                .collect(),
        )
    }

    /// Returns the text of a leaf node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Map(_) => None,
        }
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Value::Text(_) => 1,
            Value::Map(map) => map.values().map(Value::leaf_count).sum(),
        }
    }

    /// Flattens this node into `(dotted key, text)` pairs.
    ///
    /// `prefix` is prepended to every key; an empty prefix adds nothing. A leaf
    /// at the top level is emitted under `prefix` itself.
    pub fn flatten(&self, prefix: &str) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(self.leaf_count());
        self.flatten_into(prefix, &mut out);
        out
    }

    fn flatten_into(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        match self {
            Value::Text(text) => out.push((prefix.to_string(), text.clone())),
            Value::Map(map) => {
                for (segment, child) in map {
                    child.flatten_into(&join_key(prefix, segment), out);
                }
            }
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

/// Joins two dotted-key fragments.
///
/// The separator is only omitted when `prefix` is empty; an empty segment
/// still adds one, so `{"a": {"": "x"}}` stores `a.` and never collides with
/// the branch `a`.
pub fn join_key(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}
