//! The stored document representation.
//!
//! A [`Document`] is an ordered mapping from string field names to JSON values,
//! produced by [normalization](crate::normalize) from an arbitrary input record.
//! Field insertion order is preserved, while equality between documents is
//! structural and independent of field order.
//!
//! Documents are plain values: the store hands out owned clones on read, and a
//! clone of a `serde_json::Value` is always a full deep copy, so nothing a
//! caller does to a returned document can reach back into store state.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::identity::{self, ID_FIELD};

/// A validated record: ordered field map with an embedded integer identity.
///
/// Documents are created by [`normalize`](crate::normalize::normalize) and are
/// read-only apart from [`merge`](Document::merge), which applies a normalized
/// patch field by field. Stored documents always carry a canonical lowercase
/// `id` field parseable as `i32`; a patch document may legitimately have none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    pub(crate) fn from_fields(fields: Map<String, Value>) -> Self {
        Document { fields }
    }

    /// Returns the resolved integer identity of this document, if any.
    pub fn id(&self) -> Option<i32> {
        identity::resolve_id(&self.fields)
    }

    /// Returns the value stored under `key`, matched exactly.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Reports whether a field named exactly `key` exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of fields in the document.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Reports whether the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Consumes the document, returning it as a plain JSON object value.
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// Applies a normalized patch to this document, field by field.
    ///
    /// For every patch field except the identity, the value is deep-cloned in
    /// when it differs structurally from the current value at that key (or the
    /// key is absent). Comparison uses JSON deep equality, so reordered object
    /// fields inside a value do not count as a change. The `id` field is never
    /// altered, regardless of what the patch carries.
    ///
    /// Returns whether any field actually changed.
    pub fn merge(&mut self, patch: &Document) -> bool {
        let mut changed = false;
        for (key, value) in &patch.fields {
            if key.eq_ignore_ascii_case(ID_FIELD) {
                continue;
            }
            if self.fields.get(key) != Some(value) {
                self.fields.insert(key.clone(), value.clone());
                changed = true;
            }
        }
        changed
    }
}
