//! Record normalization: from arbitrary input to a storable [`Document`].
//!
//! Normalization is the single admission path for write payloads. It validates the
//! input shape, canonicalizes the identity field, drops unusable fields, and
//! deep-clones everything it keeps, so the resulting document never aliases
//! caller-owned data.

use serde_json::{Map, Value};

use crate::document::Document;
use crate::identity::{self, ID_FIELD};

/// Validates and canonicalizes an input record into a [`Document`].
///
/// The pipeline:
/// 1. the input must be a JSON object; null or any other shape fails;
/// 2. if an `id`-like field (case-insensitive) resolves to an `i32`, the
///    output receives a canonical lowercase `id` holding that integer;
///    otherwise the output carries no `id` at all, which is how partial-update
///    payloads without identity flow through;
/// 3. every other field is copied over, except `id`-cased duplicates and
///    fields holding null, which are dropped;
/// 4. an output with zero fields fails.
///
/// The input is never mutated; all kept values are deep copies.
pub fn normalize(record: &Value) -> Option<Document> {
    let input = record.as_object()?;
    let mut fields = Map::new();
    if let Some(id) = identity::resolve_id(input) {
        fields.insert(ID_FIELD.to_string(), Value::from(id));
    }
    for (key, value) in input {
        if key.eq_ignore_ascii_case(ID_FIELD) || value.is_null() {
            continue;
        }
        fields.insert(key.clone(), value.clone());
    }
    if fields.is_empty() {
        None
    } else {
        Some(Document::from_fields(fields))
    }
}
