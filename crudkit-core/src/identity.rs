//! Identity resolution for loosely-structured records.
//!
//! Every record stored by the toolkit is keyed by an integer identity embedded
//! in the record itself, under a field named `id` (matched case-insensitively).
//! This module extracts that field and parses it with exact, locale-independent
//! integer semantics: surrounding whitespace is tolerated on string values,
//! fractional or otherwise decorated numbers are not.

use serde_json::{Map, Value};

/// Canonical key under which a resolved identity is stored.
pub const ID_FIELD: &str = "id";

/// Finds the identity field of a record, matching the key case-insensitively.
///
/// Keys are scanned in insertion order and the first match wins, so a record
/// carrying both `id` and `ID` resolves through whichever appears first.
pub fn id_value(record: &Map<String, Value>) -> Option<&Value> {
    record
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(ID_FIELD))
        .map(|(_, value)| value)
}

/// Parses a JSON value as a 32-bit signed integer identity.
///
/// Accepted forms:
/// - integral JSON numbers within `i32` range (`5`, `-3`);
/// - strings holding an optionally signed base-10 integer, with surrounding
///   whitespace ignored (`"7"`, `"  5  "`, `"-12"`).
///
/// Everything else fails: floats (`5.0`), decorated strings (`"5abc"`,
/// `"42.0"`), booleans, nulls, arrays, and objects.
pub fn parse_id(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

/// Resolves the integer identity of a record, if it has one.
///
/// Combines [`id_value`] and [`parse_id`]: the record must carry an `id`-like
/// field whose value parses as an `i32`.
pub fn resolve_id(record: &Map<String, Value>) -> Option<i32> {
    id_value(record).and_then(parse_id)
}

/// Reports whether a record carries an `id` field eligible for creation.
///
/// Creation demands that the raw input explicitly present its identity: the
/// field must exist and hold a scalar (string, number, or boolean). This is
/// deliberately weaker than [`resolve_id`], so a present-but-unparseable id
/// is rejected later with a different failure than an absent one.
pub fn has_scalar_id(record: &Map<String, Value>) -> bool {
    matches!(
        id_value(record),
        Some(Value::String(_) | Value::Number(_) | Value::Bool(_))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_parse_id_integral_number() {
        assert_eq!(parse_id(&json!(5)), Some(5));
        assert_eq!(parse_id(&json!(-3)), Some(-3));
        assert_eq!(parse_id(&json!(0)), Some(0));
    }

    #[test]
    fn test_parse_id_rejects_floats() {
        assert_eq!(parse_id(&json!(5.0)), None);
        assert_eq!(parse_id(&json!(4.2)), None);
    }

    #[test]
    fn test_parse_id_rejects_out_of_range() {
        assert_eq!(parse_id(&json!(i64::from(i32::MAX) + 1)), None);
        assert_eq!(parse_id(&json!(i64::from(i32::MIN) - 1)), None);
        assert_eq!(parse_id(&json!(i32::MAX)), Some(i32::MAX));
        assert_eq!(parse_id(&json!(i32::MIN)), Some(i32::MIN));
    }

    #[test]
    fn test_parse_id_trims_string_whitespace() {
        assert_eq!(parse_id(&json!("  42  ")), Some(42));
        assert_eq!(parse_id(&json!("\t7\n")), Some(7));
    }

    #[test]
    fn test_parse_id_string_forms() {
        assert_eq!(parse_id(&json!("7")), Some(7));
        assert_eq!(parse_id(&json!("-12")), Some(-12));
        assert_eq!(parse_id(&json!("+5")), Some(5));
        assert_eq!(parse_id(&json!("42.0")), None);
        assert_eq!(parse_id(&json!("5abc")), None);
        assert_eq!(parse_id(&json!("")), None);
        assert_eq!(parse_id(&json!("   ")), None);
    }

    #[test]
    fn test_parse_id_rejects_non_numeric_scalars() {
        assert_eq!(parse_id(&json!(true)), None);
        assert_eq!(parse_id(&json!(null)), None);
        assert_eq!(parse_id(&json!([1])), None);
        assert_eq!(parse_id(&json!({"nested": 1})), None);
    }

    #[test]
    fn test_id_value_is_case_insensitive() {
        let rec = record(json!({"ID": 9, "name": "x"}));
        assert_eq!(id_value(&rec), Some(&json!(9)));
        let rec = record(json!({"Id": 3}));
        assert_eq!(resolve_id(&rec), Some(3));
    }

    #[test]
    fn test_id_value_first_match_wins() {
        let rec = record(json!({"iD": 1, "ID": 2}));
        assert_eq!(resolve_id(&rec), Some(1));
    }

    #[test]
    fn test_resolve_id_absent_field() {
        let rec = record(json!({"name": "x"}));
        assert_eq!(resolve_id(&rec), None);
        assert!(!has_scalar_id(&rec));
    }

    #[test]
    fn test_has_scalar_id_accepts_scalars_only() {
        assert!(has_scalar_id(&record(json!({"id": 1}))));
        assert!(has_scalar_id(&record(json!({"id": "abc"}))));
        assert!(has_scalar_id(&record(json!({"id": true}))));
        assert!(!has_scalar_id(&record(json!({"id": null}))));
        assert!(!has_scalar_id(&record(json!({"id": [1]}))));
        assert!(!has_scalar_id(&record(json!({"id": {"v": 1}}))));
    }
}
