//! Tests for the value model and records.

use std::sync::Arc;

use mapkit_core::errors::RecordError;
use mapkit_core::{Key, Kind, Mapping, Record, RecordSchema, Value};

fn user_schema() -> Arc<RecordSchema> {
    Arc::new(RecordSchema::new("User", ["id", "name", "tags"]).unwrap())
}

/// Test duplicate field names are rejected at schema construction
#[test]
fn test_schema_rejects_duplicate_fields() {
    let err = RecordSchema::new("Dup", ["a", "b", "a"]).unwrap_err();
    assert_eq!(
        err,
        RecordError::DuplicateField {
            record: "Dup".into(),
            field: "a".into()
        }
    );
}

/// Test record construction checks the value count
#[test]
fn test_record_field_count_mismatch() {
    let err = Record::new(user_schema(), vec![Value::from(1)]).unwrap_err();
    assert_eq!(
        err,
        RecordError::FieldCountMismatch {
            record: "User".into(),
            expected: 3,
            found: 1
        }
    );
}

/// Test get/set by field name and declared-order iteration
#[test]
fn test_record_get_set_fields() {
    let mut record = Record::new(
        user_schema(),
        vec![Value::from(1), Value::from("ann"), Value::from(Vec::new())],
    )
    .unwrap();

    assert_eq!(record.get("name"), Some(&Value::from("ann")));
    assert_eq!(record.get("missing"), None);

    let previous = record.set("name", Value::from("bob")).unwrap();
    assert_eq!(previous, Value::from("ann"));
    assert_eq!(record.get("name"), Some(&Value::from("bob")));

    let err = record.set("age", Value::from(3)).unwrap_err();
    assert!(matches!(err, RecordError::UnknownField { .. }));

    let names: Vec<&str> = record.fields().map(|(name, _)| name).collect();
    assert_eq!(names, ["id", "name", "tags"]);
}

/// Test kinds and accessors
#[test]
fn test_kinds_and_accessors() {
    assert_eq!(Value::Null.kind(), Kind::Null);
    assert_eq!(Value::from(2).kind().name(), "integer");
    assert_eq!(Value::from(2).as_f64(), Some(2.0));
    assert_eq!(Value::from("x").as_str(), Some("x"));
    assert!(Value::from(Mapping::default()).is_composite());
    assert!(!Value::from(1.5).is_composite());
    assert_eq!(Value::default(), Value::Null);
}

/// Test mixed key kinds coexist and stay distinct
#[test]
fn test_heterogeneous_keys() {
    let value: Value = [
        (Key::from("1"), Value::from("text")),
        (Key::from(1), Value::from("int")),
        (Key::from(true), Value::from("bool")),
    ]
    .into_iter()
    .collect();
    let map = value.as_mapping().unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map[&Key::from(1)], Value::from("int"));
    assert_eq!(map[&Key::from("1")], Value::from("text"));
}

/// Test mapping equality ignores insertion order
#[test]
fn test_mapping_equality_ignores_order() {
    let a: Value = [("x", 1), ("y", 2)].into_iter().collect();
    let b: Value = [("y", 2), ("x", 1)].into_iter().collect();
    assert_eq!(a, b);
}
