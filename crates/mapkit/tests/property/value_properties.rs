use std::cmp::Ordering;
use std::sync::{Arc, OnceLock};

use mapkit::{
    deep_clone, deep_equal, lookup_path, sort_keys, CloneConfig, Key, KeySet, Mapping,
    ParallelCloner, Record, RecordSchema, Value,
};
use proptest::prelude::*;

fn point_schema() -> Arc<RecordSchema> {
    static SCHEMA: OnceLock<Arc<RecordSchema>> = OnceLock::new();
    Arc::clone(SCHEMA.get_or_init(|| Arc::new(RecordSchema::new("Point", ["x", "y"]).unwrap())))
}

fn cloner() -> &'static ParallelCloner {
    static CLONER: OnceLock<ParallelCloner> = OnceLock::new();
    CLONER.get_or_init(|| {
        ParallelCloner::new(&CloneConfig {
            threads: Some(4),
            max_depth: Some(32),
        })
        .unwrap()
    })
}

fn arb_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        any::<bool>().prop_map(Key::Bool),
        (-1000i64..1000).prop_map(Key::Integer),
        "[a-z0-9]{0,6}".prop_map(Key::String),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        (-1.0e9f64..1.0e9).prop_map(Value::Float),
        "[ a-zA-Z]{0,10}".prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Sequence),
            prop::collection::vec((arb_key(), inner.clone()), 0..6)
                .prop_map(|entries| Value::Mapping(entries.into_iter().collect())),
            prop::collection::vec(inner, 2).prop_map(|values| {
                Value::Record(Record::new(point_schema(), values).unwrap())
            }),
        ]
    })
}

fn arb_mapping() -> impl Strategy<Value = Mapping> {
    prop::collection::vec((arb_key(), arb_leaf()), 0..12)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn clone_is_equal_to_source(v in arb_value()) {
        let cloned = deep_clone(&v);
        prop_assert_eq!(&cloned, &v);
        prop_assert!(deep_equal(&cloned, &v, &KeySet::default()));
    }

    #[test]
    fn concurrent_clone_matches_sequential(v in arb_value()) {
        let sequential = deep_clone(&v);
        let concurrent = cloner().clone_value(&v).unwrap();
        prop_assert!(deep_equal(&sequential, &concurrent, &KeySet::default()));
        prop_assert_eq!(sequential, concurrent);
    }

    #[test]
    fn mutating_clone_leaves_source_untouched(v in arb_value()) {
        let snapshot = v.clone();
        let mut cloned = deep_clone(&v);
        match &mut cloned {
            Value::Sequence(items) => {
                items.push(Value::from("extra"));
                items.iter_mut().for_each(|item| *item = Value::Null);
            }
            Value::Mapping(map) => {
                map.values_mut().for_each(|item| *item = Value::from("x"));
                map.insert(Key::from("__added"), Value::Null);
            }
            Value::Record(record) => {
                record.values_mut().iter_mut().for_each(|item| *item = Value::from(0));
            }
            _ => {}
        }
        prop_assert_eq!(v, snapshot);
    }

    #[test]
    fn string_equality_ignores_case_and_padding(s in "[a-zA-Z]{0,12}", pad in " {0,3}") {
        let shouted = Value::from(format!("{pad}{}{pad}", s.to_uppercase()));
        prop_assert!(deep_equal(&shouted, &Value::from(s), &KeySet::default()));
    }

    #[test]
    fn sequence_equality_ignores_order(items in prop::collection::vec(arb_leaf(), 0..10)) {
        let mut reversed = items.clone();
        reversed.reverse();
        prop_assert!(deep_equal(
            &Value::from(items),
            &Value::from(reversed),
            &KeySet::default()
        ));
    }

    #[test]
    fn skipped_key_never_affects_equality(map in arb_mapping(), a in arb_leaf(), b in arb_leaf()) {
        let key = Key::from("__skipped");
        let mut left = map.clone();
        left.insert(key.clone(), a);
        let mut right = map;
        right.insert(key.clone(), b);
        let skip: KeySet = [key].into_iter().collect();
        prop_assert!(deep_equal(&Value::from(left), &Value::from(right), &skip));
    }

    #[test]
    fn sorted_keys_follow_textual_order(map in arb_mapping()) {
        let keys = sort_keys(&map);
        prop_assert_eq!(keys.len(), map.len());
        for pair in keys.windows(2) {
            prop_assert_ne!(pair[0].cmp_textual(pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn lookup_finds_nested_leaf(segments in prop::collection::vec("[a-z]{1,4}", 1..6), leaf in arb_leaf()) {
        let mut value = leaf.clone();
        for segment in segments.iter().rev() {
            value = [(segment.as_str(), value)].into_iter().collect();
        }
        let path = segments.join(".");
        prop_assert_eq!(lookup_path(&value, &path), Some(&leaf));
        let missing = format!("{path}.missing");
        prop_assert_eq!(lookup_path(&value, &missing), None);
    }
}
