//! Depth-first deep clone on the calling thread.

use mapkit_core::{Mapping, Value};

/// Recursively duplicate `value`.
///
/// Every sequence, mapping and record is reallocated; scalars are copied.
/// Recursion depth equals the nesting depth of the input.
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Sequence(items) => Value::Sequence(items.iter().map(deep_clone).collect()),
        Value::Mapping(map) => {
            let mut out = Mapping::with_capacity_and_hasher(map.len(), Default::default());
            for (key, child) in map {
                out.insert(key.clone(), deep_clone(child));
            }
            Value::Mapping(out)
        }
        Value::Record(record) => Value::Record(record.map_values(deep_clone)),
        Value::Null
        | Value::Bool(_)
        | Value::Integer(_)
        | Value::Float(_)
        | Value::String(_) => value.clone(),
    }
}
