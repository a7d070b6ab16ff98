//! Human-readable rendering. Mappings print in textual key order so output
//! is stable across runs.

use std::fmt;

use super::{Key, Mapping, Value};

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Bool(b) => write!(f, "{b}"),
            Key::Integer(i) => write!(f, "{i}"),
            Key::String(s) => f.write_str(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => f.write_str(s),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Mapping(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in sorted_entries(map).into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Value::Record(record) => {
                write!(f, "{} {{", record.name())?;
                for (i, (field, value)) in record.fields().enumerate() {
                    f.write_str(if i > 0 { ", " } else { " " })?;
                    write!(f, "{field}: {value}")?;
                }
                if record.values().is_empty() {
                    f.write_str("}")
                } else {
                    f.write_str(" }")
                }
            }
        }
    }
}

fn sorted_entries(map: &Mapping) -> Vec<(&Key, &Value)> {
    let mut entries: Vec<(&Key, &Value)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp_textual(b.0));
    entries
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::value::{Record, RecordSchema};

    #[test]
    fn nested_mapping_renders_sorted() {
        let inner: Value = [("z", Value::from(1)), ("a", Value::from("x"))]
            .into_iter()
            .collect();
        let outer: Value = [("k", inner), ("b", Value::from(vec![Value::Null, Value::from(true)]))]
            .into_iter()
            .collect();
        assert_eq!(outer.to_string(), "{b: [null, true], k: {a: x, z: 1}}");
    }

    #[test]
    fn record_renders_with_name() {
        let schema = Arc::new(RecordSchema::new("User", ["id", "name"]).unwrap());
        let record = Record::new(schema, vec![Value::from(7), Value::from("ann")]).unwrap();
        assert_eq!(Value::from(record).to_string(), "User { id: 7, name: ann }");

        let unit = Record::empty(Arc::new(RecordSchema::new("Unit", Vec::<String>::new()).unwrap()));
        assert_eq!(Value::from(unit).to_string(), "Unit {}");
    }
}
