//! JSON boundary: text <-> `Value`.
//!
//! Parsing goes through `serde_json::Value`. Objects become mappings with
//! string keys, integral numbers that fit in `i64` become `Integer`, every
//! other number becomes `Float`.

use serde_json::{Map as JsonMap, Number, Value as Json};
use ::tracing::debug;

use crate::errors::CodecError;
use crate::value::{Key, Mapping, Value};

/// Parse a JSON document whose top level is an object.
pub fn json_to_map(text: &str) -> Result<Mapping, CodecError> {
    match json_to_value(text)? {
        Value::Mapping(map) => Ok(map),
        other => {
            debug!(found = other.kind().name(), "rejected non-object JSON document");
            Err(CodecError::NotAnObject {
                found: json_kind_name(&other),
            })
        }
    }
}

/// Render a mapping as compact JSON.
pub fn map_to_json(map: &Mapping) -> Result<String, CodecError> {
    let json = mapping_to_json(map)?;
    serde_json::to_string(&Json::Object(json)).map_err(|e| CodecError::Unrepresentable {
        message: e.to_string(),
    })
}

/// Parse any JSON document.
pub fn json_to_value(text: &str) -> Result<Value, CodecError> {
    let json: Json = serde_json::from_str(text).map_err(|e| {
        debug!(line = e.line(), column = e.column(), "rejected malformed JSON");
        CodecError::from(e)
    })?;
    Ok(Value::from(json))
}

/// Render any value as compact JSON.
pub fn value_to_json(value: &Value) -> Result<String, CodecError> {
    let json = Json::try_from(value)?;
    serde_json::to_string(&json).map_err(|e| CodecError::Unrepresentable {
        message: e.to_string(),
    })
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                // u64 beyond i64::MAX and every non-integral number
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Sequence(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(k, v)| (Key::String(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<&Value> for Json {
    type Error = CodecError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Integer(i) => Json::Number(Number::from(*i)),
            Value::Float(f) => Json::Number(Number::from_f64(*f).ok_or_else(|| {
                CodecError::Unrepresentable {
                    message: format!("non-finite float {f}"),
                }
            })?),
            Value::String(s) => Json::String(s.clone()),
            Value::Sequence(items) => Json::Array(
                items
                    .iter()
                    .map(Json::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Value::Mapping(map) => Json::Object(mapping_to_json(map)?),
            Value::Record(record) => {
                let mut object = JsonMap::with_capacity(record.values().len());
                for (field, value) in record.fields() {
                    object.insert(field.to_string(), Json::try_from(value)?);
                }
                Json::Object(object)
            }
        })
    }
}

fn mapping_to_json(map: &Mapping) -> Result<JsonMap<String, Json>, CodecError> {
    let mut object = JsonMap::with_capacity(map.len());
    for (key, value) in map {
        let text = key.to_string();
        if object.contains_key(&text) {
            return Err(CodecError::Unrepresentable {
                message: format!("more than one key renders as \"{text}\""),
            });
        }
        object.insert(text, Json::try_from(value)?);
    }
    Ok(object)
}

/// Names the JSON type of a decoded value for error messages.
fn json_kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Integer(_) | Value::Float(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "array",
        Value::Mapping(_) | Value::Record(_) => "object",
    }
}
