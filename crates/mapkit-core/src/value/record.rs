//! Fixed-shape records with caller-supplied schemas.

use std::sync::Arc;

use super::Value;
use crate::errors::RecordError;

/// Field descriptor for one record type: the record name and its ordered,
/// unique field names.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct RecordSchema {
    name: String,
    fields: Vec<String>,
}

impl RecordSchema {
    pub fn new<I, S>(name: impl Into<String>, fields: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let mut declared: Vec<String> = Vec::new();
        for field in fields {
            let field = field.into();
            if declared.contains(&field) {
                return Err(RecordError::DuplicateField {
                    record: name,
                    field,
                });
            }
            declared.push(field);
        }
        Ok(Self {
            name,
            fields: declared,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn index_of(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == field)
    }
}

/// An instance of a record type. Holds exactly one value per declared field;
/// the field set cannot change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: Arc<RecordSchema>,
    values: Vec<Value>,
}

impl Record {
    /// Build a record from values given in declared field order.
    pub fn new(schema: Arc<RecordSchema>, values: Vec<Value>) -> Result<Self, RecordError> {
        if values.len() != schema.len() {
            return Err(RecordError::FieldCountMismatch {
                record: schema.name().to_string(),
                expected: schema.len(),
                found: values.len(),
            });
        }
        Ok(Self { schema, values })
    }

    /// A record with every field set to `Null`.
    pub fn empty(schema: Arc<RecordSchema>) -> Self {
        let values = vec![Value::Null; schema.len()];
        Self { schema, values }
    }

    pub fn schema(&self) -> &Arc<RecordSchema> {
        &self.schema
    }

    pub fn name(&self) -> &str {
        self.schema.name()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.schema.index_of(field).map(|i| &self.values[i])
    }

    /// Replace a field's value, returning the previous one.
    pub fn set(&mut self, field: &str, value: Value) -> Result<Value, RecordError> {
        let index = self
            .schema
            .index_of(field)
            .ok_or_else(|| RecordError::UnknownField {
                record: self.schema.name().to_string(),
                field: field.to_string(),
            })?;
        Ok(std::mem::replace(&mut self.values[index], value))
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Field slots in declared order. A slice, so the field count is fixed.
    pub fn values_mut(&mut self) -> &mut [Value] {
        &mut self.values
    }

    /// `(field name, value)` pairs in declared order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.schema
            .fields()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    /// A new record of the same type with every field mapped through `f`.
    pub fn map_values(&self, f: impl FnMut(&Value) -> Value) -> Self {
        Self {
            schema: Arc::clone(&self.schema),
            values: self.values.iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> Arc<RecordSchema> {
        Arc::new(RecordSchema::new("Point", ["x", "y"]).unwrap())
    }

    #[test]
    fn empty_record_has_null_slots() {
        let record = Record::empty(point());
        assert_eq!(record.values(), &[Value::Null, Value::Null]);
    }

    #[test]
    fn map_values_keeps_schema() {
        let record = Record::new(point(), vec![Value::from(1), Value::from(2)]).unwrap();
        let doubled = record.map_values(|v| Value::from(v.as_i64().unwrap() * 2));
        assert!(Arc::ptr_eq(record.schema(), doubled.schema()));
        assert_eq!(doubled.get("y"), Some(&Value::from(4)));
    }
}
