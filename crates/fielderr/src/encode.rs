//! Serde encoding of fields.
//!
//! Field lists serialize as maps written entry by entry, so insertion order
//! and duplicate keys survive into the encoded output. Skip markers are
//! dropped.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{Field, Value};

/// An ordered field list viewed as a map.
#[derive(Debug, Clone, Copy)]
pub struct Object<'a>(pub &'a [Field]);

impl Serialize for Object<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for field in self.0.iter().filter(|field| !field.is_skip()) {
            map.serialize_entry(field.key(), field.value())?;
        }
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Skip => serializer.serialize_unit(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::I64(v) => serializer.serialize_i64(*v),
            Value::U64(v) => serializer.serialize_u64(*v),
            Value::F64(v) => serializer.serialize_f64(*v),
            Value::Str(v) | Value::Error(v) => serializer.serialize_str(v),
            Value::Object(fields) => Object(fields).serialize(serializer),
        }
    }
}

/// A single field serializes as a one-entry map, or an empty one when skipped.
impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Object(std::slice::from_ref(self)).serialize(serializer)
    }
}

/// Encode a field list as a JSON object.
pub fn to_json(fields: &[Field]) -> serde_json::Result<String> {
    serde_json::to_string(&Object(fields))
}
