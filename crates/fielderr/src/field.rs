//! Structured key/value fields attached to errors.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use crate::FieldKind;

/// Field name. Static names are the common case and stay unallocated.
pub type Key = Cow<'static, str>;

/// A structured value carried by a [`Field`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Marker meaning "omit this field from output"
    Skip,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    Str(String),
    /// Text of an error that has no structured rendering
    Error(String),
    /// Nested fields, in insertion order
    Object(Vec<Field>),
}

impl Value {
    /// Get the kind of this value.
    pub fn kind(&self) -> FieldKind {
        match self {
            Value::Skip => FieldKind::Skip,
            Value::Bool(_) => FieldKind::Bool,
            Value::I64(_) => FieldKind::Int,
            Value::U64(_) => FieldKind::Uint,
            Value::F64(_) => FieldKind::Float,
            Value::Str(_) => FieldKind::String,
            Value::Error(_) => FieldKind::Error,
            Value::Object(_) => FieldKind::Object,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Skip => Ok(()),
            Value::Bool(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Str(v) | Value::Error(v) => f.write_str(v),
            Value::Object(fields) => {
                let json = crate::encode::to_json(fields).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::I64(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::U64(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::U64(v)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::U64(v as u64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<Field>> for Value {
    fn from(fields: Vec<Field>) -> Self {
        Value::Object(fields)
    }
}

/// A named structured entry attached to an error for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    key: Key,
    value: Value,
}

impl Field {
    /// Create a field from any value convertible into [`Value`].
    pub fn new(key: impl Into<Key>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn int(key: impl Into<Key>, value: i64) -> Self {
        Self::new(key, Value::I64(value))
    }

    pub fn uint(key: impl Into<Key>, value: u64) -> Self {
        Self::new(key, Value::U64(value))
    }

    pub fn float(key: impl Into<Key>, value: f64) -> Self {
        Self::new(key, Value::F64(value))
    }

    pub fn bool(key: impl Into<Key>, value: bool) -> Self {
        Self::new(key, Value::Bool(value))
    }

    pub fn string(key: impl Into<Key>, value: impl Into<String>) -> Self {
        Self::new(key, Value::Str(value.into()))
    }

    /// Create a nested object field.
    pub fn object(key: impl Into<Key>, fields: Vec<Field>) -> Self {
        Self::new(key, Value::Object(fields))
    }

    /// Create a plain error-text field from any error, ignoring its structure.
    pub fn error(key: impl Into<Key>, err: &dyn StdError) -> Self {
        Self::new(key, Value::Error(err.to_string()))
    }

    /// Create a field that log sinks drop.
    pub fn skip() -> Self {
        Self::new("", Value::Skip)
    }

    /// Get the field name
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the field value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Take the field value
    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn kind(&self) -> FieldKind {
        self.value.kind()
    }

    pub fn is_skip(&self) -> bool {
        matches!(self.value, Value::Skip)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_skip() {
            return Ok(());
        }
        write!(f, "{}: {}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_constructors() {
        assert_eq!(Field::new("n", 1), Field::int("n", 1));
        assert_eq!(Field::new("n", 7u64), Field::uint("n", 7));
        assert_eq!(Field::new("s", "x"), Field::string("s", "x"));
        assert_eq!(Field::new("b", true).kind(), FieldKind::Bool);
        assert_eq!(Field::float("f", 0.5).kind(), FieldKind::Float);
    }

    #[test]
    fn test_owned_key() {
        let key = format!("attempt_{}", 3);
        let field = Field::int(key, 3);
        assert_eq!(field.key(), "attempt_3");
    }

    #[test]
    fn test_error_field_is_plain_text() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let field = Field::error("error", &io_err);
        assert_eq!(field.kind(), FieldKind::Error);
        assert_eq!(field.value(), &Value::Error("missing".to_string()));
    }

    #[test]
    fn test_skip() {
        let field = Field::skip();
        assert!(field.is_skip());
        assert_eq!(field.to_string(), "");
    }

    #[test]
    fn test_display() {
        assert_eq!(Field::int("foo", 1).to_string(), "foo: 1");
        assert_eq!(
            Field::object("ctx", vec![Field::string("bar", "baz")]).to_string(),
            r#"ctx: {"bar":"baz"}"#
        );
    }
}
