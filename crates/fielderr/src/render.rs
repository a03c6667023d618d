//! Rendering of arbitrary errors as log fields.
//!
//! Any error can be rendered without branching on its concrete type. Errors
//! with the [`MarshalFields`] capability become nested objects, everything
//! else becomes a plain error-text field.

use std::error::Error as StdError;
use std::fmt;

use crate::{Error, Field, Key, Value};

/// Field name used by [`to_field`].
pub const ERROR_KEY: &str = "error";

/// A `tracing` field value. Objects record as JSON, errors as their text.
pub type LogValue = tracing::field::DisplayValue<Value>;

/// Capability of an error to render itself as an ordered field list.
pub trait MarshalFields {
    fn marshal_fields(&self) -> Vec<Field>;
}

impl MarshalFields for Error {
    fn marshal_fields(&self) -> Vec<Field> {
        self.fields()
    }
}

/// Errors that can be plugged in through [`ObjectError`].
pub trait StructuredError: MarshalFields + StdError + Send + Sync + 'static {
    fn as_error(&self) -> &(dyn StdError + 'static);
}

impl<T> StructuredError for T
where
    T: MarshalFields + StdError + Send + Sync + 'static,
{
    fn as_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

/// Adapter registering a foreign error for structured rendering.
///
/// Display and `source` are forwarded to the inner error, so wrapping it does
/// not add a layer to the text or the cause chain.
pub struct ObjectError {
    inner: Box<dyn StructuredError>,
}

impl ObjectError {
    pub fn new<E: StructuredError>(err: E) -> Self {
        Self {
            inner: Box::new(err),
        }
    }

    pub fn inner(&self) -> &(dyn StdError + 'static) {
        self.inner.as_error()
    }
}

impl MarshalFields for ObjectError {
    fn marshal_fields(&self) -> Vec<Field> {
        self.inner.marshal_fields()
    }
}

impl fmt::Display for ObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}

impl fmt::Debug for ObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

impl StdError for ObjectError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source()
    }
}

fn as_marshaler<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a dyn MarshalFields> {
    if let Some(err) = err.downcast_ref::<Error>() {
        return Some(err);
    }
    err.downcast_ref::<ObjectError>()
        .map(|err| err as &dyn MarshalFields)
}

/// Render an error under `"error"`. `None` yields a skip marker.
pub fn to_field(err: Option<&(dyn StdError + 'static)>) -> Field {
    to_named_field(ERROR_KEY, err)
}

/// Render an error under `key`. `None` yields a skip marker.
pub fn to_named_field(key: impl Into<Key>, err: Option<&(dyn StdError + 'static)>) -> Field {
    let Some(err) = err else {
        return Field::skip();
    };
    match as_marshaler(err) {
        Some(object) => Field::object(key, object.marshal_fields()),
        None => Field::error(key, err),
    }
}

/// Extract the accumulated field list of an error.
///
/// A plain error yields a single error-text field, `None` yields nothing.
pub fn fields(err: Option<&(dyn StdError + 'static)>) -> Vec<Field> {
    let Some(err) = err else {
        return Vec::new();
    };
    match as_marshaler(err) {
        Some(object) => object.marshal_fields(),
        None => vec![Field::error(ERROR_KEY, err)],
    }
}

/// A `tracing` value for an error, `None` when there is nothing to record.
pub fn log_value(err: Option<&(dyn StdError + 'static)>) -> Option<LogValue> {
    let field = to_field(err);
    if field.is_skip() {
        return None;
    }
    Some(tracing::field::display(field.into_value()))
}
