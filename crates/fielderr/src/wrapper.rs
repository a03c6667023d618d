//! Preset field sets applied to every error a call site creates.

use std::fmt;

use crate::{BoxError, Error, Field};

/// Carries fields appended after the call's own fields on every operation.
///
/// ```rust
/// use fielderr::{Field, Wrapper};
///
/// let w = Wrapper::with([Field::string("component", "loader")]);
/// let err = w.error("not found", [Field::int("id", 4)]);
/// assert_eq!(err.own_fields()[1], Field::string("component", "loader"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wrapper {
    fields: Vec<Field>,
}

impl Wrapper {
    pub fn with<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Create a new error carrying `fields` then the preset fields.
    pub fn error<I>(&self, message: impl Into<String>, fields: I) -> Error
    where
        I: IntoIterator<Item = Field>,
    {
        Error::new(message, self.merged(fields))
    }

    /// Create a formatted error carrying the preset fields.
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> Error {
        Error::from_source(Box::new(crate::errorf(args)), self.fields.clone())
    }

    pub fn wrap<E, I>(&self, err: Option<E>, message: impl Into<String>, fields: I) -> Option<Error>
    where
        E: Into<BoxError>,
        I: IntoIterator<Item = Field>,
    {
        crate::wrap(err, message, self.merged(fields))
    }

    pub fn with_fields<E, I>(&self, err: Option<E>, fields: I) -> Option<Error>
    where
        E: Into<BoxError>,
        I: IntoIterator<Item = Field>,
    {
        crate::with_fields(err, self.merged(fields))
    }

    /// Derive a wrapper carrying these preset fields followed by `fields`.
    pub fn wrapper_with<I>(&self, fields: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        Self {
            fields: self.fields.iter().cloned().chain(fields).collect(),
        }
    }

    fn merged<I>(&self, fields: I) -> Vec<Field>
    where
        I: IntoIterator<Item = Field>,
    {
        fields
            .into_iter()
            .chain(self.fields.iter().cloned())
            .collect()
    }
}
