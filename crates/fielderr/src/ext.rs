//! Annotation helpers on `Result`.

use crate::error::{with_fields_boxed, wrap_boxed};
use crate::{BoxError, Error, Field};

/// Annotate the error of a `Result`; an `Ok` passes through untouched.
pub trait ResultExt<T> {
    fn wrap<I>(self, message: impl Into<String>, fields: I) -> Result<T, Error>
    where
        I: IntoIterator<Item = Field>;

    fn with_fields<I>(self, fields: I) -> Result<T, Error>
    where
        I: IntoIterator<Item = Field>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn wrap<I>(self, message: impl Into<String>, fields: I) -> Result<T, Error>
    where
        I: IntoIterator<Item = Field>,
    {
        self.map_err(|err| wrap_boxed(err.into(), message.into(), fields))
    }

    fn with_fields<I>(self, fields: I) -> Result<T, Error>
    where
        I: IntoIterator<Item = Field>,
    {
        self.map_err(|err| with_fields_boxed(err.into(), fields))
    }
}
