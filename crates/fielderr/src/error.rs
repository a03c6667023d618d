//! The annotated Error type and its wrap policy.

use std::error::Error as StdError;
use std::fmt;

use crate::base::{self, Message};
use crate::render::{self, LogValue};
use crate::{BoxError, Field, Key, encode};

/// Field name under which a layer's own message is rendered.
pub const MESSAGE_KEY: &str = "message";

/// An error carrying structured fields on top of a cause.
///
/// Each value is one layer: the wrapped `source`, the fields attached at this
/// layer and, for layers created by wrapping with new fields, the message that
/// introduced them.
pub struct Error {
    source: BoxError,
    fields: Vec<Field>,
    message: Option<String>,
}

impl Error {
    /// Create a new error with the given message and fields.
    pub fn new<I>(message: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        Self::from_source(Box::new(Message::new(message)), fields.into_iter().collect())
    }

    /// Create a new error with a message and no fields.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::from_source(Box::new(Message::new(message)), Vec::new())
    }

    pub(crate) fn from_source(source: BoxError, fields: Vec<Field>) -> Self {
        Self {
            source,
            fields,
            message: None,
        }
    }

    /// Get this layer's message, if it is a message layer.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Get the fields attached at this layer, without the rendered cause.
    pub fn own_fields(&self) -> &[Field] {
        &self.fields
    }

    /// Render this layer for logging.
    ///
    /// Own fields come first, then the layer message, then the cause under
    /// `"error"`. A field-bearing cause renders as a nested object.
    pub fn fields(&self) -> Vec<Field> {
        let mut fields = Vec::with_capacity(self.fields.len() + 2);
        fields.extend(self.fields.iter().cloned());
        if let Some(message) = &self.message {
            fields.push(Field::string(MESSAGE_KEY, message.clone()));
        }
        let source = self.source.as_ref() as &(dyn StdError + 'static);
        fields.push(render::to_field(Some(source)));
        fields
    }

    /// Render this error as a single `"error"` object field.
    pub fn to_field(&self) -> Field {
        self.to_named_field(render::ERROR_KEY)
    }

    pub fn to_named_field(&self, key: impl Into<Key>) -> Field {
        Field::object(key, self.fields())
    }

    /// Encode the rendered fields as a JSON object.
    ///
    /// Falls back to the plain text if encoding fails.
    pub fn to_json(&self) -> String {
        encode::to_json(&self.fields()).unwrap_or_else(|_| self.to_string())
    }

    /// A `tracing` field value recording this error's rendered fields.
    pub fn log_value(&self) -> LogValue {
        tracing::field::display(self.to_field().into_value())
    }

    /// Append fields to this layer in place.
    pub fn append_fields<I>(&mut self, fields: I)
    where
        I: IntoIterator<Item = Field>,
    {
        self.fields.extend(fields);
    }

    /// Attach fields without adding a message layer.
    pub fn with_fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        self.append_fields(fields);
        self
    }

    /// Add a message layer, and optionally fields.
    ///
    /// - No new fields: the message is prefixed onto the existing text and
    ///   the field list is left untouched.
    /// - New fields and none on this layer yet: prefix the text, then attach
    ///   the fields here.
    /// - New fields and this layer already has some: a new outer layer is
    ///   created with this error as its cause, so each field set stays
    ///   attached to the message that introduced it.
    ///
    /// On an outer layer, a wrap without fields prefixes the layer's own
    /// message: wrapping `"wrap2"` with `"wrap3"` leaves `message()` as
    /// `"wrap3: wrap2"` and the text as `"wrap3: wrap2: wrap: e"`.
    pub fn wrap<I>(self, message: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = Field>,
    {
        let message = message.into();
        let fields: Vec<Field> = fields.into_iter().collect();

        if fields.is_empty() {
            tracing::trace!(layer = %message, "prefixing message onto existing layer");
            return self.prefixed(message);
        }

        if self.fields.is_empty() {
            tracing::trace!(layer = %message, count = fields.len(), "attaching fields to bare layer");
            return self.prefixed(message).with_fields(fields);
        }

        tracing::trace!(
            layer = %message,
            count = fields.len(),
            inner = self.fields.len(),
            "nesting new layer"
        );
        Self {
            source: Box::new(self),
            fields,
            message: Some(message).filter(|m| !m.is_empty()),
        }
    }

    /// Prefix `message` onto this layer's text.
    ///
    /// An outer layer takes the prefix on its own message so the nested
    /// cause keeps rendering as an object. Otherwise the source is wrapped.
    fn prefixed(self, message: String) -> Self {
        if message.is_empty() {
            return self;
        }
        let nested = self.source.downcast_ref::<Error>().is_some();
        let Self {
            source,
            fields,
            message: layer,
        } = self;
        match layer {
            Some(layer) => Self {
                source,
                fields,
                message: Some(format!("{message}: {layer}")),
            },
            None if nested => Self {
                source,
                fields,
                message: Some(message),
            },
            None => Self {
                source: base::prefix(source, message),
                fields,
                message: None,
            },
        }
    }

    /// Iterate over this error and its causes, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        std::iter::successors(Some(self as &(dyn StdError + 'static)), |err| (*err).source())
    }

    /// Get the innermost cause.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current = self as &(dyn StdError + 'static);
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }
}

/// Add a message layer to any error. `None` stays `None`.
pub fn wrap<E, I>(err: Option<E>, message: impl Into<String>, fields: I) -> Option<Error>
where
    E: Into<BoxError>,
    I: IntoIterator<Item = Field>,
{
    err.map(|err| wrap_boxed(err.into(), message.into(), fields))
}

/// Attach fields to any error without a message layer. `None` stays `None`.
pub fn with_fields<E, I>(err: Option<E>, fields: I) -> Option<Error>
where
    E: Into<BoxError>,
    I: IntoIterator<Item = Field>,
{
    err.map(|err| with_fields_boxed(err.into(), fields))
}

pub(crate) fn wrap_boxed<I>(err: BoxError, message: String, fields: I) -> Error
where
    I: IntoIterator<Item = Field>,
{
    match err.downcast::<Error>() {
        Ok(err) => (*err).wrap(message, fields),
        Err(err) => Error::from_source(base::prefix(err, message), fields.into_iter().collect()),
    }
}

pub(crate) fn with_fields_boxed<I>(err: BoxError, fields: I) -> Error
where
    I: IntoIterator<Item = Field>,
{
    match err.downcast::<Error>() {
        Ok(err) => (*err).with_fields(fields),
        Err(err) => Error::from_source(err, fields.into_iter().collect()),
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{:#}", self.source)?;
            if let Some(message) = &self.message {
                write!(f, "\n{message}")?;
            }
            return Ok(());
        }

        match &self.message {
            Some(message) => write!(f, "{}: {}", message, self.source),
            None => write!(f, "{}", self.source),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self)?;

        if let Some(message) = &self.message {
            writeln!(f)?;
            writeln!(f, "    Message: {}", message)?;
        }

        if !self.fields.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Fields:")?;
            for field in self.fields.iter().filter(|field| !field.is_skip()) {
                writeln!(f, "        {}", field)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "    Source: {:?}", self.source)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref() as &(dyn StdError + 'static))
    }
}
