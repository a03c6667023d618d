//! # fielderr
//!
//! Structured fields on errors, rendered for logging.
//!
//! ## Design Philosophy
//!
//! - **Fields**: attach key/value context at the layer that knows it
//! - **Layers**: wrapping with new fields over a layer that already has some
//!   nests the old layer, so every field stays next to the message that
//!   introduced it
//! - **Text**: `Display` reads like a plain error chain, `"wrap2: wrap: base"`
//! - **Rendering**: any error renders uniformly; annotated errors become nested
//!   objects, anything else becomes plain error text
//!
//! ## Usage
//!
//! ```rust
//! use fielderr::Field;
//!
//! let err = std::io::Error::other("error");
//! let err = fielderr::wrap(
//!     Some(err),
//!     "failed to execute something",
//!     [Field::int("foo", 1), Field::string("bar", "baz")],
//! )
//! .unwrap();
//!
//! assert_eq!(err.to_string(), "failed to execute something: error");
//! assert_eq!(
//!     err.to_json(),
//!     r#"{"foo":1,"bar":"baz","error":"failed to execute something: error"}"#,
//! );
//!
//! tracing::error!(error = err.log_value(), "execution failed");
//! ```
//!
//! ## Principles
//!
//! - `None` stands for "no error": every operation maps it to `None` or empty
//! - Nothing here panics; errors are only constructed and rendered
//! - Foreign errors opt into structured rendering through [`ObjectError`]

mod base;
pub mod encode;
mod error;
mod ext;
mod field;
mod kind;
mod render;
mod wrapper;

use std::fmt;

pub use base::{Context, Message};
pub use error::{Error, MESSAGE_KEY, with_fields, wrap};
pub use ext::ResultExt;
pub use field::{Field, Key, Value};
pub use kind::FieldKind;
pub use render::{
    ERROR_KEY, LogValue, MarshalFields, ObjectError, StructuredError, fields, log_value,
    to_field, to_named_field,
};
pub use wrapper::Wrapper;

/// Boxed base error accepted as a cause.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias using fielderr Error
pub type Result<T> = std::result::Result<T, Error>;

/// Create a new error with the given message and fields.
pub fn new<I>(message: impl Into<String>, fields: I) -> Error
where
    I: IntoIterator<Item = Field>,
{
    Error::new(message, fields)
}

/// Create a plain base error from format arguments.
///
/// The result carries no fields and renders as plain error text. Annotating
/// it with [`wrap`] or [`with_fields`] turns it into an [`Error`].
pub fn errorf(args: fmt::Arguments<'_>) -> Message {
    Message::new(fmt::format(args))
}

/// Create a plain base error from a format string.
///
/// ```rust
/// let err = fielderr::errorf!("retry {} of {}", 2, 3);
/// assert_eq!(err.to_string(), "retry 2 of 3");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::errorf(::std::format_args!($($arg)*))
    };
}
