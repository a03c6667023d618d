//! Plain base errors used for textual layering.
//!
//! These carry text only. Fields always live on [`Error`](crate::Error).

use std::error::Error as StdError;
use std::fmt;

use crate::BoxError;

/// A root error made of a single message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for Message {}

/// A message prefixed onto a cause, displayed as `"message: cause"`.
///
/// The alternate form (`{:#}`) prints the cause first and then this message on
/// its own line, so a chain reads from the root upward.
#[derive(Debug)]
pub struct Context {
    message: String,
    source: BoxError,
}

impl Context {
    pub fn new(message: impl Into<String>, source: BoxError) -> Self {
        Self {
            message: message.into(),
            source,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{:#}\n{}", self.source, self.message)
        } else {
            write!(f, "{}: {}", self.message, self.source)
        }
    }
}

impl StdError for Context {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref() as &(dyn StdError + 'static))
    }
}

/// Prefix `message` onto `source`. An empty message leaves `source` as is.
pub(crate) fn prefix(source: BoxError, message: String) -> BoxError {
    if message.is_empty() {
        return source;
    }
    Box::new(Context::new(message, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_display() {
        let err = prefix(Box::new(Message::new("base")), "wrap".to_string());
        assert_eq!(err.to_string(), "wrap: base");
        assert_eq!(format!("{err:#}"), "base\nwrap");
    }

    #[test]
    fn test_empty_prefix_is_noop() {
        let err = prefix(Box::new(Message::new("base")), String::new());
        assert!(err.downcast_ref::<Message>().is_some());
        assert_eq!(err.to_string(), "base");
    }

    #[test]
    fn test_context_source() {
        let err = Context::new("wrap", Box::new(Message::new("base")));
        let source = err.source().unwrap();
        assert_eq!(source.downcast_ref::<Message>().unwrap().message(), "base");
    }
}
