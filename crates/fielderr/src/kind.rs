//! Field kinds for structured log values

use strum_macros::{Display, IntoStaticStr};

/// The kind of value a [`Field`](crate::Field) carries.
///
/// A log encoder dispatches on this tag the same way it would on a typed
/// field: `Skip` is dropped, `Object` is written as a nested map and `Error`
/// is written as the error's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum FieldKind {
    /// Omit this field from output
    Skip,

    /// Boolean value
    Bool,

    /// Signed integer
    Int,

    /// Unsigned integer
    Uint,

    /// Floating point number
    Float,

    /// Plain string
    String,

    /// Text of an error without structured rendering
    Error,

    /// Nested ordered list of fields
    Object,
}

impl FieldKind {
    /// Returns the field kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if fields of this kind render as a nested object
    pub fn is_structured(&self) -> bool {
        matches!(self, FieldKind::Object)
    }
}
