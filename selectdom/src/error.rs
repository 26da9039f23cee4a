//! Construction-time errors.
//!
//! Everything here signals a host bug and is raised synchronously while
//! building a widget. Rejected runtime operations (disabled values, limit
//! overflows) are reported through return values, never through this type.

use thiserror::Error;

use crate::encode::SEPARATOR;
use crate::field::FieldKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The form has no field with the requested name.
    #[error("no field named `{0}` in the form")]
    MissingField(String),

    /// The backing field exists but is not a plain text field.
    #[error("field `{name}` has kind {kind:?}, expected {expected:?}")]
    WrongFieldKind {
        name: String,
        kind: FieldKind,
        expected: FieldKind,
    },

    /// Two options share the same value.
    #[error("duplicate option value `{0}`")]
    DuplicateValue(String),

    /// A multi-select option value contains the serialization separator.
    #[error("option value `{0}` contains the reserved separator `{SEPARATOR}`")]
    ReservedSeparator(String),
}
