use alloc::borrow::Cow;
use core::fmt;

/// Failure of [`Reflect::reflect_clone`](crate::Reflect::reflect_clone).
#[derive(Debug)]
pub enum ReflectCloneError {
    /// A field of an otherwise cloneable value cannot be cloned.
    FieldNotCloneable {
        type_path: Cow<'static, str>,
        field: Cow<'static, str>,
    },
}

impl fmt::Display for ReflectCloneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldNotCloneable { type_path, field } => {
                write!(f, "field `{type_path}::{field}` cannot be cloned by reflection")
            }
        }
    }
}

impl core::error::Error for ReflectCloneError {}
