use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{Optional, Struct};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable view of a value through its [`ReflectKind`].
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    Optional(&'a dyn Optional),
    Opaque(&'a dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    pub fn as_struct(self) -> Result<&'a dyn Struct, ReflectKindError> {
        match self {
            Self::Struct(value) => Ok(value),
            _ => Err(ReflectKindError {
                expected: ReflectKind::Struct,
                received: self.kind(),
            }),
        }
    }

    pub fn as_optional(self) -> Result<&'a dyn Optional, ReflectKindError> {
        match self {
            Self::Optional(value) => Ok(value),
            _ => Err(ReflectKindError {
                expected: ReflectKind::Optional,
                received: self.kind(),
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable view of a value through its [`ReflectKind`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    Optional(&'a mut dyn Optional),
    Opaque(&'a mut dyn Reflect),
}

impl<'a> ReflectMut<'a> {
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    pub fn as_struct(self) -> Result<&'a mut dyn Struct, ReflectKindError> {
        match self {
            Self::Struct(value) => Ok(value),
            other => Err(ReflectKindError {
                expected: ReflectKind::Struct,
                received: other.kind(),
            }),
        }
    }
}
