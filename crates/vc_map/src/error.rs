use thiserror::Error;
use vc_reflect::ops::ConstructError;

// -----------------------------------------------------------------------------
// Error

/// A mapping call that could not produce a destination value.
///
/// Per-attribute conversion failures are not errors: the immutable path
/// moves on to the next constructor, the mutable path leaves the attribute
/// at its default and records a [`SkippedAttribute`](crate::SkippedAttribute).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MapError {
    #[error(
        "cannot map `{source_type}` to `{destination_type}` with the available constructors, \
         check that attribute names match the constructor parameter names (case insensitive)"
    )]
    NoViableConstructor {
        source_type: &'static str,
        destination_type: &'static str,
    },

    #[error(
        "cannot create an instance of `{destination_type}`, \
         make sure the type publishes a parameterless constructor"
    )]
    NotDefaultConstructible {
        destination_type: &'static str,
        #[source]
        reason: ConstructError,
    },

    #[error("cannot map an absent value to `{destination_type}`")]
    NullSource { destination_type: &'static str },

    #[error("type mismatch: expected `{expected}`, found `{found}`")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },
}

/// The category of a [`MapError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MapErrorKind {
    NoViableConstructor,
    NotDefaultConstructible,
    NullSource,
    UnexpectedType,
}

impl MapError {
    pub const fn kind(&self) -> MapErrorKind {
        match self {
            Self::NoViableConstructor { .. } => MapErrorKind::NoViableConstructor,
            Self::NotDefaultConstructible { .. } => MapErrorKind::NotDefaultConstructible,
            Self::NullSource { .. } => MapErrorKind::NullSource,
            Self::UnexpectedType { .. } => MapErrorKind::UnexpectedType,
        }
    }
}
