//! The skipped-attribute report of the mutable path.

use alloc::boxed::Box;
use core::fmt;

use crate::MapError;

// -----------------------------------------------------------------------------
// SkipReason

/// Why a matched source value could not be used for a destination slot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SkipReason {
    /// No declared conversion or scalar coercion turns the value into the slot type.
    NotConvertible {
        source_type: &'static str,
        target_type: &'static str,
    },
    /// The value could not be cloned out of the source.
    NotCloneable { source_type: &'static str },
    /// The nested mapping of a complex value failed.
    NestedMapping(Box<MapError>),
    /// The destination refused the resolved value.
    Rejected {
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConvertible {
                source_type,
                target_type,
            } => write!(f, "`{source_type}` is not convertible to `{target_type}`"),
            Self::NotCloneable { source_type } => write!(f, "`{source_type}` is not cloneable"),
            Self::NestedMapping(err) => write!(f, "nested mapping failed: {err}"),
            Self::Rejected { expected, found } => {
                write!(f, "the slot expects `{expected}`, got `{found}`")
            }
        }
    }
}

// -----------------------------------------------------------------------------
// SkippedAttribute

/// A destination attribute left at its default although the source had a
/// matching attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedAttribute {
    pub destination_type: &'static str,
    pub attribute: &'static str,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}::{}` skipped: {}",
            self.destination_type, self.attribute, self.reason
        )
    }
}
