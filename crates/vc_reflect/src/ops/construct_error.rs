use alloc::string::{String, ToString};
use core::fmt;

use crate::info::TypePath;

/// Failure while invoking a reflected constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructError {
    /// The type publishes no parameterless constructor.
    NoParameterless { type_path: &'static str },
    /// The argument count differs from the parameter count.
    ArityMismatch {
        type_path: &'static str,
        expected: usize,
        received: usize,
    },
    /// No argument at `index`, or it was already taken.
    MissingArgument { index: usize },
    /// The argument at `index` has another type than the parameter.
    MismatchedArgument {
        index: usize,
        expected: &'static str,
        received: &'static str,
    },
    /// The constructor body returned an error.
    Rejected {
        type_path: &'static str,
        reason: String,
    },
}

impl ConstructError {
    /// Wraps the error returned by a fallible constructor of `T`.
    pub fn rejected<T: TypePath + ?Sized>(reason: impl fmt::Display) -> Self {
        Self::Rejected {
            type_path: T::type_path(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for ConstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoParameterless { type_path } => {
                write!(f, "`{type_path}` has no parameterless constructor")
            }
            Self::ArityMismatch {
                type_path,
                expected,
                received,
            } => write!(
                f,
                "constructor of `{type_path}` takes {expected} argument(s), received {received}"
            ),
            Self::MissingArgument { index } => write!(f, "missing argument #{index}"),
            Self::MismatchedArgument {
                index,
                expected,
                received,
            } => write!(
                f,
                "argument #{index} mismatched: expected `{expected}`, received `{received}`"
            ),
            Self::Rejected { type_path, reason } => {
                write!(f, "constructor of `{type_path}` failed: {reason}")
            }
        }
    }
}

impl core::error::Error for ConstructError {}
