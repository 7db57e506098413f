//! Kind-specific access to reflected values.
//!
//! ## Menu
//!
//! - [`ReflectRef`] and [`ReflectMut`]: a value viewed through its kind.
//! - [`Struct`]: named field access, [`StructFieldIter`] iterates the values.
//! - [`DynamicStruct`]: a struct assembled at runtime, used for anonymous values.
//! - [`Optional`]: access to the content of an `Option<T>`.
//! - [`ArgList`]: bound arguments for a reflected constructor.
//! - [`ConstructError`]: failures while invoking a reflected constructor.
//! - [`ReflectCloneError`]: failures of [`Reflect::reflect_clone`](crate::Reflect::reflect_clone).

// -----------------------------------------------------------------------------
// Modules

mod args;
mod clone_error;
mod construct_error;
mod dynamic_struct;
mod kind;
mod optional;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use args::ArgList;
pub use clone_error::ReflectCloneError;
pub use construct_error::ConstructError;
pub use dynamic_struct::DynamicStruct;
pub use kind::{ReflectMut, ReflectRef};
pub use optional::Optional;
pub use struct_ops::{Struct, StructFieldIter};
