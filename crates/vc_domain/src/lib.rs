//! Value objects for mapped domain models.
//!
//! - [`ValueObject`]: equality by an ordered list of components.
//! - [`impl_value_object_eq!`]: derives `PartialEq`, `Eq` and `Hash` from it.
//! - [`CompleteName`]: a personal name with implicit conversions to and
//!   from its text.

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod complete_name;
mod value_object;

// -----------------------------------------------------------------------------
// Exports

pub use complete_name::CompleteName;
pub use value_object::{ValueObject, value_eq, value_hash};
