//! Structural object mapping.
//!
//! [`map`] turns a value of one type into a value of another type by
//! matching attribute names, ignoring case. The destination is populated
//! in one of two ways, see [`Strategy`]:
//!
//! - **Construction**: when the destination publishes a constructor with
//!   parameters, source attributes are bound to parameters by name.
//!   Candidates are tried from the highest arity down and the first one
//!   that can be fully satisfied wins.
//! - **Assignment**: otherwise the destination is default-constructed and
//!   every writable attribute with a matching source attribute is assigned.
//!
//! Each slot is resolved by [`convert::resolve`]: a value of the slot type
//! is used as is, then declared implicit conversions and scalar coercion
//! are tried, and complex values are mapped recursively.
//!
//! Types take part through `vc_reflect`'s `#[derive(Reflect)]`.
//!
//! # Examples
//!
//! ```
//! use vc_map::MapTo;
//! use vc_reflect::derive::Reflect;
//!
//! #[derive(Reflect, Clone)]
//! pub struct Address {
//!     pub street: String,
//!     pub city: String,
//! }
//!
//! #[derive(Reflect, Clone, Default)]
//! #[reflect(default)]
//! pub struct AddressDto {
//!     pub street: String,
//!     pub city: String,
//! }
//!
//! #[derive(Reflect, Clone)]
//! pub struct Customer {
//!     pub name: String,
//!     pub address: Address,
//! }
//!
//! #[derive(Reflect, Clone, Default)]
//! #[reflect(default)]
//! pub struct CustomerDto {
//!     pub name: String,
//!     pub address: AddressDto,
//! }
//!
//! let customer = Customer {
//!     name: "Pedro Costa".into(),
//!     address: Address { street: "Rua das Flores, 123".into(), city: "São Paulo".into() },
//! };
//!
//! let dto: CustomerDto = customer.map_to().unwrap();
//! assert_eq!(dto.name, "Pedro Costa");
//! assert_eq!(dto.address.city, "São Paulo");
//! ```

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod convert;
pub mod describe;

mod assign;
mod construct;
mod diagnostics;
mod error;
mod strategy;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Exports

pub use diagnostics::{SkipReason, SkippedAttribute};
pub use error::{MapError, MapErrorKind};
pub use strategy::{MapTo, Mapper, Strategy, map};
