//! Compile-time generated type descriptors for structural mapping.
//!
//! Rust has no runtime reflection, so this crate publishes the shape of a
//! type through `#[derive(Reflect)]`:
//!
//! - [`info`]: static descriptors. [`TypeInfo`](info::TypeInfo), fields,
//!   constructors and implicit conversions.
//! - [`Reflect`]: the object-safe value interface, with downcasting.
//! - [`ops`]: kind-specific access ([`Struct`](ops::Struct),
//!   [`Optional`](ops::Optional)) and the argument list used to invoke
//!   reflected constructors.
//! - [`impls`]: implementations for primitives, `String`, `Option<T>` and
//!   `Vec<T>`, plus helpers used by the derive macro.
//!
//! # Examples
//!
//! ```
//! use vc_reflect::derive::{Reflect, reflect_constructors};
//! use vc_reflect::info::{TypeInfo, Typed};
//!
//! #[derive(Reflect, Clone)]
//! #[reflect(constructors)]
//! pub struct Point {
//!     pub x: i32,
//!     pub y: i32,
//! }
//!
//! #[reflect_constructors]
//! impl Point {
//!     pub fn new(x: i32, y: i32) -> Self {
//!         Self { x, y }
//!     }
//! }
//!
//! let TypeInfo::Struct(info) = Point::type_info() else { unreachable!() };
//! assert_eq!(info.field_names(), ["x", "y"]);
//! assert_eq!(info.constructors()[0].arity(), 2);
//! ```

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `::vc_reflect::...` paths, which must also resolve
// inside this crate (unit tests and doctests).
extern crate self as vc_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod impls;
pub mod info;
pub mod ops;

mod reflection;

// -----------------------------------------------------------------------------
// Exports

pub use reflection::{Reflect, reflect_hasher};

/// Derive macros and attribute macros.
///
/// - [`Reflect`](derive::Reflect): publishes fields, constructors and conversions.
/// - [`reflect_constructors`](derive::reflect_constructors): publishes the
///   constructors of an inherent `impl` block.
pub mod derive {
    pub use vc_reflect_derive::{Reflect, reflect_constructors};
}

/// The most commonly used items.
pub mod prelude {
    pub use crate::Reflect;
    pub use crate::derive::{Reflect, reflect_constructors};
    pub use crate::info::{DynamicTypePath, DynamicTyped, TypeInfo, TypePath, Typed};
    pub use crate::ops::{DynamicStruct, Struct};
}
