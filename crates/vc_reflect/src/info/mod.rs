//! Compile-time type information.
//!
//! ## Menu
//!
//! - [`TypePath`]: stable names of a type, [`DynamicTypePath`] for trait objects.
//! - [`Type`]: a `TypeId` together with its names.
//! - [`TypeInfo`]: the shape of a type, one of:
//!     - [`StructInfo`]: named fields, constructors and implicit conversions.
//!     - [`OptionalInfo`]: `Option<T>`, with the inner type.
//!     - [`OpaqueInfo`]: built-in types, scalars carry a [`ScalarKind`].
//! - [`NamedField`]: an exposed field, with its [`FieldAccess`].
//! - [`ConstructorInfo`] and [`ParamInfo`]: public constructors, collected by [`Constructors`].
//! - [`ImplicitConversion`]: a declared one-argument conversion.
//! - [`ReflectKind`]: the kind tag of [`TypeInfo`].
//! - [`Typed`]: static access to [`TypeInfo`], [`DynamicTyped`] for trait objects.

// -----------------------------------------------------------------------------
// Modules

mod constructor_info;
mod conversion;
mod field_info;
mod opaque_info;
mod optional_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use constructor_info::{ConstructorFn, ConstructorInfo, Constructors, ParamInfo};
pub use conversion::ImplicitConversion;
pub use field_info::{FieldAccess, NamedField, names_match};
pub use opaque_info::{OpaqueInfo, ScalarKind};
pub use optional_info::OptionalInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
