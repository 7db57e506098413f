//! Built-in [`Reflect`](crate::Reflect) implementations and helpers.
//!
//! ## Menu
//!
//! - Scalars: `bool`, `char`, all integers, `f32`, `f64` and `String`.
//! - `Option<T>`: [`ReflectKind::Optional`](crate::info::ReflectKind::Optional).
//! - `Vec<T>`: opaque, assigned as a whole.
//! - [`NonGenericTypeInfoCell`], [`GenericTypeInfoCell`], [`GenericTypePathCell`]:
//!   static storage for `Typed` and `TypePath` impls.
//! - [`struct_partial_eq`], [`struct_hash`], [`struct_debug`]: field-wise
//!   defaults used by `#[derive(Reflect)]`.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod option;
mod scalar;
mod struct_helpers;
mod vec;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};
pub use struct_helpers::{struct_debug, struct_hash, struct_partial_eq};

/// Seed shared by every fixed-state hash container and [`reflect_hasher`](crate::reflect_hasher).
pub(crate) const FIXED_HASH_STATE: foldhash::fast::FixedState =
    foldhash::fast::FixedState::with_seed(0x3C6E_F372_FE94_F82B);
