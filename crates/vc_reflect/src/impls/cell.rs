//! Containers for static storage of type information.
//!
//! A `static` declared inside a generic function is shared by every
//! instantiation, so generic types key their cell by [`TypeId`].
//!
//! - [`NonGenericTypeInfoCell`]: one [`TypeInfo`], backed by [`OnceLock`].
//! - [`GenericTypeInfoCell`]: one [`TypeInfo`] per instantiation.
//! - [`GenericTypePathCell`]: one type path string per instantiation.

use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use foldhash::fast::FixedState;
use hashbrown::HashMap;

use crate::impls::FIXED_HASH_STATE;
use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;
    use alloc::string::String;

    pub trait TypedProperty: Send + Sync + 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

// -----------------------------------------------------------------------------
// NonGenericTypeCell

/// Static storage for a non-generic type's property.
///
/// # Examples
///
/// ```
/// use vc_reflect::impls::NonGenericTypeInfoCell;
/// use vc_reflect::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
///
/// struct Token;
///
/// impl TypePath for Token {
///     fn type_path() -> &'static str { "demo::Token" }
///     fn type_name() -> &'static str { "Token" }
///     fn type_ident() -> &'static str { "Token" }
/// }
///
/// impl Typed for Token {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(core::ptr::eq(Token::type_info(), Token::type_info()));
/// ```
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// See [`NonGenericTypeCell`].
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeCell

/// Static storage for a generic type's property, one entry per instantiation.
///
/// Values are leaked, they live as long as the program.
pub struct GenericTypeCell<T: TypedProperty>(RwLock<HashMap<TypeId, &'static T, FixedState>>);

/// See [`GenericTypeCell`].
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// See [`GenericTypeCell`].
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(HashMap::with_hasher(FIXED_HASH_STATE)))
    }

    /// Returns the entry of `G`, creating it with `f` on first access.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        let cached = self
            .0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied();

        match cached {
            Some(value) => value,
            None => {
                // `f` runs outside the lock, it may recurse into this cell
                // for a nested generic type.
                let value = f();
                *self
                    .0
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .entry(type_id)
                    .or_insert_with(|| Box::leak(Box::new(value)))
            }
        }
    }
}
