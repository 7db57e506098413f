use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// Static access to the [`TypeInfo`] of a type.
///
/// The returned reference lives for the whole program. Implementations
/// build it once, see [`NonGenericTypeInfoCell`](crate::impls::NonGenericTypeInfoCell)
/// and [`GenericTypeInfoCell`](crate::impls::GenericTypeInfoCell).
pub trait Typed: TypePath {
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Object safe version of [`Typed`].
pub trait DynamicTyped {
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
