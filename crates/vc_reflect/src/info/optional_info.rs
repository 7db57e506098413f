use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};

/// `Option<T>`, the reflected form of a nullable value.
///
/// Besides the inner type, it keeps two type-erased functions so a value of
/// the option type can be built from a boxed `T` without naming `T`.
#[derive(Clone)]
pub struct OptionalInfo {
    ty: Type,
    inner: Type,
    inner_info: fn() -> &'static TypeInfo,
    wrap: fn(Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>>,
    none: fn() -> Box<dyn Reflect>,
}

impl OptionalInfo {
    impl_type_fn!(ty);

    pub fn new<T>() -> Self
    where
        T: Reflect + Typed,
        Option<T>: Reflect + TypePath,
    {
        fn wrap<T: Reflect>(value: Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>>
        where
            Option<T>: Reflect,
        {
            let value = value.take::<T>()?;
            Ok(Box::new(Some(value)))
        }

        fn none<T: Reflect>() -> Box<dyn Reflect>
        where
            Option<T>: Reflect,
        {
            Box::new(None::<T>)
        }

        Self {
            ty: Type::of::<Option<T>>(),
            inner: Type::of::<T>(),
            inner_info: T::type_info,
            wrap: wrap::<T>,
            none: none::<T>,
        }
    }

    #[inline]
    pub const fn inner(&self) -> &Type {
        &self.inner
    }

    #[inline]
    pub fn inner_info(&self) -> &'static TypeInfo {
        (self.inner_info)()
    }

    /// Builds `Some(value)`, or returns `value` if it is not of the inner type.
    #[inline]
    pub fn wrap(&self, value: Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>> {
        (self.wrap)(value)
    }

    /// Builds `None`.
    #[inline]
    pub fn none(&self) -> Box<dyn Reflect> {
        (self.none)()
    }
}

impl core::fmt::Debug for OptionalInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OptionalInfo")
            .field("ty", &self.ty)
            .field("inner", &self.inner)
            .finish()
    }
}
