use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind, TypeInfo};
use crate::ops::{ReflectCloneError, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// A value whose shape can be inspected at runtime.
///
/// Usually implemented through `#[derive(Reflect)]`. Built-in impls exist
/// for primitives, `String`, `Option<T>` and `Vec<T>`.
///
/// The trait is object safe. Mapping code works with `&dyn Reflect` and
/// `Box<dyn Reflect>`, and recovers concrete types with
/// [`downcast_ref`](dyn Reflect::downcast_ref) or [`take`](dyn Reflect::take).
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// The [`TypeId`] of the underlying value.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// The [`TypeInfo`] of the type this value stands for.
    ///
    /// `None` for values without a declared type, such as an anonymous
    /// [`DynamicStruct`](crate::ops::DynamicStruct).
    #[inline]
    fn represented_type_info(&self) -> Option<&'static TypeInfo> {
        Some(self.reflect_type_info())
    }

    /// Replaces `self` with `value` if both have the same type.
    ///
    /// On mismatch `value` is handed back unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let mut x = 1_i32;
    /// assert!(x.set(Box::new(5_i32)).is_ok());
    /// assert_eq!(x, 5);
    ///
    /// assert!(x.set(Box::new(5_u8)).is_err());
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    fn reflect_kind(&self) -> ReflectKind;

    fn reflect_ref(&self) -> ReflectRef<'_>;

    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Clones the value into a new box of the same concrete type.
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError>;

    /// Returns a "partial equality" comparison result.
    ///
    /// `None` if the type does not support equality testing. Derived structs
    /// compare field by field unless `#[reflect(partial_eq)]` selects their
    /// [`PartialEq`] impl.
    #[inline]
    fn reflect_partial_eq(&self, _other: &dyn Reflect) -> Option<bool> {
        None
    }

    /// Returns a hash of the value computed with [`reflect_hasher`](crate::reflect_hasher).
    ///
    /// `None` if the type does not support hashing.
    #[inline]
    fn reflect_hash(&self) -> Option<u64> {
        None
    }

    /// Debug formatter for the value.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Struct(data) => crate::impls::struct_debug(data, f),
            ReflectRef::Optional(data) => match data.value() {
                Some(value) => f.debug_tuple("Some").field(&value).finish(),
                None => f.write_str("None"),
            },
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10_i32.into_boxed_reflect();
    /// assert_eq!(x.downcast_ref::<i32>(), Some(&10));
    /// assert_eq!(x.downcast_ref::<u32>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        Ok(any
            .downcast::<T>()
            .unwrap_or_else(|_| unreachable!("type is already checked")))
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x: Box<dyn Reflect> = String::from("Ana").into_boxed_reflect();
    /// let x = x.take::<String>().unwrap();
    /// assert_eq!(x, "Ana");
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements `set`, `reflect_kind`, `reflect_ref` and `reflect_mut`.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
