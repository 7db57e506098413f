use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// Stable, human readable names of a type.
///
/// Unlike [`core::any::type_name`], the results are part of the type's
/// contract. They are used in mapping diagnostics, so callers can tell
/// which pair of types failed.
///
/// - [`type_path`](TypePath::type_path): `"my_crate::dto::PersonDto"`
/// - [`type_name`](TypePath::type_name): `"PersonDto"`
/// - [`type_ident`](TypePath::type_ident): `"PersonDto"`, without generics.
/// - [`module_path`](TypePath::module_path): `Some("my_crate::dto")`
///
/// Usually implemented through `#[derive(Reflect)]`.
pub trait TypePath: 'static {
    /// Full path, unique for the type.
    fn type_path() -> &'static str;

    /// Short name with generics.
    fn type_name() -> &'static str;

    /// Short name without generics.
    fn type_ident() -> &'static str;

    /// Module path, `None` for primitives.
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Object safe version of [`TypePath`].
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;

    /// See [`TypePath::type_ident`].
    fn reflect_type_ident(&self) -> &'static str;

    /// See [`TypePath::module_path`].
    fn reflect_module_path(&self) -> Option<&'static str>;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }

    #[inline]
    fn reflect_type_ident(&self) -> &'static str {
        Self::type_ident()
    }

    #[inline]
    fn reflect_module_path(&self) -> Option<&'static str> {
        Self::module_path()
    }
}

// -----------------------------------------------------------------------------
// Type

/// A [`TypeId`] together with the [`TypePath`] functions of the same type.
///
/// Two `Type`s are equal when their ids are equal.
#[derive(Copy, Clone)]
pub struct Type {
    id: TypeId,
    path: fn() -> &'static str,
    name: fn() -> &'static str,
    ident: fn() -> &'static str,
    module_path: fn() -> Option<&'static str>,
}

impl Type {
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: T::type_path,
            name: T::type_name,
            ident: T::type_ident,
            module_path: T::module_path,
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    #[inline]
    pub fn path(&self) -> &'static str {
        (self.path)()
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        (self.name)()
    }

    #[inline]
    pub fn ident(&self) -> &'static str {
        (self.ident)()
    }

    #[inline]
    pub fn module_path(&self) -> Option<&'static str> {
        (self.module_path)()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl core::hash::Hash for Type {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Forwards the [`Type`] accessors of an info struct.
macro_rules! impl_type_fn {
    ($field:ident) => {
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        $crate::info::impl_type_fn!();
    };
    () => {
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.ty().id() == ::core::any::TypeId::of::<T>()
        }

        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.ty().name()
        }
    };
}

pub(crate) use impl_type_fn;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Type;
    use alloc::string::String;

    #[test]
    fn type_equality_follows_type_id() {
        let a = Type::of::<String>();
        let b = Type::of::<String>();
        let c = Type::of::<i32>();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.is::<String>());
        assert_eq!(a.name(), "String");
        assert_eq!(c.path(), "i32");
        assert_eq!(c.module_path(), None);
    }
}
