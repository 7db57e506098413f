use core::{error, fmt};

use crate::info::{ConstructorInfo, ImplicitConversion, OpaqueInfo, OptionalInfo};
use crate::info::{ScalarKind, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// The reflected shape of a type or value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// Named fields, see [`Struct`](crate::ops::Struct).
    Struct,
    /// `Option<T>`, see [`Optional`](crate::ops::Optional).
    Optional,
    /// No published structure.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::Optional => f.pad("Optional"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Returned by the `as_*` accessors of [`TypeInfo`] on a kind mismatch.
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time information about a type.
///
/// Obtained through [`Typed::type_info`](crate::info::Typed::type_info)
/// or [`DynamicTyped::reflect_type_info`](crate::info::DynamicTyped::reflect_type_info).
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    Optional(OptionalInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the [`", stringify!($info), "`], or an error for other kinds.")]
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_optional: Optional => OptionalInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::Optional(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Optional(_) => ReflectKind::Optional,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    #[inline]
    pub const fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    /// Public constructors in declaration order.
    ///
    /// `Option<T>` publishes none.
    pub fn constructors(&self) -> &[ConstructorInfo] {
        match self {
            Self::Struct(info) => info.constructors(),
            Self::Opaque(info) => info.constructors(),
            Self::Optional(_) => &[],
        }
    }

    /// Implicit conversions declared on this type.
    pub fn conversions(&self) -> &[ImplicitConversion] {
        match self {
            Self::Struct(info) => info.conversions(),
            Self::Opaque(info) => info.conversions(),
            Self::Optional(_) => &[],
        }
    }

    /// The scalar kind, for built-in value and text types.
    pub const fn scalar(&self) -> Option<ScalarKind> {
        match self {
            Self::Opaque(info) => info.scalar(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::info::{ReflectKind, ScalarKind, Typed};
    use alloc::string::String;

    #[test]
    fn kind_accessors() {
        let info = <Option<i32> as Typed>::type_info();
        assert_eq!(info.kind(), ReflectKind::Optional);
        assert!(info.as_optional().is_ok());

        let err = info.as_struct().unwrap_err();
        assert_eq!(err.expected, ReflectKind::Struct);
        assert_eq!(err.received, ReflectKind::Optional);

        assert_eq!(String::type_info().scalar(), Some(ScalarKind::String));
        assert!(info.scalar().is_none());
        assert!(info.constructors().is_empty());
    }
}
