use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, ScalarKind, TypeInfo, TypePath, Typed};
use crate::ops::ReflectCloneError;
use crate::reflection::impl_reflect_cast_fn;

/// Implements `TypePath`, `Typed` and `Reflect` for a scalar type.
///
/// `$key` turns `&Self` into a hashable value, floats hash their bits.
macro_rules! impl_reflect_scalar {
    ($ty:ident, $kind:ident) => {
        impl_reflect_scalar!($ty, $kind, stringify!($ty), stringify!($ty), None, |v: &$ty| *v);
    };
    ($ty:ty, $kind:ident, $path:expr, $name:expr, $module:expr, $key:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                $module
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::Opaque(OpaqueInfo::new::<Self>().with_scalar(ScalarKind::$kind))
                })
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!(Opaque);

            #[inline]
            fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
                Ok(Box::new(Clone::clone(self)))
            }

            fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
                match value.downcast_ref::<Self>() {
                    Some(value) => Some(PartialEq::eq(self, value)),
                    None => Some(false),
                }
            }

            fn reflect_hash(&self) -> Option<u64> {
                let mut hasher = crate::reflect_hasher();
                ($key)(self).hash(&mut hasher);
                Some(hasher.finish())
            }

            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }
    };
}

impl_reflect_scalar!(bool, Bool);
impl_reflect_scalar!(char, Char);
impl_reflect_scalar!(i8, I8);
impl_reflect_scalar!(i16, I16);
impl_reflect_scalar!(i32, I32);
impl_reflect_scalar!(i64, I64);
impl_reflect_scalar!(i128, I128);
impl_reflect_scalar!(isize, Isize);
impl_reflect_scalar!(u8, U8);
impl_reflect_scalar!(u16, U16);
impl_reflect_scalar!(u32, U32);
impl_reflect_scalar!(u64, U64);
impl_reflect_scalar!(u128, U128);
impl_reflect_scalar!(usize, Usize);
impl_reflect_scalar!(f32, F32, "f32", "f32", None, |v: &f32| v.to_bits());
impl_reflect_scalar!(f64, F64, "f64", "f64", None, |v: &f64| v.to_bits());
impl_reflect_scalar!(
    String,
    String,
    "alloc::string::String",
    "String",
    Some("alloc::string"),
    String::as_str
);

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ScalarKind, TypePath, Typed};
    use alloc::string::String;

    #[test]
    fn scalar_kinds() {
        assert_eq!(i32::type_info().scalar(), Some(ScalarKind::I32));
        assert_eq!(f64::type_info().scalar(), Some(ScalarKind::F64));
        assert_eq!(String::type_info().scalar(), Some(ScalarKind::String));
        assert_eq!(<String as TypePath>::type_path(), "alloc::string::String");
        assert_eq!(<u8 as TypePath>::type_name(), "u8");
    }

    #[test]
    fn scalar_equality_and_hash() {
        let a = String::from("João");
        let b = String::from("João");
        assert_eq!(a.reflect_partial_eq(&b), Some(true));
        assert_eq!(a.reflect_partial_eq(&1_i32), Some(false));
        assert_eq!(a.reflect_hash(), b.reflect_hash());
        assert_eq!(3.14_f64.reflect_hash(), 3.14_f64.reflect_hash());
    }
}
