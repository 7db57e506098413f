use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hasher;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::ops::ReflectCloneError;
use crate::reflection::impl_reflect_cast_fn;

// Collections are opaque: a `Vec<T>` field is assigned as a whole when the
// element types agree, elements are never mapped one by one.

impl<T: Reflect + Typed> TypePath for Vec<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            let mut path = String::from("alloc::vec::Vec<");
            path.push_str(T::type_path());
            path.push('>');
            path
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            let mut name = String::from("Vec<");
            name.push_str(T::type_name());
            name.push('>');
            name
        })
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Vec"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::vec")
    }
}

impl<T: Reflect + Typed + Clone> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl<T: Reflect + Typed + Clone> Reflect for Vec<T> {
    impl_reflect_cast_fn!(Opaque);

    #[inline]
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        Ok(Box::new(self.clone()))
    }

    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        let Some(other) = other.downcast_ref::<Self>() else {
            return Some(false);
        };
        if self.len() != other.len() {
            return Some(false);
        }
        for (a, b) in self.iter().zip(other) {
            let result = a.reflect_partial_eq(b);
            if result != Some(true) {
                return result;
            }
        }
        Some(true)
    }

    fn reflect_hash(&self) -> Option<u64> {
        let mut hasher = crate::reflect_hasher();
        for item in self {
            hasher.write_u64(item.reflect_hash()?);
        }
        hasher.write_usize(self.len());
        Some(hasher.finish())
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(Reflect::as_reflect))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn vec_is_opaque() {
        assert_eq!(<Vec<String> as TypePath>::type_name(), "Vec<String>");
        assert_eq!(<Vec<i32> as Typed>::type_info().kind(), ReflectKind::Opaque);

        let a = vec![1, 2, 3];
        assert_eq!(a.reflect_partial_eq(&vec![1, 2, 3]), Some(true));
        assert_eq!(a.reflect_partial_eq(&vec![1, 2]), Some(false));
        assert_eq!(a.reflect_hash(), vec![1, 2, 3].reflect_hash());
    }
}
