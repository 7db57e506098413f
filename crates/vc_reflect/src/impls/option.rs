use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{OptionalInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Optional, ReflectCloneError};
use crate::reflection::impl_reflect_cast_fn;

impl<T: Reflect + Typed> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            let mut path = String::from("core::option::Option<");
            path.push_str(T::type_path());
            path.push('>');
            path
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            let mut name = String::from("Option<");
            name.push_str(T::type_name());
            name.push('>');
            name
        })
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Option"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("core::option")
    }
}

impl<T: Reflect + Typed + Clone> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Optional(OptionalInfo::new::<T>()))
    }
}

impl<T: Reflect + Typed + Clone> Optional for Option<T> {
    #[inline]
    fn value(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn value_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(|value| value as &mut dyn Reflect)
    }
}

impl<T: Reflect + Typed + Clone> Reflect for Option<T> {
    impl_reflect_cast_fn!(Optional);

    #[inline]
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        Ok(Box::new(self.clone()))
    }

    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        let Some(other) = other.downcast_ref::<Self>() else {
            return Some(false);
        };
        match (self, other) {
            (Some(a), Some(b)) => a.reflect_partial_eq(b),
            (None, None) => Some(true),
            _ => Some(false),
        }
    }

    fn reflect_hash(&self) -> Option<u64> {
        let mut hasher = crate::reflect_hasher();
        match self {
            Some(value) => {
                1_u8.hash(&mut hasher);
                hasher.write_u64(value.reflect_hash()?);
            }
            None => 0_u8.hash(&mut hasher),
        }
        Some(hasher.finish())
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => f.debug_tuple("Some").field(&value.as_reflect()).finish(),
            None => f.write_str("None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::ReflectRef;
    use alloc::string::String;

    #[test]
    fn option_paths_and_info() {
        assert_eq!(<Option<i32> as TypePath>::type_name(), "Option<i32>");
        assert_eq!(
            <Option<String> as TypePath>::type_path(),
            "core::option::Option<alloc::string::String>"
        );

        let info = <Option<String> as Typed>::type_info().as_optional().unwrap();
        assert!(info.inner().is::<String>());

        let wrapped = info.wrap(Box::new(String::from("Ana"))).unwrap();
        assert_eq!(wrapped.downcast_ref::<Option<String>>(), Some(&Some(String::from("Ana"))));
        assert!(info.wrap(Box::new(1_i32)).is_err());
        assert!(info.none().downcast_ref::<Option<String>>().unwrap().is_none());
    }

    #[test]
    fn optional_view() {
        let value: Option<i32> = None;
        let ReflectRef::Optional(opt) = value.reflect_ref() else {
            panic!("expected an optional");
        };
        assert!(opt.is_none());
        assert_eq!(Some(1).reflect_partial_eq(&Some(1)), Some(true));
        assert_eq!(Some(1).reflect_partial_eq(&None::<i32>), Some(false));
    }
}
