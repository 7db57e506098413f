use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::info::{Type, TypePath};

/// A user-declared, one-argument conversion between two specific types.
///
/// Declared on either side of the pair with `#[reflect(into(..))]` or
/// `#[reflect(from(..))]`, and backed by the type's [`From`] impls.
///
/// # Examples
///
/// ```
/// use vc_reflect::Reflect;
/// use vc_reflect::info::ImplicitConversion;
///
/// let widen = ImplicitConversion::new::<u8, u32>();
/// let wide = widen.apply(&7_u8).unwrap();
/// assert_eq!(wide.downcast_ref::<u32>(), Some(&7));
///
/// // Only the declared source type is accepted.
/// assert!(widen.apply(&7_i64).is_none());
/// ```
#[derive(Clone, Copy)]
pub struct ImplicitConversion {
    source: Type,
    target: Type,
    func: fn(&dyn Reflect) -> Option<Box<dyn Reflect>>,
}

impl ImplicitConversion {
    /// Declares `S -> T` through `S: Into<T>`.
    pub fn new<S, T>() -> Self
    where
        S: Reflect + TypePath + Clone + Into<T>,
        T: Reflect + TypePath,
    {
        fn convert<S, T>(value: &dyn Reflect) -> Option<Box<dyn Reflect>>
        where
            S: Reflect + Clone + Into<T>,
            T: Reflect,
        {
            let value = value.downcast_ref::<S>()?;
            Some(Box::new(Into::<T>::into(value.clone())))
        }

        Self {
            source: Type::of::<S>(),
            target: Type::of::<T>(),
            func: convert::<S, T>,
        }
    }

    #[inline]
    pub const fn source(&self) -> &Type {
        &self.source
    }

    #[inline]
    pub const fn target(&self) -> &Type {
        &self.target
    }

    /// Returns `true` if this conversion turns `source` values into `target` values.
    #[inline]
    pub fn converts(&self, source: &Type, target: &Type) -> bool {
        self.source == *source && self.target == *target
    }

    /// Applies the conversion, `None` if `value` is not of the source type.
    #[inline]
    pub fn apply(&self, value: &dyn Reflect) -> Option<Box<dyn Reflect>> {
        (self.func)(value)
    }
}

impl fmt::Debug for ImplicitConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImplicitConversion({:?} -> {:?})", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::ImplicitConversion;
    use crate::info::Type;
    use alloc::string::String;

    #[test]
    fn converts_matches_the_declared_pair_only() {
        let widen = ImplicitConversion::new::<u8, u32>();
        assert!(widen.converts(&Type::of::<u8>(), &Type::of::<u32>()));
        assert!(!widen.converts(&Type::of::<u32>(), &Type::of::<u8>()));
        assert!(!widen.converts(&Type::of::<u8>(), &Type::of::<String>()));
    }
}
