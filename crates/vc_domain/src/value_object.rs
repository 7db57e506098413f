use alloc::vec::Vec;

use vc_reflect::Reflect;

// -----------------------------------------------------------------------------
// ValueObject

/// A small immutable value compared by its content.
///
/// Two values are equal when their [`equality_components`](ValueObject::equality_components)
/// are pairwise equal, in order.
///
/// # Examples
///
/// ```
/// use vc_domain::{ValueObject, impl_value_object_eq};
/// use vc_reflect::Reflect;
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect, Clone, Debug)]
/// #[reflect(partial_eq, hash)]
/// pub struct Money {
///     pub amount: i64,
///     pub currency: String,
/// }
///
/// impl ValueObject for Money {
///     fn equality_components(&self) -> Vec<&dyn Reflect> {
///         vec![&self.amount as &dyn Reflect, &self.currency]
///     }
///
///     fn is_valid(&self) -> bool {
///         self.currency.len() == 3
///     }
/// }
///
/// impl_value_object_eq!(Money);
///
/// let a = Money { amount: 10, currency: "BRL".into() };
/// let b = Money { amount: 10, currency: "BRL".into() };
/// assert_eq!(a, b);
/// assert!(a.is_valid());
/// ```
pub trait ValueObject: Reflect {
    /// The values that make up the identity of this value, in a fixed order.
    fn equality_components(&self) -> Vec<&dyn Reflect>;

    /// Whether the value satisfies its own rules.
    fn is_valid(&self) -> bool;
}

/// Compares the equality components of two values pairwise.
///
/// Component lists of different length are never equal. Components that
/// cannot be compared make the values unequal.
pub fn value_eq<T: ValueObject + ?Sized>(a: &T, b: &T) -> bool {
    let a = a.equality_components();
    let b = b.equality_components();

    a.len() == b.len()
        && a.iter()
            .zip(&b)
            .all(|(x, y)| x.reflect_partial_eq(*y) == Some(true))
}

/// XOR-folds the hashes of the equality components.
///
/// A component without a hash contributes `0`. Equal values hash equally,
/// but the fold ignores component order.
pub fn value_hash<T: ValueObject + ?Sized>(value: &T) -> u64 {
    value
        .equality_components()
        .iter()
        .fold(0, |acc, component| acc ^ component.reflect_hash().unwrap_or(0))
}

/// Implements `PartialEq`, `Eq` and `Hash` for a [`ValueObject`] through
/// [`value_eq`] and [`value_hash`].
#[macro_export]
macro_rules! impl_value_object_eq {
    ($ty:ty) => {
        impl ::core::cmp::PartialEq for $ty {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                $crate::value_eq(self, other)
            }
        }

        impl ::core::cmp::Eq for $ty {}

        impl ::core::hash::Hash for $ty {
            #[inline]
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                state.write_u64($crate::value_hash(self));
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::{ValueObject, value_eq, value_hash};
    use alloc::string::String;
    use alloc::vec::Vec;
    use vc_reflect::Reflect;
    use vc_reflect::derive::Reflect;

    #[derive(Reflect, Clone)]
    struct Pair {
        pub left: String,
        pub right: String,
    }

    impl ValueObject for Pair {
        fn equality_components(&self) -> Vec<&dyn Reflect> {
            vec![&self.left as &dyn Reflect, &self.right]
        }

        fn is_valid(&self) -> bool {
            true
        }
    }

    #[derive(Reflect, Clone)]
    struct Tagged {
        pub tags: Vec<String>,
    }

    impl ValueObject for Tagged {
        fn equality_components(&self) -> Vec<&dyn Reflect> {
            self.tags.iter().map(|tag| tag as &dyn Reflect).collect()
        }

        fn is_valid(&self) -> bool {
            !self.tags.is_empty()
        }
    }

    fn pair(left: &str, right: &str) -> Pair {
        Pair {
            left: left.into(),
            right: right.into(),
        }
    }

    #[test]
    fn equality_is_ordered() {
        assert!(value_eq(&pair("a", "b"), &pair("a", "b")));
        assert!(!value_eq(&pair("a", "b"), &pair("b", "a")));
    }

    #[test]
    fn hash_is_an_order_independent_fold() {
        assert_eq!(value_hash(&pair("a", "b")), value_hash(&pair("a", "b")));
        assert_eq!(value_hash(&pair("a", "b")), value_hash(&pair("b", "a")));
        assert_eq!(value_hash(&pair("x", "x")), 0);
    }

    #[test]
    fn different_lengths_are_unequal() {
        let one = Tagged {
            tags: vec![String::from("a")],
        };
        let two = Tagged {
            tags: vec![String::from("a"), String::from("b")],
        };
        assert!(!value_eq(&one, &two));
        assert!(value_eq(&two, &two.clone()));
        assert!(!Tagged { tags: Vec::new() }.is_valid());
    }
}
