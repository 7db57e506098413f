use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Reflect;
use crate::info::TypePath;
use crate::ops::ConstructError;

/// Arguments bound for one constructor call, in parameter order.
///
/// Generated constructor bodies take each argument exactly once with
/// [`ArgList::take`].
///
/// # Examples
///
/// ```
/// use vc_reflect::ops::ArgList;
///
/// let mut args = ArgList::new();
/// args.push(Box::new(String::from("Ana")));
/// args.push(Box::new(28_i32));
///
/// assert_eq!(args.take::<String>(0).unwrap(), "Ana");
/// assert!(args.take::<String>(1).is_err());
/// assert_eq!(args.take::<i32>(1).unwrap(), 28);
/// ```
#[derive(Debug, Default)]
pub struct ArgList {
    args: Vec<Option<Box<dyn Reflect>>>,
}

impl ArgList {
    #[inline]
    pub const fn new() -> Self {
        Self { args: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            args: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, value: Box<dyn Reflect>) {
        self.args.push(Some(value));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Moves the argument at `index` out of the list.
    ///
    /// On a type mismatch the argument stays in place.
    pub fn take<T: Reflect + TypePath>(&mut self, index: usize) -> Result<T, ConstructError> {
        let value = self
            .args
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(ConstructError::MissingArgument { index })?;

        value.take::<T>().map_err(|value| {
            let received = value.reflect_type_path();
            self.args[index] = Some(value);
            ConstructError::MismatchedArgument {
                index,
                expected: T::type_path(),
                received,
            }
        })
    }
}
