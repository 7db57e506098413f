use crate::Reflect;

/// Access to the content of an `Option<T>`.
///
/// `None` is the absence value. Mapping skips it or forwards it, but never
/// converts it.
///
/// # Examples
///
/// ```
/// use vc_reflect::Reflect;
/// use vc_reflect::ops::ReflectRef;
///
/// let value = Some(3_i32);
/// let ReflectRef::Optional(opt) = value.reflect_ref() else { unreachable!() };
/// assert_eq!(opt.value().and_then(|v| v.downcast_ref::<i32>()), Some(&3));
/// ```
pub trait Optional: Reflect {
    fn value(&self) -> Option<&dyn Reflect>;

    fn value_mut(&mut self) -> Option<&mut dyn Reflect>;

    #[inline]
    fn is_none(&self) -> bool {
        self.value().is_none()
    }
}
