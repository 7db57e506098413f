use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Deref, DerefMut};

use foldhash::fast::FixedState;
use hashbrown::HashMap;

use crate::Reflect;
use crate::impls::{FIXED_HASH_STATE, NonGenericTypeInfoCell};
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::ops::{ReflectCloneError, Struct, StructFieldIter};
use crate::reflection::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Dynamic Struct

/// A struct assembled at runtime.
///
/// It stands in for anonymous values: it has named fields but no declared
/// type, so [`Reflect::represented_type_info`] returns `None`. All of its
/// fields are writable.
///
/// # Examples
///
/// ```
/// use vc_reflect::ops::{DynamicStruct, Struct};
///
/// let mut employee = DynamicStruct::new();
/// employee.extend("Name", String::from("Ana Lima"));
/// employee.extend("Age", 28_i32);
/// employee.extend("Department", String::from("TI"));
///
/// assert_eq!(employee.field_len(), 3);
/// assert_eq!(employee.index_of("Age"), Some(1));
///
/// // Setting an existing name replaces the value.
/// employee.extend("Age", 29_i32);
/// assert_eq!(employee.field_len(), 3);
/// ```
pub struct DynamicStruct {
    fields: Vec<Box<dyn Reflect>>,
    field_names: Vec<Cow<'static, str>>,
    field_indices: HashMap<Cow<'static, str>, usize, FixedState>,
}

impl TypePath for DynamicStruct {
    #[inline]
    fn type_path() -> &'static str {
        "vc_reflect::ops::DynamicStruct"
    }

    #[inline]
    fn type_name() -> &'static str {
        "DynamicStruct"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "DynamicStruct"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("vc_reflect::ops")
    }
}

impl Typed for DynamicStruct {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl Default for DynamicStruct {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicStruct {
    #[inline]
    pub const fn new() -> Self {
        Self {
            fields: Vec::new(),
            field_names: Vec::new(),
            field_indices: HashMap::with_hasher(FIXED_HASH_STATE),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
            field_names: Vec::with_capacity(capacity),
            field_indices: HashMap::with_capacity_and_hasher(capacity, FIXED_HASH_STATE),
        }
    }

    /// Inserts a boxed field, or replaces the value of an existing one.
    pub fn extend_boxed(&mut self, name: impl Into<Cow<'static, str>>, value: Box<dyn Reflect>) {
        let name: Cow<'static, str> = name.into();
        if let Some(index) = self.field_indices.get(&name) {
            self.fields[*index] = value;
        } else {
            self.fields.push(value);
            self.field_indices.insert(name.clone(), self.fields.len() - 1);
            self.field_names.push(name);
        }
    }

    /// Inserts a field, or replaces the value of an existing one.
    #[inline]
    pub fn extend<T: Reflect>(&mut self, name: impl Into<Cow<'static, str>>, value: T) {
        self.extend_boxed(name, Box::new(value));
    }

    /// Builder form of [`extend`](Self::extend).
    #[inline]
    pub fn with<T: Reflect>(mut self, name: impl Into<Cow<'static, str>>, value: T) -> Self {
        self.extend(name, value);
        self
    }

    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }
}

impl Reflect for DynamicStruct {
    impl_reflect_cast_fn!(Struct);

    #[inline]
    fn represented_type_info(&self) -> Option<&'static TypeInfo> {
        None
    }

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let mut cloned = DynamicStruct::with_capacity(self.fields.len());
        for (name, value) in self.field_names.iter().zip(&self.fields) {
            let value = value
                .reflect_clone()
                .map_err(|_| ReflectCloneError::FieldNotCloneable {
                    type_path: Cow::Borrowed(Self::type_path()),
                    field: name.clone(),
                })?;
            cloned.extend_boxed(name.clone(), value);
        }
        Ok(Box::new(cloned))
    }

    #[inline]
    fn reflect_hash(&self) -> Option<u64> {
        crate::impls::struct_hash(self)
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        crate::impls::struct_partial_eq(self, other)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynamicStruct(")?;
        crate::impls::struct_debug(self, f)?;
        write!(f, ")")
    }
}

impl fmt::Debug for DynamicStruct {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl<N: Into<Cow<'static, str>>> FromIterator<(N, Box<dyn Reflect>)> for DynamicStruct {
    fn from_iter<T: IntoIterator<Item = (N, Box<dyn Reflect>)>>(fields: T) -> Self {
        let mut dynamic_struct = DynamicStruct::new();
        for (name, value) in fields {
            dynamic_struct.extend_boxed(name, value);
        }
        dynamic_struct
    }
}

impl Struct for DynamicStruct {
    #[inline]
    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        self.field_indices
            .get(name)
            .map(|index| &*self.fields[*index])
    }

    #[inline]
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
        self.field_indices
            .get(name)
            .map(|index| &mut *self.fields[*index])
    }

    #[inline]
    fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
        self.fields.get(index).map(Deref::deref)
    }

    #[inline]
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.fields.get_mut(index).map(DerefMut::deref_mut)
    }

    #[inline]
    fn name_at(&self, index: usize) -> Option<&str> {
        self.field_names.get(index).map(AsRef::as_ref)
    }

    #[inline]
    fn field_len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    fn iter_fields(&self) -> StructFieldIter<'_> {
        StructFieldIter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::DynamicStruct;
    use crate::Reflect;
    use crate::ops::Struct;
    use alloc::string::String;

    #[test]
    fn anonymous_value_has_no_declared_type() {
        let value = DynamicStruct::new().with("Name", String::from("Ana Lima"));
        assert!(value.represented_type_info().is_none());
        assert_eq!(value.reflect_kind(), crate::info::ReflectKind::Struct);
    }

    #[test]
    fn clone_and_compare() {
        let value = DynamicStruct::new()
            .with("Name", String::from("Ana Lima"))
            .with("Age", 28_i32);

        let cloned = value.reflect_clone().unwrap();
        assert_eq!(value.reflect_partial_eq(&*cloned), Some(true));
        assert_eq!(value.reflect_hash(), cloned.reflect_hash());

        let names: alloc::vec::Vec<_> = value.iter_fields().map(|(name, _)| name).collect();
        assert_eq!(names, ["Name", "Age"]);
        assert!(value.field_ignore_case("name").is_some());
    }
}
