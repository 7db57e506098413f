use alloc::boxed::Box;
use alloc::vec::Vec;

use foldhash::fast::FixedState;
use hashbrown::HashMap;

use crate::impls::FIXED_HASH_STATE;
use crate::info::{ConstructorInfo, ImplicitConversion, NamedField, Type, TypePath};
use crate::info::{impl_type_fn, names_match};
use crate::ops::Struct;

/// A struct with named fields, the only kind the mapper treats as complex.
///
/// Holds the exposed fields in declaration order, the public constructors
/// in declaration order, and the implicit conversions declared on the type.
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    field_names: Box<[&'static str]>,
    field_indices: HashMap<&'static str, usize, FixedState>,
    constructors: Box<[ConstructorInfo]>,
    conversions: Box<[ImplicitConversion]>,
}

impl StructInfo {
    impl_type_fn!(ty);

    pub fn new<T: Struct + TypePath>(fields: &[NamedField]) -> Self {
        let field_names = fields.iter().map(NamedField::name).collect();
        let mut field_indices = HashMap::with_capacity_and_hasher(fields.len(), FIXED_HASH_STATE);
        for (index, field) in fields.iter().enumerate() {
            field_indices.insert(field.name(), index);
        }

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            field_names,
            field_indices,
            constructors: Box::new([]),
            conversions: Box::new([]),
        }
    }

    /// Appends constructors, keeping declaration order.
    pub fn with_constructors(mut self, constructors: impl Into<Vec<ConstructorInfo>>) -> Self {
        let mut list = Vec::from(core::mem::take(&mut self.constructors));
        list.extend(constructors.into());
        self.constructors = list.into_boxed_slice();
        self
    }

    /// Appends implicit conversions declared on this type.
    pub fn with_conversions(mut self, conversions: impl Into<Vec<ImplicitConversion>>) -> Self {
        let mut list = Vec::from(core::mem::take(&mut self.conversions));
        list.extend(conversions.into());
        self.conversions = list.into_boxed_slice();
        self
    }

    /// Returns the field with exactly this name.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        let index = *self.field_indices.get(name)?;
        self.fields.get(index)
    }

    /// Returns the first field whose name matches, ignoring case.
    pub fn field_ignore_case(&self, name: &str) -> Option<&NamedField> {
        self.fields.iter().find(|field| names_match(field.name(), name))
    }

    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Exposed fields in declaration order.
    #[inline]
    pub fn fields(&self) -> &[NamedField] {
        &self.fields
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    #[inline]
    pub fn field_names(&self) -> &[&'static str] {
        &self.field_names
    }

    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn constructors(&self) -> &[ConstructorInfo] {
        &self.constructors
    }

    #[inline]
    pub fn conversions(&self) -> &[ImplicitConversion] {
        &self.conversions
    }
}
