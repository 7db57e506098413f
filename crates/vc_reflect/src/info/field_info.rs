use core::any::{Any, TypeId};

use crate::info::{Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// FieldAccess

/// How a reflected field may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldAccess {
    /// Readable and writable, the default for `pub` fields.
    ReadWrite,
    /// Readable only, from `#[reflect(readonly)]`.
    ReadOnly,
}

// -----------------------------------------------------------------------------
// NamedField

/// A named attribute of a struct.
///
/// Only fields the type chose to expose are described: `pub` fields, and
/// private fields marked `#[reflect(readonly)]`.
#[derive(Clone, Debug)]
pub struct NamedField {
    ty: Type,
    name: &'static str,
    // Built on first access, a field may refer to its own parent type.
    type_info: fn() -> &'static TypeInfo,
    access: FieldAccess,
}

impl NamedField {
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            ty: Type::of::<T>(),
            name,
            type_info: T::type_info,
            access: FieldAccess::ReadWrite,
        }
    }

    /// Marks the field as read-only.
    #[inline]
    pub const fn read_only(mut self) -> Self {
        self.access = FieldAccess::ReadOnly;
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty.id()
    }

    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty.id() == TypeId::of::<T>()
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    #[inline]
    pub const fn access(&self) -> FieldAccess {
        self.access
    }

    /// Every described field is readable.
    #[inline]
    pub const fn is_readable(&self) -> bool {
        true
    }

    #[inline]
    pub const fn is_writable(&self) -> bool {
        matches!(self.access, FieldAccess::ReadWrite)
    }
}

// -----------------------------------------------------------------------------
// Name matching

/// Compares two attribute names, ignoring case.
///
/// Mapping identifies attributes and constructor parameters by this relation,
/// so `Name`, `name` and `NAME` refer to the same slot.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::names_match;
///
/// assert!(names_match("ZipCode", "zipcode"));
/// assert!(names_match("ÉCOLE", "école"));
/// assert!(!names_match("zip_code", "zipcode"));
/// ```
pub fn names_match(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::{NamedField, names_match};
    use alloc::string::String;

    #[test]
    fn field_access_flags() {
        let field = NamedField::new::<String>("name");
        assert!(field.is_readable());
        assert!(field.is_writable());

        let field = field.read_only();
        assert!(field.is_readable());
        assert!(!field.is_writable());
        assert!(field.type_is::<String>());
    }

    #[test]
    fn case_insensitive_names() {
        assert!(names_match("Name", "name"));
        assert!(names_match("NAME", "name"));
        assert!(names_match("São", "SÃO"));
        assert!(!names_match("Name", "Names"));
        assert!(!names_match("", "a"));
    }
}
