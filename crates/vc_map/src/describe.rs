//! Type descriptor access.
//!
//! Only published members are visible: `pub` fields, fields marked
//! `readonly`, and constructors collected by `#[reflect_constructors]`.

use alloc::vec::Vec;

use vc_reflect::Reflect;
use vc_reflect::info::{ConstructorInfo, NamedField, TypeInfo};
use vc_reflect::ops::{Struct, StructFieldIter};

/// Attributes of a type in declaration order, empty for non-struct types.
pub fn attributes_of(info: &'static TypeInfo) -> &'static [NamedField] {
    match info {
        TypeInfo::Struct(info) => info.fields(),
        _ => &[],
    }
}

/// Constructors of a type in declaration order.
#[inline]
pub fn constructors_of(info: &'static TypeInfo) -> &'static [ConstructorInfo] {
    info.constructors()
}

/// Constructors sorted by descending arity.
///
/// Constructors of equal arity keep their declaration order.
///
/// # Examples
///
/// ```
/// use vc_map::describe::ranked_constructors;
/// use vc_reflect::derive::{Reflect, reflect_constructors};
/// use vc_reflect::info::Typed;
///
/// #[derive(Reflect, Clone, Default)]
/// #[reflect(default, constructors)]
/// pub struct Contact {
///     pub name: String,
///     pub email: String,
/// }
///
/// #[reflect_constructors]
/// impl Contact {
///     pub fn named(name: String) -> Self {
///         Self { name, ..Self::default() }
///     }
///
///     pub fn new(name: String, email: String) -> Self {
///         Self { name, email }
///     }
/// }
///
/// let ranked = ranked_constructors(Contact::type_info());
/// let names: Vec<_> = ranked.iter().map(|ctor| ctor.name()).collect();
/// assert_eq!(names, ["new", "named", "default"]);
/// ```
pub fn ranked_constructors(info: &'static TypeInfo) -> Vec<&'static ConstructorInfo> {
    let mut constructors: Vec<_> = constructors_of(info).iter().collect();
    constructors.sort_by(|a, b| b.arity().cmp(&a.arity()));
    constructors
}

/// Readable attributes of a source value, as `(name, value)` pairs.
#[inline]
pub fn source_attributes(source: &dyn Struct) -> StructFieldIter<'_> {
    source.iter_fields()
}

/// The first source attribute whose name matches `name`, ignoring case.
#[inline]
pub fn find_attribute<'a>(source: &'a dyn Struct, name: &str) -> Option<&'a dyn Reflect> {
    source.field_ignore_case(name)
}

#[cfg(test)]
mod tests {
    use super::{attributes_of, find_attribute, source_attributes};
    use alloc::string::String;
    use vc_reflect::derive::Reflect;
    use vc_reflect::info::Typed;
    use vc_reflect::ops::DynamicStruct;

    #[derive(Reflect, Clone, Default)]
    struct Account {
        pub owner: String,
        #[reflect(readonly)]
        balance: i64,
        pin: u16,
    }

    #[test]
    fn only_published_fields_are_described() {
        let fields = attributes_of(Account::type_info());
        let names: Vec<_> = fields.iter().map(|field| field.name()).collect();
        assert_eq!(names, ["owner", "balance"]);
        assert!(fields[0].is_writable());
        assert!(!fields[1].is_writable());

        let account = Account {
            owner: String::from("Ana"),
            balance: 10,
            pin: 1234,
        };
        assert_eq!(account.pin, 1234);
        assert_eq!(source_attributes(&account).len(), 2);
    }

    #[test]
    fn lookup_ignores_case() {
        let source = DynamicStruct::new().with("Owner", String::from("Ana"));
        let value = find_attribute(&source, "OWNER").unwrap();
        assert_eq!(value.downcast_ref::<String>().unwrap(), "Ana");
        assert!(find_attribute(&source, "balance").is_none());
    }
}
