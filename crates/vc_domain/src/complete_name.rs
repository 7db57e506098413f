use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use vc_reflect::Reflect;
use vc_reflect::derive::{Reflect, reflect_constructors};

use crate::{ValueObject, impl_value_object_eq};

// -----------------------------------------------------------------------------
// CompleteName

/// A personal name, split into first and last name.
///
/// All parts are read-only. The name converts implicitly to and from its
/// full text, so it maps to and from plain `String` attributes.
///
/// # Examples
///
/// ```
/// use vc_domain::CompleteName;
///
/// let name = CompleteName::new("João da Silva".into());
/// assert_eq!(name.first_name(), "João");
/// assert_eq!(name.last_name(), "Silva");
/// assert!(name.is_valid());
///
/// let name = CompleteName::from_parts("Ana".into(), "Costa".into());
/// assert_eq!(name.to_string(), "Ana Costa");
///
/// let single = CompleteName::from(String::from("Cher"));
/// assert_eq!(single.first_name(), "Cher");
/// assert_eq!(single.last_name(), "");
/// assert!(!single.is_valid());
/// ```
#[derive(Reflect, Clone, Debug)]
#[reflect(constructors, into(String), from(String), partial_eq, hash)]
pub struct CompleteName {
    #[reflect(readonly)]
    full_name: String,
    #[reflect(readonly)]
    first_name: String,
    #[reflect(readonly)]
    last_name: String,
    #[reflect(readonly)]
    is_valid: bool,
}

#[reflect_constructors]
impl CompleteName {
    /// Splits `full_name` on spaces: the first token is the first name and
    /// the last token the last name. A single token is the first name.
    pub fn new(full_name: String) -> Self {
        let names: Vec<&str> = full_name.split(' ').collect();
        let (first_name, last_name) = match names.as_slice() {
            [first, .., last] => (String::from(*first), String::from(*last)),
            _ => (full_name.clone(), String::new()),
        };
        Self::with_parts(full_name, first_name, last_name)
    }

    pub fn from_parts(first_name: String, last_name: String) -> Self {
        let full_name = format!("{first_name} {last_name}");
        Self::with_parts(full_name, first_name, last_name)
    }
}

impl CompleteName {
    fn with_parts(full_name: String, first_name: String, last_name: String) -> Self {
        let is_valid = is_valid_name(&full_name);
        Self {
            full_name,
            first_name,
            last_name,
            is_valid,
        }
    }

    #[inline]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[inline]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[inline]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Not blank, and made of at least two space separated parts.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }
}

fn is_valid_name(full_name: &str) -> bool {
    !full_name.trim().is_empty() && full_name.contains(' ')
}

impl ValueObject for CompleteName {
    fn equality_components(&self) -> Vec<&dyn Reflect> {
        vec![&self.full_name as &dyn Reflect]
    }

    fn is_valid(&self) -> bool {
        self.is_valid
    }
}

impl_value_object_eq!(CompleteName);

impl fmt::Display for CompleteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

impl From<String> for CompleteName {
    #[inline]
    fn from(full_name: String) -> Self {
        Self::new(full_name)
    }
}

impl From<CompleteName> for String {
    #[inline]
    fn from(name: CompleteName) -> Self {
        name.full_name
    }
}

#[cfg(test)]
mod tests {
    use super::CompleteName;
    use alloc::string::String;
    use alloc::vec::Vec;
    use vc_reflect::info::{TypeInfo, Typed};
    use vc_reflect::ops::Struct;

    #[test]
    fn split_keeps_first_and_last_token() {
        let name = CompleteName::new(String::from("Maria da Graça Santos"));
        assert_eq!(name.full_name(), "Maria da Graça Santos");
        assert_eq!(name.first_name(), "Maria");
        assert_eq!(name.last_name(), "Santos");
    }

    #[test]
    fn validity() {
        assert!(CompleteName::new(String::from("Ana Costa")).is_valid());
        assert!(!CompleteName::new(String::from("Ana")).is_valid());
        assert!(!CompleteName::new(String::from("   ")).is_valid());
        assert!(!CompleteName::new(String::new()).is_valid());
        assert!(CompleteName::from_parts(String::from("Ana"), String::from("Costa")).is_valid());
    }

    #[test]
    fn equality_uses_the_full_name() {
        let a = CompleteName::new(String::from("Ana Costa"));
        let b = CompleteName::from_parts(String::from("Ana"), String::from("Costa"));
        assert_eq!(a, b);
        assert_ne!(a, CompleteName::new(String::from("Ana Lima")));
    }

    #[test]
    fn published_shape() {
        let TypeInfo::Struct(info) = CompleteName::type_info() else {
            panic!("expected a struct");
        };
        assert_eq!(info.field_names(), ["full_name", "first_name", "last_name", "is_valid"]);
        assert!(info.iter().all(|field| !field.is_writable()));

        let names: Vec<&str> = info.constructors().iter().map(|ctor| ctor.name()).collect();
        assert_eq!(names, ["new", "from_parts"]);
        assert_eq!(info.conversions().len(), 2);

        let mut name = CompleteName::new(String::from("Ana Costa"));
        assert!(name.field_mut("full_name").is_none());
        let fields: &dyn Struct = &name;
        assert_eq!(fields.field_as::<String>("first_name").map(String::as_str), Some("Ana"));
    }
}
