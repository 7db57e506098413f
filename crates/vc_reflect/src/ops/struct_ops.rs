use crate::Reflect;
use crate::info::names_match;

// -----------------------------------------------------------------------------
// Struct trait

/// Named field access for structs.
///
/// Fields appear in declaration order. Only exposed fields are visible,
/// and only writable ones are returned by the `_mut` accessors.
///
/// # Examples
///
/// ```
/// use vc_reflect::derive::Reflect;
/// use vc_reflect::ops::Struct;
///
/// #[derive(Reflect, Clone)]
/// struct Address {
///     pub street: String,
///     #[reflect(readonly)]
///     pub city: String,
/// }
///
/// let mut address = Address { street: "Rua das Flores, 123".into(), city: "São Paulo".into() };
///
/// assert_eq!(address.field_len(), 2);
/// assert_eq!(address.name_at(1), Some("city"));
/// assert!(address.field_ignore_case("CITY").is_some());
/// assert!(address.field_mut("street").is_some());
/// assert!(address.field_mut("city").is_none());
/// ```
pub trait Struct: Reflect {
    /// Returns the field with exactly this name.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the writable field with exactly this name.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the writable field at `index`.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    fn name_at(&self, index: usize) -> Option<&str>;

    fn field_len(&self) -> usize;

    fn iter_fields(&self) -> StructFieldIter<'_>;

    /// Returns the index of the first field whose name matches, ignoring case.
    fn index_ignore_case(&self, name: &str) -> Option<usize> {
        (0..self.field_len()).find(|&index| self.name_at(index).is_some_and(|n| names_match(n, name)))
    }

    /// Returns the first field whose name matches, ignoring case.
    fn field_ignore_case(&self, name: &str) -> Option<&dyn Reflect> {
        self.field_at(self.index_ignore_case(name)?)
    }
}

impl dyn Struct {
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }

    #[inline]
    pub fn field_mut_as<T: Reflect>(&mut self, name: &str) -> Option<&mut T> {
        self.field_mut(name).and_then(<dyn Reflect>::downcast_mut)
    }
}

// -----------------------------------------------------------------------------
// Struct Field Iterator

/// Iterates `(name, value)` pairs of a [`Struct`] in declaration order.
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'a str, &'a dyn Reflect);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let name = self.struct_val.name_at(self.index)?;
        let value = self.struct_val.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len() - self.index;
        (size, Some(size))
    }
}

impl<'a> ExactSizeIterator for StructFieldIter<'a> {}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::ops::Struct;
    use alloc::string::String;

    #[derive(Reflect, Clone)]
    struct Ledger {
        pub owner: String,
        #[reflect(readonly)]
        pub balance: i64,
        pub note: String,
    }

    fn ledger() -> Ledger {
        Ledger {
            owner: String::from("Ana"),
            balance: 10,
            note: String::new(),
        }
    }

    #[test]
    fn derived_field_access() {
        let ledger = ledger();
        assert_eq!(ledger.field_len(), 3);
        assert_eq!(ledger.name_at(1), Some("balance"));
        assert_eq!(ledger.name_at(3), None);
        assert!(ledger.field("balance").is_some_and(|value| value.is::<i64>()));
        assert!(ledger.field_at(2).is_some_and(|value| value.is::<String>()));
        assert!(ledger.field("missing").is_none());
    }

    #[test]
    fn derived_mutable_access_skips_readonly_fields() {
        let mut ledger = ledger();
        assert!(ledger.field_mut("balance").is_none());
        assert!(ledger.field_at_mut(1).is_none());

        let note = ledger.field_at_mut(2).unwrap();
        assert!(note.set(Box::new(String::from("paid"))).is_ok());
        assert!(
            ledger
                .field_mut("owner")
                .unwrap()
                .set(Box::new(String::from("Rui")))
                .is_ok()
        );
        assert_eq!(ledger.owner, "Rui");
        assert_eq!(ledger.note, "paid");
        assert_eq!(ledger.balance, 10);
    }
}
