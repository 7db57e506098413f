use alloc::boxed::Box;
use alloc::vec::Vec;

use vc_reflect::Reflect;
use vc_reflect::info::{TypeInfo, TypePath, Typed};
use vc_reflect::ops::ReflectRef;

use crate::{MapError, SkippedAttribute, assign, construct, describe};

// -----------------------------------------------------------------------------
// Strategy

/// How a destination type gets populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Bind source attributes to the parameters of a constructor.
    Construct,
    /// Default-construct, then assign source attributes one by one.
    Assign,
}

impl Strategy {
    /// Classifies a destination type.
    ///
    /// A type whose highest-arity constructor takes at least one parameter
    /// is constructed, every other type is assigned.
    pub fn of(destination: &'static TypeInfo) -> Self {
        let top = destination.constructors().iter().map(|ctor| ctor.arity()).max();
        match top {
            Some(arity) if arity > 0 => Self::Construct,
            _ => Self::Assign,
        }
    }
}

// -----------------------------------------------------------------------------
// Mapper

/// A mapping session.
///
/// Every call re-reads the type descriptors, a session only collects the
/// [`SkippedAttribute`]s of the mutable path.
///
/// # Examples
///
/// ```
/// use vc_map::Mapper;
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect, Clone, Default)]
/// #[reflect(default)]
/// pub struct Order {
///     pub id: u32,
///     pub total: u8,
/// }
///
/// #[derive(Reflect, Clone)]
/// pub struct OrderDto {
///     pub id: String,
///     pub total: i64,
/// }
///
/// let dto = OrderDto { id: "17".into(), total: 1_000 };
///
/// let mut mapper = Mapper::new();
/// let order: Order = mapper.map(Some(&dto)).unwrap().unwrap();
///
/// assert_eq!(order.id, 17);
/// assert_eq!(order.total, 0); // out of range, left at its default
/// assert_eq!(mapper.skipped()[0].attribute, "total");
/// ```
#[derive(Debug, Default)]
pub struct Mapper {
    skipped: Vec<SkippedAttribute>,
}

impl Mapper {
    #[inline]
    pub const fn new() -> Self {
        Self {
            skipped: Vec::new(),
        }
    }

    /// Maps `source` to a new `D`. `None` maps to `None`.
    pub fn map<S, D>(&mut self, source: Option<&S>) -> Result<Option<D>, MapError>
    where
        S: Reflect,
        D: Reflect + Typed,
    {
        let source = source.map(|source| source as &dyn Reflect);
        match self.map_dynamic(source, D::type_info())? {
            Some(value) => value
                .take::<D>()
                .map(Some)
                .map_err(|value| MapError::UnexpectedType {
                    expected: D::type_path(),
                    found: value.reflect_type_path(),
                }),
            None => Ok(None),
        }
    }

    /// Maps a type-erased value to the type described by `destination`.
    ///
    /// This is the entry point of nested mappings. An `Option` source maps
    /// through its value, an `Option` destination receives the mapped inner value.
    pub fn map_dynamic(
        &mut self,
        source: Option<&dyn Reflect>,
        destination: &'static TypeInfo,
    ) -> Result<Option<Box<dyn Reflect>>, MapError> {
        let Some(source) = source else {
            return Ok(None);
        };

        if let ReflectRef::Optional(optional) = source.reflect_ref() {
            return self.map_dynamic(optional.value(), destination);
        }

        if let TypeInfo::Optional(info) = destination {
            let wrapped = match self.map_dynamic(Some(source), info.inner_info())? {
                Some(inner) => info.wrap(inner).map_err(|inner| MapError::UnexpectedType {
                    expected: info.inner().path(),
                    found: inner.reflect_type_path(),
                })?,
                None => info.none(),
            };
            return Ok(Some(wrapped));
        }

        let mapped = match Strategy::of(destination) {
            Strategy::Construct => {
                log::trace!(
                    "`{}` -> `{}`: construction",
                    source.reflect_type_path(),
                    destination.type_path()
                );
                construct::construct(self, source, destination, &describe::ranked_constructors(destination))?
            }
            Strategy::Assign => {
                log::trace!(
                    "`{}` -> `{}`: assignment",
                    source.reflect_type_path(),
                    destination.type_path()
                );
                assign::assign(self, source, destination)?
            }
        };
        Ok(Some(mapped))
    }

    /// Attributes the mutable path left at their default, oldest first.
    #[inline]
    pub fn skipped(&self) -> &[SkippedAttribute] {
        &self.skipped
    }

    /// Drains the skipped attributes.
    #[inline]
    pub fn take_skipped(&mut self) -> Vec<SkippedAttribute> {
        core::mem::take(&mut self.skipped)
    }

    #[inline]
    pub(crate) fn record_skip(&mut self, skipped: SkippedAttribute) {
        self.skipped.push(skipped);
    }
}

// -----------------------------------------------------------------------------
// Entry points

/// Maps `source` to a new `D`. `None` maps to `None`.
///
/// Attributes match by name, ignoring case. If the highest-arity constructor
/// of `D` takes parameters, `D` is built through its constructors, otherwise
/// it is default-constructed and its writable attributes are assigned.
///
/// # Examples
///
/// ```
/// use vc_map::map;
/// use vc_reflect::derive::{Reflect, reflect_constructors};
///
/// #[derive(Reflect, Clone)]
/// pub struct Person {
///     pub name: String,
///     pub age: i32,
/// }
///
/// #[derive(Reflect, Clone)]
/// #[reflect(constructors)]
/// pub struct PersonView {
///     pub age: String,
///     pub name: String,
/// }
///
/// #[reflect_constructors]
/// impl PersonView {
///     pub fn new(age: String, name: String) -> Self {
///         Self { age, name }
///     }
/// }
///
/// let person = Person { name: "João".into(), age: 30 };
/// let view: PersonView = map(Some(&person)).unwrap().unwrap();
/// assert_eq!(view.name, "João");
/// assert_eq!(view.age, "30");
///
/// let nothing: Option<PersonView> = map::<Person, _>(None).unwrap();
/// assert!(nothing.is_none());
/// ```
#[inline]
pub fn map<S, D>(source: Option<&S>) -> Result<Option<D>, MapError>
where
    S: Reflect,
    D: Reflect + Typed,
{
    Mapper::new().map(source)
}

/// Method syntax for [`map`].
///
/// # Examples
///
/// ```
/// use vc_map::{MapErrorKind, MapTo};
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect, Clone, Debug, Default)]
/// #[reflect(default)]
/// pub struct Label {
///     pub text: String,
/// }
///
/// #[derive(Reflect, Clone)]
/// pub struct Code {
///     pub text: u32,
/// }
///
/// let label: Label = Code { text: 7 }.map_to().unwrap();
/// assert_eq!(label.text, "7");
///
/// let missing: Option<Code> = None;
/// let err = missing.map_to::<Label>().unwrap_err();
/// assert_eq!(err.kind(), MapErrorKind::NullSource);
/// ```
pub trait MapTo: Reflect {
    /// Maps `self` to a new `D`.
    ///
    /// An `Option` holding `None` fails with [`MapError::NullSource`].
    fn map_to<D: Reflect + Typed>(&self) -> Result<D, MapError>
    where
        Self: Sized,
    {
        map(Some(self))?.ok_or(MapError::NullSource {
            destination_type: <D as TypePath>::type_path(),
        })
    }
}

impl<T: Reflect> MapTo for T {}
