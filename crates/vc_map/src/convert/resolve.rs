use alloc::boxed::Box;

use vc_reflect::Reflect;
use vc_reflect::info::{OptionalInfo, ReflectKind, TypeInfo};
use vc_reflect::ops::ReflectRef;

use crate::{Mapper, SkipReason};

// -----------------------------------------------------------------------------
// Resolution

/// The outcome of resolving one destination slot from a source value.
#[derive(Debug)]
pub enum Resolution {
    /// The value already had the slot type and was cloned.
    Direct(Box<dyn Reflect>),
    /// A declared conversion or a scalar coercion produced the value.
    Converted(Box<dyn Reflect>),
    /// A nested mapping produced the value.
    Recursed(Box<dyn Reflect>),
    /// The source value is `None` and the slot is not optional.
    Absent,
    /// No rule applies.
    Failed(SkipReason),
}

impl Resolution {
    /// The resolved value, `None` for [`Absent`](Self::Absent) and [`Failed`](Self::Failed).
    #[inline]
    pub fn into_value(self) -> Option<Box<dyn Reflect>> {
        match self {
            Self::Direct(value) | Self::Converted(value) | Self::Recursed(value) => Some(value),
            Self::Absent | Self::Failed(_) => None,
        }
    }

    /// Post-processes a resolved value, keeping the variant.
    fn try_map(
        self,
        f: impl FnOnce(Box<dyn Reflect>) -> Result<Box<dyn Reflect>, SkipReason>,
    ) -> Self {
        match self {
            Self::Direct(value) => f(value).map_or_else(Self::Failed, Self::Direct),
            Self::Converted(value) => f(value).map_or_else(Self::Failed, Self::Converted),
            Self::Recursed(value) => f(value).map_or_else(Self::Failed, Self::Recursed),
            other => other,
        }
    }
}

// -----------------------------------------------------------------------------
// resolve

/// Produces a value for a slot of type `target` from a source value.
///
/// - `Some(v)` resolves through `v`. `None` resolves to `None` for an
///   optional slot, and to [`Absent`](Resolution::Absent) otherwise.
/// - A non-optional value for an `Option<T>` slot resolves against `T` and
///   is wrapped in `Some`.
/// - A value of the slot type is used as is.
/// - Otherwise [`try_convert`](super::try_convert) is attempted, and then,
///   for complex values only, a nested mapping through `mapper`.
///
/// A failed nested mapping is reported as [`Failed`](Resolution::Failed),
/// callers decide whether that abandons a constructor or skips an attribute.
pub fn resolve(mapper: &mut Mapper, value: &dyn Reflect, target: &'static TypeInfo) -> Resolution {
    if let ReflectRef::Optional(optional) = value.reflect_ref() {
        return match (optional.value(), target) {
            (Some(inner), _) => resolve(mapper, inner, target),
            (None, TypeInfo::Optional(info)) => Resolution::Direct(info.none()),
            (None, _) => Resolution::Absent,
        };
    }

    if let TypeInfo::Optional(info) = target {
        return resolve(mapper, value, info.inner_info()).try_map(|inner| wrap(info, inner));
    }

    if value.ty_id() == target.ty_id() {
        return match value.reflect_clone() {
            Ok(cloned) => Resolution::Direct(cloned),
            Err(err) => {
                log::trace!("cannot clone `{}`: {err}", value.reflect_type_path());
                Resolution::Failed(SkipReason::NotCloneable {
                    source_type: value.reflect_type_path(),
                })
            }
        };
    }

    if let Some(converted) = super::try_convert(value, target) {
        return Resolution::Converted(converted);
    }

    if value.reflect_kind() == ReflectKind::Struct {
        return match mapper.map_dynamic(Some(value), target) {
            Ok(Some(mapped)) => Resolution::Recursed(mapped),
            Ok(None) => Resolution::Absent,
            Err(err) => Resolution::Failed(SkipReason::NestedMapping(Box::new(err))),
        };
    }

    Resolution::Failed(SkipReason::NotConvertible {
        source_type: value.reflect_type_path(),
        target_type: target.type_path(),
    })
}

fn wrap(info: &OptionalInfo, inner: Box<dyn Reflect>) -> Result<Box<dyn Reflect>, SkipReason> {
    info.wrap(inner).map_err(|inner| SkipReason::Rejected {
        expected: info.inner().path(),
        found: inner.reflect_type_path(),
    })
}

#[cfg(test)]
mod tests {
    use super::{Resolution, resolve};
    use crate::{Mapper, SkipReason};
    use alloc::string::String;
    use vc_reflect::info::Typed;

    #[test]
    fn resolved_values_are_handed_out() {
        let mut mapper = Mapper::new();

        let direct = resolve(&mut mapper, &String::from("Ana"), String::type_info());
        assert!(matches!(direct, Resolution::Direct(_)));
        let value = direct.into_value().unwrap();
        assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("Ana"));

        let converted = resolve(&mut mapper, &7_u8, <Option<i64>>::type_info());
        assert!(matches!(converted, Resolution::Converted(_)));
        assert_eq!(converted.into_value().unwrap().downcast_ref::<Option<i64>>(), Some(&Some(7)));
    }

    #[test]
    fn unresolved_values_yield_nothing() {
        let mut mapper = Mapper::new();

        let absent = resolve(&mut mapper, &None::<String>, String::type_info());
        assert!(matches!(absent, Resolution::Absent));
        assert!(absent.into_value().is_none());

        let failed = resolve(&mut mapper, &String::from("x1"), i32::type_info());
        assert!(matches!(failed, Resolution::Failed(SkipReason::NotConvertible { .. })));
        assert!(failed.into_value().is_none());
    }
}
