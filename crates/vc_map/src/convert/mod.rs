//! Value conversion.
//!
//! - [`try_convert`]: declared implicit conversions, then scalar coercion.
//! - [`coerce`]: the scalar coercion alone.
//! - [`resolve`]: everything needed to fill one destination slot, including
//!   optional values and nested mapping.

// -----------------------------------------------------------------------------
// Modules

mod coerce;
mod resolve;

// -----------------------------------------------------------------------------
// Exports

pub use coerce::coerce;
pub use resolve::{Resolution, resolve};

use alloc::boxed::Box;

use vc_reflect::Reflect;
use vc_reflect::info::TypeInfo;

/// Converts `value` into the type described by `target`.
///
/// The first success wins:
///
/// 1. an implicit conversion declared on the value's type;
/// 2. an implicit conversion declared on the target type;
/// 3. scalar [`coerce`]ion, when the target is a scalar.
///
/// A value that already has the target type is not handled here, see [`resolve`].
///
/// # Examples
///
/// ```
/// use vc_map::convert::try_convert;
/// use vc_reflect::info::Typed;
///
/// let text = try_convert(&42_i64, String::type_info()).unwrap();
/// assert_eq!(text.downcast_ref::<String>().unwrap(), "42");
///
/// assert!(try_convert(&vec![1_u8], String::type_info()).is_none());
/// ```
pub fn try_convert(value: &dyn Reflect, target: &'static TypeInfo) -> Option<Box<dyn Reflect>> {
    let declared_on_source = value
        .represented_type_info()
        .map(TypeInfo::conversions)
        .unwrap_or_default();

    let source = value.reflect_type_info().ty();
    let declared = declared_on_source
        .iter()
        .chain(target.conversions())
        .find(|conversion| conversion.converts(source, target.ty()));
    if let Some(conversion) = declared
        && let Some(converted) = conversion.apply(value)
    {
        return Some(converted);
    }

    let kind = target.scalar()?;
    let coerced = coerce(value, kind);
    if coerced.is_none() {
        log::trace!(
            "no coercion from `{}` to `{}`",
            value.reflect_type_path(),
            target.type_path()
        );
    }
    coerced
}

#[cfg(test)]
mod tests {
    use super::try_convert;
    use alloc::string::String;
    use vc_domain::CompleteName;
    use vc_reflect::info::Typed;
    use vc_reflect::ops::DynamicStruct;

    #[test]
    fn declared_conversions_both_ways() {
        let name = CompleteName::new(String::from("Ana Costa"));
        let text = try_convert(&name, String::type_info()).unwrap();
        assert_eq!(text.downcast_ref::<String>().map(String::as_str), Some("Ana Costa"));

        let name = try_convert(&String::from("Rui Lima"), CompleteName::type_info()).unwrap();
        let name = name.downcast_ref::<CompleteName>().unwrap();
        assert_eq!(name.last_name(), "Lima");
    }

    #[test]
    fn undeclared_pairs_do_not_convert() {
        assert!(try_convert(&7_i32, CompleteName::type_info()).is_none());
        assert!(try_convert(&DynamicStruct::new(), String::type_info()).is_none());
    }
}
