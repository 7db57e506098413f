//! The immutable path: populate a destination through its constructors.

use alloc::boxed::Box;

use vc_reflect::Reflect;
use vc_reflect::info::{ConstructorInfo, TypeInfo};
use vc_reflect::ops::{ArgList, ReflectRef, Struct};

use crate::convert::{self, Resolution};
use crate::{MapError, Mapper, describe};

/// Tries `candidates` in order and returns the first value a constructor
/// produces.
///
/// A candidate is abandoned when a required parameter has no matching
/// source attribute, when a matched value cannot be resolved, or when the
/// constructor returns an error.
pub(crate) fn construct(
    mapper: &mut Mapper,
    source: &dyn Reflect,
    destination: &'static TypeInfo,
    candidates: &[&'static ConstructorInfo],
) -> Result<Box<dyn Reflect>, MapError> {
    let attributes = match source.reflect_ref() {
        ReflectRef::Struct(attributes) => Some(attributes),
        _ => None,
    };

    for ctor in candidates {
        let Some(args) = bind_arguments(mapper, attributes, ctor) else {
            continue;
        };
        match ctor.invoke(args) {
            Ok(value) => return Ok(value),
            Err(err) => log::trace!(
                "`{}::{}` abandoned: {err}",
                destination.type_path(),
                ctor.name()
            ),
        }
    }

    Err(MapError::NoViableConstructor {
        source_type: source.reflect_type_path(),
        destination_type: destination.type_path(),
    })
}

/// Collects one argument per parameter, or `None` if the candidate must be abandoned.
fn bind_arguments(
    mapper: &mut Mapper,
    attributes: Option<&dyn Struct>,
    ctor: &ConstructorInfo,
) -> Option<ArgList> {
    let mut args = ArgList::with_capacity(ctor.arity());

    for param in ctor.params() {
        let found = attributes.and_then(|source| describe::find_attribute(source, param.name()));

        let resolution = match found {
            Some(value) => convert::resolve(mapper, value, param.type_info()),
            None => Resolution::Absent,
        };

        let value = match resolution {
            Resolution::Absent => match param.default_value() {
                Some(value) => value,
                None => {
                    log::trace!(
                        "`{}` abandoned: no value for parameter `{}`",
                        ctor.name(),
                        param.name()
                    );
                    return None;
                }
            },
            Resolution::Failed(reason) => {
                log::trace!(
                    "`{}` abandoned: parameter `{}`: {reason}",
                    ctor.name(),
                    param.name()
                );
                return None;
            }
            resolved => resolved.into_value()?,
        };
        args.push(value);
    }

    Some(args)
}
