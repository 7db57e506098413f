//! The mutable path: default-construct, then assign attribute by attribute.

use alloc::boxed::Box;

use vc_reflect::Reflect;
use vc_reflect::info::TypeInfo;
use vc_reflect::ops::{ArgList, ConstructError, ReflectMut, ReflectRef, Struct};

use crate::convert::{self, Resolution};
use crate::{MapError, Mapper, SkipReason, SkippedAttribute, describe};

/// Builds the destination with its parameterless constructor and assigns
/// every writable attribute that has a matching source attribute.
///
/// Attributes whose source value is `None` are left alone. Attributes whose
/// value cannot be resolved are left at their default and recorded on the
/// mapper.
pub(crate) fn assign(
    mapper: &mut Mapper,
    source: &dyn Reflect,
    destination: &'static TypeInfo,
) -> Result<Box<dyn Reflect>, MapError> {
    let mut target = default_construct(destination)?;

    if let ReflectRef::Struct(source) = source.reflect_ref()
        && let ReflectMut::Struct(slots) = target.reflect_mut()
    {
        assign_attributes(mapper, source, slots, destination);
    }

    Ok(target)
}

fn assign_attributes(
    mapper: &mut Mapper,
    source: &dyn Struct,
    slots: &mut dyn Struct,
    destination: &'static TypeInfo,
) {
    for field in describe::attributes_of(destination) {
        if !field.is_writable() {
            continue;
        }
        let Some(value) = describe::find_attribute(source, field.name()) else {
            continue;
        };
        if let ReflectRef::Optional(optional) = value.reflect_ref()
            && optional.is_none()
        {
            continue;
        }

        let reason = match convert::resolve(mapper, value, field.type_info()) {
            Resolution::Absent => continue,
            Resolution::Failed(reason) => reason,
            resolved => {
                let (Some(value), Some(slot)) = (resolved.into_value(), slots.field_mut(field.name()))
                else {
                    continue;
                };
                match slot.set(value) {
                    Ok(()) => continue,
                    Err(rejected) => SkipReason::Rejected {
                        expected: field.ty().path(),
                        found: rejected.reflect_type_path(),
                    },
                }
            }
        };

        if let SkipReason::NestedMapping(err) = &reason {
            log::debug!(
                "`{}::{}` left at its default, nested mapping failed: {err}",
                destination.type_path(),
                field.name()
            );
        } else {
            log::trace!(
                "`{}::{}` left at its default: {reason}",
                destination.type_path(),
                field.name()
            );
        }

        mapper.record_skip(SkippedAttribute {
            destination_type: destination.type_path(),
            attribute: field.name(),
            reason,
        });
    }
}

fn default_construct(destination: &'static TypeInfo) -> Result<Box<dyn Reflect>, MapError> {
    let parameterless = describe::constructors_of(destination)
        .iter()
        .find(|ctor| ctor.arity() == 0);

    let result = match parameterless {
        Some(ctor) => ctor.invoke(ArgList::new()),
        None => Err(ConstructError::NoParameterless {
            type_path: destination.type_path(),
        }),
    };

    result.map_err(|reason| MapError::NotDefaultConstructible {
        destination_type: destination.type_path(),
        reason,
    })
}
