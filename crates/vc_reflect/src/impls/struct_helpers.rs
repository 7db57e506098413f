use core::fmt;
use core::hash::{Hash, Hasher};

use crate::Reflect;
use crate::ops::{ReflectRef, Struct};

/// Field-wise [`Reflect::reflect_partial_eq`] for structs.
///
/// Equal when `y` is a struct with the same field count and every field of
/// `y` has an equal counterpart of the same name in `x`.
#[inline(never)]
pub fn struct_partial_eq(x: &dyn Struct, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Struct(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.field_len() != y.field_len() {
        return Some(false);
    }

    for (name, y_field) in y.iter_fields() {
        let Some(x_field) = x.field(name) else {
            return Some(false);
        };
        let result = x_field.reflect_partial_eq(y_field);
        if result != Some(true) {
            return result;
        }
    }
    Some(true)
}

/// Field-wise [`Reflect::reflect_hash`] for structs.
///
/// Hashes every field, `x.ty_id()` and the field count. `None` if any
/// field cannot be hashed.
#[inline(never)]
pub fn struct_hash(x: &dyn Struct) -> Option<u64> {
    let mut hasher = crate::reflect_hasher();

    for (_, field) in x.iter_fields() {
        hasher.write_u64(field.reflect_hash()?);
    }

    x.ty_id().hash(&mut hasher);
    x.field_len().hash(&mut hasher);

    Some(hasher.finish())
}

/// Field-wise [`Reflect::reflect_debug`] for structs.
#[inline(never)]
pub fn struct_debug(x: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(x.reflect_type_name());
    for (name, field) in x.iter_fields() {
        debug.field(name, &field as &dyn fmt::Debug);
    }
    debug.finish()
}
