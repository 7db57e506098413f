//! Provide some tools for parsing token stream.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod reflect_constructors;
mod reflect_meta;
mod reflect_struct;

// -----------------------------------------------------------------------------
// Internal API

use attributes::{FieldAttributes, ParamAttributes, TypeAttributes};

pub(crate) use attributes::ParamDefault;
pub(crate) use reflect_constructors::{ReflectConstructor, ReflectConstructors};
pub(crate) use reflect_meta::ReflectMeta;
pub(crate) use reflect_struct::{ReflectStruct, StructField};
