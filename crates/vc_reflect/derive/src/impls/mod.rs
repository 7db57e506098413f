// -----------------------------------------------------------------------------
// Modules

mod constructors;
mod match_reflect;
mod struct_kind;
mod trait_reflect;
mod trait_type_path;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use constructors::match_constructor_impls;
pub(crate) use match_reflect::match_reflect_impls;

use struct_kind::impl_struct;
use trait_reflect::impl_trait_reflect;
use trait_type_path::impl_trait_type_path;
use trait_typed::impl_trait_typed;
