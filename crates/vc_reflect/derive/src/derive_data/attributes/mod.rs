//! Provide some tools for parsing attributes.
//!
//! All of them read the `#[reflect(...)]` attribute, on the type, on its
//! fields, or on constructor parameters.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod flags;
mod param_attributes;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

use flags::TraitAvailableFlags;

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use param_attributes::{ParamAttributes, ParamDefault};
pub(crate) use type_attributes::TypeAttributes;

/// Returns `true` for `#[reflect(...)]`.
#[inline]
fn is_reflect_attribute(attr: &syn::Attribute) -> bool {
    attr.path().is_ident(crate::REFLECT_ATTRIBUTE_NAME)
}

/// Records a flag, rejecting duplicates.
fn set_flag(
    slot: &mut Option<proc_macro2::Span>,
    meta: &syn::meta::ParseNestedMeta<'_>,
) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error("duplicate reflect attribute"));
    }
    *slot = Some(syn::spanned::Spanned::span(&meta.path));
    Ok(())
}
