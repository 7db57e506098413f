use proc_macro2::Span;
use syn::Attribute;

use super::{is_reflect_attribute, set_flag};

/// Field-level `#[reflect(...)]` content.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(ignore)]`, the field is not published.
    pub ignore: Option<Span>,
    /// `#[reflect(readonly)]`, the field is published but not writable.
    pub readonly: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs.iter().filter(|attr| is_reflect_attribute(attr)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("ignore") {
                    set_flag(&mut this.ignore, &meta)
                } else if meta.path.is_ident("readonly") {
                    set_flag(&mut this.readonly, &meta)
                } else {
                    Err(meta.error("unsupported field attribute, expected `ignore` or `readonly`"))
                }
            })?;
        }

        if let (Some(_), Some(span)) = (this.ignore, this.readonly) {
            return Err(syn::Error::new(
                span,
                "`readonly` and `ignore` cannot be used together",
            ));
        }

        Ok(this)
    }
}
