use proc_macro2::Span;
use syn::punctuated::Punctuated;
use syn::{Attribute, LitStr, Token, Type, parenthesized};

use super::{TraitAvailableFlags, is_reflect_attribute, set_flag};

/// Type-level `#[reflect(...)]` content.
///
/// - `default`
/// - `constructors`
/// - `into(T, ..)` and `from(T, ..)`
/// - `partial_eq`, `hash`, `debug`
/// - `type_path = "..."`
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// Publish `Default::default` as the parameterless constructor.
    pub default_constructor: Option<Span>,
    /// Publish the constructors of `#[reflect_constructors]`.
    pub constructors: Option<Span>,
    /// `Self -> T` conversions.
    pub into: Vec<Type>,
    /// `T -> Self` conversions.
    pub from: Vec<Type>,
    pub avail_traits: TraitAvailableFlags,
    pub type_path: Option<LitStr>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs.iter().filter(|attr| is_reflect_attribute(attr)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("default") {
                    set_flag(&mut this.default_constructor, &meta)
                } else if meta.path.is_ident("constructors") {
                    set_flag(&mut this.constructors, &meta)
                } else if meta.path.is_ident("partial_eq") {
                    set_flag(&mut this.avail_traits.partial_eq, &meta)
                } else if meta.path.is_ident("hash") {
                    set_flag(&mut this.avail_traits.hash, &meta)
                } else if meta.path.is_ident("debug") {
                    set_flag(&mut this.avail_traits.debug, &meta)
                } else if meta.path.is_ident("into") {
                    this.into.extend(parse_type_list(&meta)?);
                    Ok(())
                } else if meta.path.is_ident("from") {
                    this.from.extend(parse_type_list(&meta)?);
                    Ok(())
                } else if meta.path.is_ident("type_path") {
                    if this.type_path.is_some() {
                        return Err(meta.error("duplicate `type_path`"));
                    }
                    let path: LitStr = meta.value()?.parse()?;
                    if path.value().trim().is_empty() {
                        return Err(syn::Error::new(path.span(), "`type_path` cannot be empty"));
                    }
                    this.type_path = Some(path);
                    Ok(())
                } else if meta.path.is_ident("readonly") || meta.path.is_ident("ignore") {
                    Err(meta.error("this attribute can only be applied to fields"))
                } else {
                    Err(meta.error(
                        "unsupported reflect attribute, expected one of: \
                         default, constructors, into, from, partial_eq, hash, debug, type_path",
                    ))
                }
            })?;
        }

        Ok(this)
    }
}

/// Parses `(T, U, ..)`.
fn parse_type_list(meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<Vec<Type>> {
    let content;
    parenthesized!(content in meta.input);
    let types = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;
    if types.is_empty() {
        return Err(meta.error("expected at least one type"));
    }
    Ok(types.into_iter().collect())
}
