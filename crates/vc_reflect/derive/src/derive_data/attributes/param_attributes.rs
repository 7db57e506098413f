use syn::{Attribute, Expr};

use super::is_reflect_attribute;

/// How an optional constructor parameter gets its value.
#[derive(Debug)]
pub(crate) enum ParamDefault {
    /// `#[reflect(default)]`, through `Default::default`.
    Trait,
    /// `#[reflect(default = expr)]`.
    Expr(Box<Expr>),
}

/// Parameter-level `#[reflect(...)]` content.
#[derive(Default, Debug)]
pub(crate) struct ParamAttributes {
    pub default: Option<ParamDefault>,
}

impl ParamAttributes {
    /// Parses and removes the `#[reflect(...)]` attributes, other attributes
    /// stay in place.
    pub fn take_attrs(attrs: &mut Vec<Attribute>) -> syn::Result<Self> {
        let mut this = Self::default();
        let mut result = Ok(());

        attrs.retain(|attr| {
            if !is_reflect_attribute(attr) {
                return true;
            }
            if let Err(err) = this.parse_attr(attr) {
                match &mut result {
                    Ok(()) => result = Err(err),
                    Err(first) => first.combine(err),
                }
            }
            false
        });

        result.map(|()| this)
    }

    fn parse_attr(&mut self, attr: &Attribute) -> syn::Result<()> {
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("default") {
                return Err(meta.error("unsupported parameter attribute, expected `default`"));
            }
            if self.default.is_some() {
                return Err(meta.error("duplicate `default`"));
            }
            self.default = Some(if meta.input.peek(syn::Token![=]) {
                ParamDefault::Expr(Box::new(meta.value()?.parse()?))
            } else {
                ParamDefault::Trait
            });
            Ok(())
        })
    }
}
