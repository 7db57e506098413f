use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Ident, Path};

use super::TypeAttributes;

/// Type-level data shared by every generated impl.
pub(crate) struct ReflectMeta<'a> {
    vc_reflect_path: Path,
    attrs: TypeAttributes,
    type_ident: &'a Ident,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("vc_reflect_path", &self.vc_reflect_path.to_token_stream())
            .field("type_ident", &self.type_ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, type_ident: &'a Ident) -> Self {
        Self {
            vc_reflect_path: crate::path::vc_reflect(),
            attrs,
            type_ident,
        }
    }

    #[inline]
    pub fn vc_reflect_path(&self) -> &Path {
        &self.vc_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn type_ident(&self) -> &Ident {
        self.type_ident
    }

    /// Expression of the full type path.
    ///
    /// Either the custom `type_path`, or `module_path!()` joined with the ident.
    pub fn type_path_expr(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(path) => path.to_token_stream(),
            None => {
                let ident = self.type_ident.to_string();
                quote! {
                    ::core::concat!(::core::module_path!(), "::", #ident)
                }
            }
        }
    }

    /// Expression of the short type name, the last segment of the path.
    pub fn type_name_expr(&self) -> TokenStream {
        let name = match &self.attrs.type_path {
            Some(path) => {
                let path = path.value();
                match path.rsplit_once("::") {
                    Some((_, name)) => name.to_owned(),
                    None => path,
                }
            }
            None => self.type_ident.to_string(),
        };
        quote!(#name)
    }

    /// Expression of the module path, `None` for a custom path without `::`.
    pub fn module_path_expr(&self) -> TokenStream {
        use crate::path::fp::OptionFP;

        match &self.attrs.type_path {
            Some(path) => match path.value().rsplit_once("::") {
                Some((module, _)) => quote!(#OptionFP::Some(#module)),
                None => quote!(#OptionFP::None),
            },
            None => quote!(#OptionFP::Some(::core::module_path!())),
        }
    }
}
