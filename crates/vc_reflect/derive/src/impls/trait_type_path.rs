use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;
use crate::path::fp::OptionFP;

/// Generate implementation codes for `TypePath`
pub(crate) fn impl_trait_type_path(meta: &ReflectMeta) -> TokenStream {
    let vc_reflect_path = meta.vc_reflect_path();
    let trait_type_path_ = crate::path::type_path_(vc_reflect_path);

    let real_ident = meta.type_ident();
    let type_path = meta.type_path_expr();
    let type_name = meta.type_name_expr();
    let module_path = meta.module_path_expr();

    quote! {
        impl #trait_type_path_ for #real_ident {
            #[inline]
            fn type_path() -> &'static str {
                #type_path
            }

            #[inline]
            fn type_name() -> &'static str {
                #type_name
            }

            #[inline]
            fn type_ident() -> &'static str {
                #type_name
            }

            #[inline]
            fn module_path() -> #OptionFP<&'static str> {
                #module_path
            }
        }
    }
}
