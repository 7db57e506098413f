use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Typed` trait.
///
/// `info_tokens` builds the `TypeInfo` and runs once, on first access.
pub(crate) fn impl_trait_typed(meta: &ReflectMeta, info_tokens: TokenStream) -> TokenStream {
    let vc_reflect_path = meta.vc_reflect_path();

    let typed_ = crate::path::typed_(vc_reflect_path);
    let type_info_ = crate::path::type_info_(vc_reflect_path);
    let cell_ = crate::path::non_generic_type_info_cell_(vc_reflect_path);

    let real_ident = meta.type_ident();

    quote! {
        impl #typed_ for #real_ident {
            fn type_info() -> &'static #type_info_ {
                static CELL: #cell_ = #cell_::new();
                CELL.get_or_init(|| {
                    #info_tokens
                })
            }
        }
    }
}
