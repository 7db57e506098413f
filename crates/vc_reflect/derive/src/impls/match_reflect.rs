use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::ReflectStruct;

/// Provided for `#[derive(Reflect)]`.
pub(crate) fn match_reflect_impls(ast: &DeriveInput) -> TokenStream {
    // Parse type kind, attribute and fields infomation.
    let reflect_struct = match ReflectStruct::from_input(ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let reflect_impls = super::impl_struct(&reflect_struct);

    TokenStream::from(quote! {
        const _: () = {
            #reflect_impls
        };
    })
}
