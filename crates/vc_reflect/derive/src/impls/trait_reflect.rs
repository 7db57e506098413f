use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;
use crate::path::fp::{BoxFP, ResultFP};

/// Generate implementation code for `Reflect` trait.
pub(crate) fn impl_trait_reflect(
    meta: &ReflectMeta,
    reflect_kind_token: TokenStream,
    reflect_clone_tokens: TokenStream,
    reflect_eq_tokens: TokenStream,
    reflect_hash_tokens: TokenStream,
    reflect_debug_tokens: TokenStream,
) -> TokenStream {
    let vc_reflect_path = meta.vc_reflect_path();

    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(vc_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(vc_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(vc_reflect_path);

    let real_ident = meta.type_ident();

    quote! {
        impl #reflect_ for #real_ident {
            fn set(&mut self, value: #BoxFP<dyn #reflect_>) -> #ResultFP<(), #BoxFP<dyn #reflect_>> {
                *self = value.take::<Self>()?;
                #ResultFP::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#reflect_kind_token
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#reflect_kind_token(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#reflect_kind_token(self)
            }

            #reflect_clone_tokens

            #reflect_eq_tokens

            #reflect_hash_tokens

            #reflect_debug_tokens
        }
    }
}
