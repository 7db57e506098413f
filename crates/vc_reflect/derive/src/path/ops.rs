use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn arg_list_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::ops::ArgList
    }
}

#[inline]
pub(crate) fn construct_error_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::ops::ConstructError
    }
}

#[inline]
pub(crate) fn reflect_clone_error_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::ops::ReflectCloneError
    }
}

#[inline]
pub(crate) fn reflect_ref_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::ops::ReflectRef
    }
}

#[inline]
pub(crate) fn reflect_mut_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::ops::ReflectMut
    }
}

#[inline]
pub(crate) fn struct_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::ops::Struct
    }
}

#[inline]
pub(crate) fn struct_field_iter_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::ops::StructFieldIter
    }
}
