use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn type_path_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::info::TypePath
    }
}

#[inline]
pub(crate) fn typed_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::info::Typed
    }
}

#[inline]
pub(crate) fn type_info_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::info::TypeInfo
    }
}

#[inline]
pub(crate) fn struct_info_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::info::StructInfo
    }
}

#[inline]
pub(crate) fn named_field_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::info::NamedField
    }
}

#[inline]
pub(crate) fn constructors_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::info::Constructors
    }
}

#[inline]
pub(crate) fn constructor_info_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::info::ConstructorInfo
    }
}

#[inline]
pub(crate) fn param_info_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::info::ParamInfo
    }
}

#[inline]
pub(crate) fn implicit_conversion_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::info::ImplicitConversion
    }
}

#[inline]
pub(crate) fn reflect_kind_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::info::ReflectKind
    }
}
