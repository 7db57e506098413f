//! This independent module is used to provide the required path.
//! So as to minimize changes when the `vc_reflect` structure is modified.
//!
//! The only special feature is the path of vc_reflect itself,
//! See [`vc_reflect`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `vc_reflect` crate.
///
/// Not all crates can access the reflection crate itself through `vc_reflect`,
/// we have to scan the builder's `Cargo.toml`.
///
/// 1. For crates that depend on `vc_reflect`, `::vc_reflect` is returned here.
/// 2. For crates that depend on `vc_mapper`, `::vc_mapper::reflect` is returned here.
/// 3. For other situations, `::vc_reflect` is returned here, but this may be incorrect.
///
/// The cost of this function is relatively high (accessing files, obtaining read-write lock permissions, querying content...),
/// so the crate path is obtained once per macro call and passed around.
pub(crate) fn vc_reflect() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

mod info;
mod ops;

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use info::*;
pub(crate) use ops::*;

#[inline(always)]
pub(crate) fn reflect_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn reflect_hasher_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::reflect_hasher
    }
}

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::impls::NonGenericTypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn struct_partial_eq_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::impls::struct_partial_eq
    }
}

#[inline(always)]
pub(crate) fn struct_hash_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::impls::struct_hash
    }
}

#[inline(always)]
pub(crate) fn struct_debug_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_reflect_path::impls::struct_debug
    }
}
