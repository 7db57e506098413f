//! Full paths of `core` and `std` items used in generated code.
//!
//! The generated code must not depend on the prelude of the calling crate.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_full_path {
    ($($name:ident => $($path:ident)::+;)*) => {
        $(
            pub(crate) struct $name;

            impl ToTokens for $name {
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    tokens.extend(quote!(:: $($path)::+));
                }
            }
        )*
    };
}

define_full_path! {
    OptionFP => core::option::Option;
    ResultFP => core::result::Result;
    CloneFP => core::clone::Clone;
    DefaultFP => core::default::Default;
    PartialEqFP => core::cmp::PartialEq;
    HashFP => core::hash::Hash;
    HasherFP => core::hash::Hasher;
    DebugFP => core::fmt::Debug;
    FormatterFP => core::fmt::Formatter;
    FmtResultFP => core::fmt::Result;
    BoxFP => std::boxed::Box;
    VecFP => std::vec::Vec;
}
