//! See following macros:
//!
//! - [`Reflect`]
//! - [`reflect_constructors`]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemImpl, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits for a struct with
/// named fields:
///
/// - `TypePath`
/// - `Typed`, with a `StructInfo`
/// - `Struct`
/// - `Reflect`
///
/// Tuple structs, unit structs, enums, unions and generic types are rejected.
/// The type must implement [`Clone`].
///
/// ## Field Exposure
///
/// `pub` fields are published as readable and writable. Other fields are not
/// published unless marked `readonly`, in which case they are readable only.
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// struct Person {
///     pub name: String,          // read-write
///     #[reflect(readonly)]
///     id: u64,                   // read-only
///     #[reflect(ignore)]
///     pub cache: Vec<u8>,        // hidden
///     secret: String,            // hidden
/// }
/// ```
///
/// ## Constructors
///
/// - `default`: publishes the parameterless constructor backed by [`Default`].
/// - `constructors`: publishes the constructors collected by
///   [`reflect_constructors`] on an inherent `impl` block.
///
/// ```rust, ignore
/// #[derive(Reflect, Clone, Default)]
/// #[reflect(default, constructors)]
/// pub struct Person { /* ... */ }
///
/// #[reflect_constructors]
/// impl Person { /* ... */ }
/// ```
///
/// ## Implicit Conversions
///
/// `into(T, ..)` declares `Self -> T` through `Self: Into<T>`, and
/// `from(T, ..)` declares `T -> Self` through `T: Into<Self>`.
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// #[reflect(into(String), from(String))]
/// pub struct CompleteName { /* ... */ }
/// ```
///
/// ## Standard Traits
///
/// By default `reflect_partial_eq`, `reflect_hash` and `reflect_debug` work
/// field by field. The flags `partial_eq`, `hash` and `debug` switch them to
/// the type's own [`PartialEq`], [`Hash`](core::hash::Hash) and
/// [`Debug`](core::fmt::Debug) impls.
///
/// ## Custom Type Path
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// #[reflect(type_path = "crm::people::Person")]
/// struct Person { /* ... */ }
/// ```
///
/// The default path is `module_path!()` followed by the type name.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(&ast)
}

/// Publishes the public constructors of an inherent `impl` block.
///
/// Every `pub fn` without a receiver that returns `Self` (or the type by
/// name), or a `Result` of it, becomes a constructor. Other items are left
/// alone. An `Err` from a fallible constructor is reported as a rejected
/// construction.
///
/// Parameters must be plain identifiers, their names are matched against
/// source attributes ignoring case. `#[reflect(default)]` marks a parameter
/// optional and fills it with [`Default::default`], `#[reflect(default = expr)]`
/// fills it with `expr`.
///
/// The block is emitted unchanged apart from the removed `#[reflect]`
/// attributes, plus an impl of `Constructors` for the type. Enable it on the
/// derive with `#[reflect(constructors)]`.
///
/// ```rust, ignore
/// #[reflect_constructors]
/// impl Money {
///     pub fn new(amount: i64, #[reflect(default = String::from("BRL"))] currency: String) -> Self {
///         Self { amount, currency }
///     }
///
///     pub fn parse(text: String) -> Result<Self, ParseMoneyError> {
///         /* ... */
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn reflect_constructors(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = proc_macro2::TokenStream::from(args);
    if !args.is_empty() {
        return syn::Error::new_spanned(args, "`reflect_constructors` takes no arguments")
            .into_compile_error()
            .into();
    }

    let item = parse_macro_input!(input as ItemImpl);

    impls::match_constructor_impls(item)
}
