use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::{ReflectMeta, ReflectStruct, StructField};
use crate::path::fp::{BoxFP, CloneFP, FmtResultFP, FormatterFP, OptionFP, ResultFP, VecFP};

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(meta, struct_info_tokens(info));

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        quote!(Struct),
        get_struct_clone_impl(meta),
        get_struct_partial_eq_impl(meta),
        get_struct_hash_impl(meta),
        get_struct_debug_impl(meta),
    );

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate the `TypeInfo::Struct(...)` expression.
///
/// ```ignore
/// TypeInfo::Struct(
///     StructInfo::new::<Self>(&[NamedField::new::<T>("a"), ...])
///         .with_constructors(...)
///         .with_conversions(...)
/// )
/// ```
fn struct_info_tokens(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let attrs = meta.attrs();
    let vc_reflect_path = meta.vc_reflect_path();

    let type_info_ = crate::path::type_info_(vc_reflect_path);
    let struct_info_ = crate::path::struct_info_(vc_reflect_path);
    let named_field_ = crate::path::named_field_(vc_reflect_path);
    let constructor_info_ = crate::path::constructor_info_(vc_reflect_path);
    let constructors_ = crate::path::constructors_(vc_reflect_path);
    let implicit_conversion_ = crate::path::implicit_conversion_(vc_reflect_path);

    let fields = info.active_fields().map(|field| {
        let ty = field.ty;
        let name = field.name();
        if field.is_writable() {
            quote!(#named_field_::new::<#ty>(#name))
        } else {
            quote!(#named_field_::new::<#ty>(#name).read_only())
        }
    });

    // `Default` first, then the explicit constructors.
    let mut constructors = Vec::new();
    if attrs.default_constructor.is_some() {
        constructors.push(quote! {
            .with_constructors([#constructor_info_::from_default::<Self>()])
        });
    }
    if attrs.constructors.is_some() {
        constructors.push(quote! {
            .with_constructors(<Self as #constructors_>::constructors())
        });
    }

    let into = attrs.into.iter().map(|target| {
        quote!(#implicit_conversion_::new::<Self, #target>())
    });
    let from = attrs.from.iter().map(|source| {
        quote!(#implicit_conversion_::new::<#source, Self>())
    });
    let conversion_count = attrs.into.len() + attrs.from.len();
    let conversions = if conversion_count == 0 {
        TokenStream::new()
    } else {
        quote! {
            .with_conversions({
                let conversions: [#implicit_conversion_; #conversion_count] = [#(#into,)* #(#from,)*];
                #VecFP::from(conversions)
            })
        }
    };

    quote! {
        #type_info_::Struct(
            #struct_info_::new::<Self>(&[#(#fields,)*])
                #(#constructors)*
                #conversions
        )
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let vc_reflect_path = meta.vc_reflect_path();

    let struct_ = crate::path::struct_(vc_reflect_path);
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(vc_reflect_path);

    let real_ident = meta.type_ident();

    let active: Vec<_> = info.active_fields().collect();
    let field_len = active.len();

    let names: Vec<String> = active.iter().map(|field| field.name()).collect();
    let idents: Vec<_> = active.iter().map(|field| field.ident).collect();
    let indices: Vec<usize> = (0..field_len).collect();

    let writable = active.iter().enumerate().filter(|(_, field)| field.is_writable());
    let (mut_indices, mut_fields): (Vec<usize>, Vec<&StructField<'_>>) =
        writable.map(|(index, field)| (index, *field)).unzip();
    let mut_names: Vec<String> = mut_fields.iter().map(|field| field.name()).collect();
    let mut_idents: Vec<_> = mut_fields.iter().map(|field| field.ident).collect();

    // Repetitions bind their variables with `let`, which cannot shadow a unit struct.
    let option_ = OptionFP;

    quote! {
        impl #struct_ for #real_ident {
            fn field(&self, name: &str) -> #OptionFP<&dyn #reflect_> {
                match name {
                    #(#names => #option_::Some(&self.#idents as &dyn #reflect_),)*
                    _ => #OptionFP::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #OptionFP<&mut dyn #reflect_> {
                match name {
                    #(#mut_names => #option_::Some(&mut self.#mut_idents as &mut dyn #reflect_),)*
                    _ => #OptionFP::None,
                }
            }

            fn field_at(&self, index: usize) -> #OptionFP<&dyn #reflect_> {
                match index {
                    #(#indices => #option_::Some(&self.#idents as &dyn #reflect_),)*
                    _ => #OptionFP::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #OptionFP<&mut dyn #reflect_> {
                match index {
                    #(#mut_indices => #option_::Some(&mut self.#mut_idents as &mut dyn #reflect_),)*
                    _ => #OptionFP::None,
                }
            }

            fn name_at(&self, index: usize) -> #OptionFP<&str> {
                match index {
                    #(#indices => #option_::Some(#names),)*
                    _ => #OptionFP::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}

fn get_struct_clone_impl(meta: &ReflectMeta) -> TokenStream {
    let vc_reflect_path = meta.vc_reflect_path();
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let reflect_clone_error_ = crate::path::reflect_clone_error_(vc_reflect_path);

    quote! {
        #[inline]
        fn reflect_clone(&self) -> #ResultFP<#BoxFP<dyn #reflect_>, #reflect_clone_error_> {
            #ResultFP::Ok(#BoxFP::new(<Self as #CloneFP>::clone(self)))
        }
    }
}

fn get_struct_partial_eq_impl(meta: &ReflectMeta) -> TokenStream {
    use crate::path::fp::PartialEqFP;

    let vc_reflect_path = meta.vc_reflect_path();
    let reflect_ = crate::path::reflect_(vc_reflect_path);

    if meta.attrs().avail_traits.partial_eq.is_some() {
        quote! {
            fn reflect_partial_eq(&self, other: &dyn #reflect_) -> #OptionFP<bool> {
                #OptionFP::Some(
                    other
                        .downcast_ref::<Self>()
                        .is_some_and(|other| <Self as #PartialEqFP>::eq(self, other)),
                )
            }
        }
    } else {
        let struct_partial_eq_ = crate::path::struct_partial_eq_(vc_reflect_path);
        quote! {
            #[inline]
            fn reflect_partial_eq(&self, other: &dyn #reflect_) -> #OptionFP<bool> {
                #struct_partial_eq_(self, other)
            }
        }
    }
}

fn get_struct_hash_impl(meta: &ReflectMeta) -> TokenStream {
    use crate::path::fp::{HashFP, HasherFP};

    let vc_reflect_path = meta.vc_reflect_path();

    if meta.attrs().avail_traits.hash.is_some() {
        let reflect_hasher_ = crate::path::reflect_hasher_(vc_reflect_path);
        quote! {
            fn reflect_hash(&self) -> #OptionFP<u64> {
                let mut hasher = #reflect_hasher_();
                <Self as #HashFP>::hash(self, &mut hasher);
                #OptionFP::Some(#HasherFP::finish(&hasher))
            }
        }
    } else {
        let struct_hash_ = crate::path::struct_hash_(vc_reflect_path);
        quote! {
            #[inline]
            fn reflect_hash(&self) -> #OptionFP<u64> {
                #struct_hash_(self)
            }
        }
    }
}

fn get_struct_debug_impl(meta: &ReflectMeta) -> TokenStream {
    use crate::path::fp::DebugFP;

    if meta.attrs().avail_traits.debug.is_some() {
        quote! {
            #[inline]
            fn reflect_debug(&self, f: &mut #FormatterFP<'_>) -> #FmtResultFP {
                <Self as #DebugFP>::fmt(self, f)
            }
        }
    } else {
        let struct_debug_ = crate::path::struct_debug_(meta.vc_reflect_path());
        quote! {
            #[inline]
            fn reflect_debug(&self, f: &mut #FormatterFP<'_>) -> #FmtResultFP {
                #struct_debug_(self, f)
            }
        }
    }
}
