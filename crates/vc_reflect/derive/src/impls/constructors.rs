use proc_macro::TokenStream;
use quote::{format_ident, quote};

use crate::derive_data::{ParamDefault, ReflectConstructor, ReflectConstructors};
use crate::path::fp::{BoxFP, DefaultFP, ResultFP, VecFP};

/// Provided for `#[reflect_constructors]`.
pub(crate) fn match_constructor_impls(item: syn::ItemImpl) -> TokenStream {
    let parsed = match ReflectConstructors::from_item(item) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let vc_reflect_path = crate::path::vc_reflect();
    let constructors_ = crate::path::constructors_(&vc_reflect_path);
    let constructor_info_ = crate::path::constructor_info_(&vc_reflect_path);

    let self_ty = &parsed.item.self_ty;
    let count = parsed.constructors.len();
    let infos = parsed
        .constructors
        .iter()
        .map(|ctor| constructor_info_tokens(&vc_reflect_path, ctor));

    let item = &parsed.item;

    TokenStream::from(quote! {
        #item

        const _: () = {
            impl #constructors_ for #self_ty {
                fn constructors() -> #VecFP<#constructor_info_> {
                    let constructors: [#constructor_info_; #count] = [#(#infos,)*];
                    #VecFP::from(constructors)
                }
            }
        };
    })
}

/// Generate one `ConstructorInfo` expression.
///
/// ```ignore
/// ConstructorInfo::new::<Self>(
///     "new",
///     [ParamInfo::new::<String>("name"), ...],
///     |args: &mut ArgList| -> Result<Box<dyn Reflect>, ConstructError> {
///         let arg0 = args.take::<String>(0)?;
///         Ok(Box::new(Self::new(arg0)))
///     },
/// )
/// ```
fn constructor_info_tokens(
    vc_reflect_path: &syn::Path,
    ctor: &ReflectConstructor,
) -> proc_macro2::TokenStream {
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let constructor_info_ = crate::path::constructor_info_(vc_reflect_path);
    let param_info_ = crate::path::param_info_(vc_reflect_path);
    let arg_list_ = crate::path::arg_list_(vc_reflect_path);
    let construct_error_ = crate::path::construct_error_(vc_reflect_path);

    let fn_ident = &ctor.ident;
    let fn_name = fn_ident.to_string();
    let param_count = ctor.params.len();

    let params = ctor.params.iter().map(|param| {
        let ty = &param.ty;
        let name = &param.name;
        let with_default = match &param.default {
            None => proc_macro2::TokenStream::new(),
            Some(ParamDefault::Trait) => quote! {
                .with_default(|| -> #BoxFP<dyn #reflect_> {
                    #BoxFP::new(<#ty as #DefaultFP>::default())
                })
            },
            Some(ParamDefault::Expr(expr)) => quote! {
                .with_default(|| -> #BoxFP<dyn #reflect_> {
                    let value: #ty = #expr;
                    #BoxFP::new(value)
                })
            },
        };
        quote!(#param_info_::new::<#ty>(#name) #with_default)
    });

    let arg_idents: Vec<_> = (0..param_count).map(|i| format_ident!("arg{}", i)).collect();
    let takes = ctor.params.iter().enumerate().map(|(index, param)| {
        let ty = &param.ty;
        let ident = &arg_idents[index];
        quote!(let #ident = args.take::<#ty>(#index)?;)
    });

    let call = if ctor.fallible {
        quote! {
            Self::#fn_ident(#(#arg_idents),*)
                .map_err(|err| #construct_error_::rejected::<Self>(err))?
        }
    } else {
        quote!(Self::#fn_ident(#(#arg_idents),*))
    };

    // A parameterless constructor never reads its arguments.
    let args = if param_count == 0 {
        quote!(_args)
    } else {
        quote!(args)
    };

    quote! {
        #constructor_info_::new::<Self>(
            #fn_name,
            {
                let params: [#param_info_; #param_count] = [#(#params,)*];
                params
            },
            |#args: &mut #arg_list_| -> #ResultFP<#BoxFP<dyn #reflect_>, #construct_error_> {
                #(#takes)*
                let value: #BoxFP<dyn #reflect_> = #BoxFP::new(#call);
                #ResultFP::Ok(value)
            },
        )
    }
}
