use syn::ext::IdentExt;
use syn::{FnArg, GenericArgument, Ident, ImplItem, ItemImpl, Pat, PathArguments};
use syn::{ReturnType, Signature, Type, Visibility};

use super::{ParamAttributes, ParamDefault};

/// A parameter of a published constructor.
#[derive(Debug)]
pub(crate) struct ConstructorParam {
    pub name: String,
    pub ty: Type,
    pub default: Option<ParamDefault>,
}

/// A published constructor, an associated `pub fn` returning `Self`.
#[derive(Debug)]
pub(crate) struct ReflectConstructor {
    pub ident: Ident,
    pub params: Vec<ConstructorParam>,
    /// Returns `Result<Self, E>` rather than `Self`.
    pub fallible: bool,
}

/// The parsed `#[reflect_constructors]` block.
///
/// `item` is the block as it will be emitted, with parameter attributes removed.
#[derive(Debug)]
pub(crate) struct ReflectConstructors {
    pub item: ItemImpl,
    pub constructors: Vec<ReflectConstructor>,
}

impl ReflectConstructors {
    pub fn from_item(mut item: ItemImpl) -> syn::Result<Self> {
        if let Some((_, path, _)) = &item.trait_ {
            return Err(syn::Error::new_spanned(
                path,
                "`#[reflect_constructors]` can only be applied to inherent impl blocks",
            ));
        }
        if !item.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &item.generics,
                "`#[reflect_constructors]` does not support generic impl blocks",
            ));
        }

        let type_ident = match &*item.self_ty {
            Type::Path(ty) => ty.path.segments.last().map(|seg| seg.ident.clone()),
            _ => None,
        };
        let Some(type_ident) = type_ident else {
            return Err(syn::Error::new_spanned(
                &item.self_ty,
                "`#[reflect_constructors]` expects a named type",
            ));
        };

        let mut constructors = Vec::new();
        for impl_item in &mut item.items {
            let ImplItem::Fn(func) = impl_item else {
                continue;
            };
            if !matches!(func.vis, Visibility::Public(_)) {
                continue;
            }
            let Some(fallible) = constructor_output(&func.sig, &type_ident) else {
                continue;
            };
            let params = take_params(&mut func.sig)?;
            constructors.push(ReflectConstructor {
                ident: func.sig.ident.clone(),
                params,
                fallible,
            });
        }

        Ok(Self { item, constructors })
    }
}

/// `Some(fallible)` if the signature is a constructor of `type_ident`.
fn constructor_output(sig: &Signature, type_ident: &Ident) -> Option<bool> {
    if sig.receiver().is_some()
        || sig.asyncness.is_some()
        || sig.unsafety.is_some()
        || !sig.generics.params.is_empty()
    {
        return None;
    }

    let ReturnType::Type(_, output) = &sig.output else {
        return None;
    };

    if is_self_type(output, type_ident) {
        return Some(false);
    }

    let Type::Path(path) = &**output else {
        return None;
    };
    let last = path.path.segments.last()?;
    if last.ident != "Result" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(ok) if is_self_type(ok, type_ident) => Some(true),
        _ => None,
    }
}

fn is_self_type(ty: &Type, type_ident: &Ident) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };
    path.qself.is_none()
        && path.path.segments.len() == 1
        && path.path.segments[0].arguments.is_empty()
        && (path.path.segments[0].ident == "Self" || path.path.segments[0].ident == *type_ident)
}

fn take_params(sig: &mut Signature) -> syn::Result<Vec<ConstructorParam>> {
    let mut params = Vec::with_capacity(sig.inputs.len());
    for input in &mut sig.inputs {
        let FnArg::Typed(arg) = input else {
            continue;
        };
        let attrs = ParamAttributes::take_attrs(&mut arg.attrs)?;
        let Pat::Ident(pat) = &*arg.pat else {
            return Err(syn::Error::new_spanned(
                &arg.pat,
                "constructor parameters must be plain identifiers",
            ));
        };
        params.push(ConstructorParam {
            name: pat.ident.unraw().to_string(),
            ty: (*arg.ty).clone(),
            default: attrs.default,
        });
    }
    Ok(params)
}
