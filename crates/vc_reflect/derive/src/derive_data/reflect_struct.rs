use syn::{Data, DeriveInput, Fields, Ident, Type, Visibility};

use super::{FieldAttributes, ReflectMeta, TypeAttributes};

/// A field of the derived struct.
#[derive(Debug)]
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
    pub is_pub: bool,
}

impl StructField<'_> {
    /// The name published in `StructInfo`, without a raw identifier prefix.
    pub fn name(&self) -> String {
        syn::ext::IdentExt::unraw(self.ident).to_string()
    }

    /// `pub` fields, and any field marked `readonly`.
    pub fn is_active(&self) -> bool {
        self.attrs.ignore.is_none() && (self.is_pub || self.attrs.readonly.is_some())
    }

    pub fn is_writable(&self) -> bool {
        self.is_active() && self.attrs.readonly.is_none()
    }
}

/// A struct with named fields, the only shape `#[derive(Reflect)]` accepts.
#[derive(Debug)]
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if !input.generics.params.is_empty() || input.generics.where_clause.is_some() {
            return Err(syn::Error::new_spanned(
                &input.generics,
                "`#[derive(Reflect)]` does not support generic types",
            ));
        }

        let fields = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => &fields.named,
                Fields::Unnamed(_) | Fields::Unit => {
                    return Err(syn::Error::new_spanned(
                        &input.ident,
                        "`#[derive(Reflect)]` only supports structs with named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`#[derive(Reflect)]` does not support enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`#[derive(Reflect)]` does not support unions",
                ));
            }
        };

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        let mut errors: Option<syn::Error> = None;
        let mut struct_fields = Vec::with_capacity(fields.len());
        for field in fields {
            match FieldAttributes::parse_attrs(&field.attrs) {
                Ok(field_attrs) => struct_fields.push(StructField {
                    // Named fields always carry an ident.
                    ident: field.ident.as_ref().unwrap_or(&input.ident),
                    ty: &field.ty,
                    attrs: field_attrs,
                    is_pub: matches!(field.vis, Visibility::Public(_)),
                }),
                Err(err) => match &mut errors {
                    Some(first) => first.combine(err),
                    None => errors = Some(err),
                },
            }
        }
        if let Some(err) = errors {
            return Err(err);
        }

        Ok(Self {
            meta: ReflectMeta::new(attrs, &input.ident),
            fields: struct_fields,
        })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Published fields in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.is_active())
    }
}
