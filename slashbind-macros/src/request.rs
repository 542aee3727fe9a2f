use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Attribute, Data, DataStruct, DeriveInput, Fields, LitStr};

/// `#[derive(Request)]` 展开
/// - 仅支持具名字段结构体，字段顺序即选项顺序；
/// - 字段属性：`#[option(desc = "...")]`、`#[option(desc = "...", optional)]`；
/// - 字段类型须实现 `OptionType`，否则在此处报编译错误。
pub(crate) fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(named),
            ..
        }) => &named.named,
        _ => {
            return Err(syn::Error::new(
                input.span(),
                "#[derive(Request)] only supports named-field struct",
            ));
        }
    };

    let mut specs = Vec::with_capacity(fields.len());
    let mut arms = Vec::with_capacity(fields.len());

    for field in fields {
        let Some(field_ident) = field.ident.as_ref() else {
            return Err(syn::Error::new(field.span(), "expected named field"));
        };
        let name = field_ident.unraw().to_string();
        let ty = &field.ty;
        let cfg = OptionAttrConfig::from_attrs(&field.attrs)?;

        let desc = cfg.desc.map(|lit| lit.value()).unwrap_or_default();
        let required = if cfg.optional {
            quote! { false }
        } else {
            quote! { <#ty as ::slashbind::kind::OptionType>::REQUIRED }
        };

        specs.push(quote! {
            ::slashbind::request::FieldSpec {
                ident: #name,
                kind: <#ty as ::slashbind::kind::OptionType>::KIND,
                description: #desc,
                required: #required,
            }
        });

        arms.push(quote! {
            #name => {
                self.#field_ident = <#ty as ::slashbind::kind::OptionType>::decode(value)?;
                ::std::result::Result::Ok(())
            }
        });
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::slashbind::request::Request for #ident #ty_generics #where_clause {
            const FIELDS: &'static [::slashbind::request::FieldSpec] = &[ #(#specs),* ];

            #[allow(unused_variables)]
            fn assign(
                &mut self,
                ident: &str,
                value: &::slashbind::interaction::OptionValue,
            ) -> ::std::result::Result<(), ::slashbind::error::DecodeError> {
                match ident {
                    #(#arms)*
                    other => ::std::result::Result::Err(
                        ::slashbind::error::DecodeError::UnknownField(
                            ::std::string::ToString::to_string(other),
                        ),
                    ),
                }
            }
        }
    })
}

// -------- parsing --------

#[derive(Default)]
struct OptionAttrConfig {
    desc: Option<LitStr>,
    optional: bool,
}

impl OptionAttrConfig {
    fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut cfg = Self::default();
        let mut optional_seen = false;

        for attr in attrs.iter().filter(|a| a.path().is_ident("option")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("desc") {
                    if cfg.desc.is_some() {
                        return Err(meta.error("duplicate key 'desc' in attribute"));
                    }
                    cfg.desc = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("optional") {
                    if optional_seen {
                        return Err(meta.error("duplicate key 'optional' in attribute"));
                    }
                    optional_seen = true;
                    cfg.optional = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown key; expected 'desc' | 'optional'"))
                }
            })?;
        }

        Ok(cfg)
    }
}
