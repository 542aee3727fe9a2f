use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::spanned::Spanned;
use syn::{DeriveInput, LitStr};

/// `#[derive(Command)]` 展开
/// - 必填：`#[command(name = "...")]`
/// - 可选：`human_name = "..."`（默认同 name）、`description = "..."`（默认空）
pub(crate) fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let cfg = CommandAttrConfig::from_input(&input)?;

    let name = cfg
        .name
        .ok_or_else(|| syn::Error::new(input.span(), "missing #[command(name = \"...\")]"))?;
    let human_name = cfg.human_name.unwrap_or_else(|| name.clone());
    let description = cfg
        .description
        .unwrap_or_else(|| LitStr::new("", name.span()));

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::slashbind::command::Command for #ident #ty_generics #where_clause {
            fn command_data(&self) -> ::slashbind::command::CommandData {
                ::slashbind::command::CommandData::new(#name, #human_name, #description)
            }
        }
    })
}

// -------- parsing --------

#[derive(Default)]
struct CommandAttrConfig {
    name: Option<LitStr>,
    human_name: Option<LitStr>,
    description: Option<LitStr>,
}

impl CommandAttrConfig {
    fn from_input(input: &DeriveInput) -> syn::Result<Self> {
        let mut cfg = Self::default();

        for attr in input.attrs.iter().filter(|a| a.path().is_ident("command")) {
            attr.parse_nested_meta(|meta| {
                let slot = if meta.path.is_ident("name") {
                    &mut cfg.name
                } else if meta.path.is_ident("human_name") {
                    &mut cfg.human_name
                } else if meta.path.is_ident("description") {
                    &mut cfg.description
                } else {
                    return Err(meta.error(
                        "unknown key; expected 'name' | 'human_name' | 'description'",
                    ));
                };

                if slot.is_some() {
                    return Err(meta.error("duplicate key in attribute"));
                }
                *slot = Some(meta.value()?.parse()?);
                Ok(())
            })?;
        }

        Ok(cfg)
    }
}
