use crate::utils::apply_derives;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Ident, Item, Token};

const KINDS: [&str; 3] = ["User", "Channel", "Role"];

/// `#[snowflake_id(kind = User|Channel|Role)]` 展开
/// - 仅支持单字段 tuple struct，内部类型为 `u64`；
/// - 合并派生：Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize（transparent）；
/// - 实现 `Display`、`FromStr`、与 `u64` 的双向 `From`，以及 `OptionType`。
pub(crate) fn expand(cfg: SnowflakeAttrConfig, item: Item) -> syn::Result<TokenStream2> {
    let mut st = match item {
        Item::Struct(s) => s,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "#[snowflake_id] only on struct",
            ));
        }
    };

    let inner_ty = match &st.fields {
        syn::Fields::Unnamed(f) if f.unnamed.len() == 1 => f.unnamed[0].ty.clone(),
        other => {
            return Err(syn::Error::new(
                other.span(),
                "#[snowflake_id] requires a tuple struct with exactly one field, e.g., struct UserId(u64);",
            ));
        }
    };

    apply_derives(
        &mut st.attrs,
        vec![
            syn::parse_quote!(Debug),
            syn::parse_quote!(Clone),
            syn::parse_quote!(Copy),
            syn::parse_quote!(Default),
            syn::parse_quote!(PartialEq),
            syn::parse_quote!(Eq),
            syn::parse_quote!(Hash),
            syn::parse_quote!(PartialOrd),
            syn::parse_quote!(Ord),
            syn::parse_quote!(::serde::Serialize),
            syn::parse_quote!(::serde::Deserialize),
        ],
    );
    st.attrs.push(syn::parse_quote!(#[serde(transparent)]));

    let ident = &st.ident;
    let kind = &cfg.kind;

    Ok(quote! {
        #st

        impl ::std::str::FromStr for #ident {
            type Err = <#inner_ty as ::std::str::FromStr>::Err;
            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let inner: #inner_ty = s.parse()?;
                ::std::result::Result::Ok(Self(inner))
            }
        }

        impl ::std::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}", self.0)
            }
        }

        impl ::std::convert::From<#inner_ty> for #ident {
            fn from(inner: #inner_ty) -> Self {
                Self(inner)
            }
        }

        impl ::std::convert::From<#ident> for #inner_ty {
            fn from(id: #ident) -> Self {
                id.0
            }
        }

        impl ::slashbind::kind::OptionType for #ident {
            const KIND: ::slashbind::kind::OptionKind = ::slashbind::kind::OptionKind::#kind;

            fn from_decoded(decoded: ::slashbind::kind::Decoded) -> ::std::option::Option<Self> {
                match decoded {
                    ::slashbind::kind::Decoded::Identifier(id) => ::std::option::Option::Some(Self(id)),
                    _ => ::std::option::Option::None,
                }
            }
        }
    })
}

// -------- parsing --------

pub(crate) struct SnowflakeAttrConfig {
    kind: Ident,
}

impl Parse for SnowflakeAttrConfig {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "kind" {
            return Err(syn::Error::new(key.span(), "unknown key; expected 'kind'"));
        }
        let _eq: Token![=] = input.parse()?;
        let kind: Ident = input.parse()?;
        if !KINDS.iter().any(|k| kind == *k) {
            return Err(syn::Error::new(
                kind.span(),
                "expected one of: User | Channel | Role",
            ));
        }
        if !input.is_empty() {
            let _comma: Option<Token![,]> = input.parse()?;
        }
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after 'kind'"));
        }
        Ok(Self { kind })
    }
}
