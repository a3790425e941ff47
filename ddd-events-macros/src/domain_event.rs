use crate::utils::{apply_derives, ensure_trailing_field, to_screaming_snake};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use std::collections::HashMap;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, Ident, Item, Result, Token, Type, parse::Parse, parse::ParseStream};

/// #[domain_event] 宏实现
/// - 仅支持具名字段变体：`Variant { .. }`
/// - 确保每个变体具备字段：`occurred_at: DateTime<Utc>`
/// - 生成 `::ddd_events::domain_event::DomainEvent` 实现（event_name/occurred_at）
/// - 变体可覆写：`#[event(name = "...")]`
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand_event(attr.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

pub(crate) fn expand_event(attr: TokenStream2, item: TokenStream2) -> Result<TokenStream2> {
    if !attr.is_empty() {
        return Err(syn::Error::new(
            attr.span(),
            "#[domain_event] takes no arguments",
        ));
    }

    let mut input: Item = syn::parse2(item)?;

    let enum_item = match &mut input {
        Item::Enum(e) => e,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "#[domain_event] can only be used on enum types",
            ));
        }
    };

    if enum_item.variants.is_empty() {
        return Err(syn::Error::new(
            enum_item.ident.span(),
            "#[domain_event] requires at least one variant",
        ));
    }

    // 合并/追加默认派生：Debug, Clone, PartialEq, Serialize, Deserialize
    let required: Vec<syn::Path> = vec![
        syn::parse_quote!(Debug),
        syn::parse_quote!(Clone),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ];
    apply_derives(&mut enum_item.attrs, required);

    let occurred_at_ty: Type = syn::parse_quote! { ::chrono::DateTime<::chrono::Utc> };

    // 变体 -> 事件名（按变体声明顺序）
    let mut names: Vec<(Ident, syn::LitStr)> = Vec::with_capacity(enum_item.variants.len());
    let mut seen: HashMap<String, Ident> = HashMap::new();

    for v in &mut enum_item.variants {
        let variant_span = v.span();
        match &mut v.fields {
            syn::Fields::Named(fields_named) => {
                ensure_trailing_field(fields_named, "occurred_at", &occurred_at_ty);
            }
            _ => {
                return Err(syn::Error::new(
                    variant_span,
                    "#[domain_event] supports only named-field enum variants, e.g., Variant { x: T }",
                ));
            }
        }

        let mut retained_attrs = Vec::new();
        let mut name_lit: Option<syn::LitStr> = None;

        for attr in &v.attrs {
            if !attr.path().is_ident("event") {
                retained_attrs.push(attr.clone());
                continue;
            }
            if let Some(lit) = parse_variant_event_attr(attr)? {
                if name_lit.is_some() {
                    return Err(syn::Error::new(
                        attr.span(),
                        "duplicate 'name' specified for this variant",
                    ));
                }
                name_lit = Some(lit);
            }
        }
        v.attrs = retained_attrs;

        let lit =
            name_lit.unwrap_or_else(|| syn::LitStr::new(&v.ident.to_string(), v.ident.span()));
        if lit.value().is_empty() {
            return Err(syn::Error::new(lit.span(), "event name must not be empty"));
        }
        if let Some(prev) = seen.insert(lit.value(), v.ident.clone()) {
            return Err(syn::Error::new(
                lit.span(),
                format!("event name '{}' already used by variant '{prev}'", lit.value()),
            ));
        }

        names.push((v.ident.clone(), lit));
    }

    let enum_ident = &enum_item.ident;
    let vis = &enum_item.vis;
    let (impl_generics, ty_generics, where_clause) = enum_item.generics.split_for_impl();

    let name_consts = names.iter().map(|(v_ident, lit)| {
        let const_ident = format_ident!("{}", to_screaming_snake(&v_ident.to_string()));
        quote! { #vis const #const_ident: &'static str = #lit; }
    });
    let all_names = names.iter().map(|(_, lit)| lit);

    let name_match_arms = names.iter().map(|(v_ident, lit)| {
        quote! { Self::#v_ident { .. } => #lit }
    });
    let occurred_match_arms = names.iter().map(|(v_ident, _)| {
        quote! { Self::#v_ident { occurred_at, .. } => occurred_at }
    });

    Ok(quote! {
        #enum_item

        impl #impl_generics #enum_ident #ty_generics #where_clause {
            #( #name_consts )*

            /// 全部事件名（按变体声明顺序）
            #vis const EVENT_NAMES: &'static [&'static str] = &[ #( #all_names ),* ];
        }

        impl #impl_generics ::ddd_events::domain_event::DomainEvent for #enum_ident #ty_generics #where_clause {
            fn event_name(&self) -> &'static str { match self { #( #name_match_arms, )* } }
            fn occurred_at(&self) -> &#occurred_at_ty { match self { #( #occurred_match_arms, )* } }
        }
    })
}

// -------- parsing --------

// `#[event(name = "...")]`；`#[event()]` 视为未设置
fn parse_variant_event_attr(attr: &syn::Attribute) -> Result<Option<syn::LitStr>> {
    let syn::Meta::List(_) = &attr.meta else {
        return Err(syn::Error::new(attr.span(), "expected #[event(name = \"...\")]"));
    };

    let pairs: Punctuated<VariantEventAttrKv, Token![,]> =
        attr.parse_args_with(Punctuated::<VariantEventAttrKv, Token![,]>::parse_terminated)?;

    let mut name: Option<syn::LitStr> = None;
    for kv in pairs {
        match kv.key.to_string().as_str() {
            "name" => {
                if name.is_some() {
                    return Err(syn::Error::new(
                        kv.key.span(),
                        "duplicate key 'name' in attribute",
                    ));
                }
                let lit = match kv.value {
                    Expr::Lit(syn::ExprLit {
                        lit: syn::Lit::Str(lit),
                        ..
                    }) => lit,
                    other => {
                        return Err(syn::Error::new(
                            other.span(),
                            "expected string literal for 'name'",
                        ));
                    }
                };
                name = Some(lit);
            }
            _ => {
                return Err(syn::Error::new(kv.key.span(), "unknown key; expected 'name'"));
            }
        }
    }

    Ok(name)
}

struct VariantEventAttrKv {
    key: Ident,
    value: Expr,
}

impl Parse for VariantEventAttrKv {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        Ok(Self {
            key,
            value: input.parse()?,
        })
    }
}
