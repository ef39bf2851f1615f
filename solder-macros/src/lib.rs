use proc_macro::TokenStream;
use quote::quote;

use syn::punctuated::Punctuated;
use syn::spanned::Spanned as _;
use syn::{DeriveInput, Error, Expr, ExprLit, Lit, LitStr, Meta, Path, Token};

const INJECTABLE_ATTR: &str = "injectable";
const CONTRACTS_OPTION: &str = "contracts";
const OVERRIDE_OPTION: &str = "use_contract";

const LIFETIMES: &[(&str, &str)] = &[
    ("scoped", "Scoped"),
    ("singleton", "Singleton"),
    ("transient", "Transient"),
];

/// Derive macro for the Discoverable trait
#[proc_macro_derive(Injectable, attributes(injectable))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    handle_derive_injectable(input)
}

fn handle_derive_injectable(input: DeriveInput) -> TokenStream {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        return TokenStream::from(
            Error::new(input.generics.span(), "Generic types are not supported")
                .to_compile_error(),
        );
    }

    let mut lifetime: Option<&'static str> = None;
    let mut contracts: Vec<Path> = Vec::new();
    let mut contract_override: Option<LitStr> = None;

    for attr in &input.attrs {
        if !attr.path().is_ident(INJECTABLE_ATTR) {
            continue;
        }
        if matches!(attr.meta, Meta::Path(_)) {
            continue;
        }
        let metas = match attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated) {
            Ok(metas) => metas,
            Err(err) => return TokenStream::from(err.to_compile_error()),
        };
        for meta in metas {
            if let Meta::Path(path) = &meta
                && let Some((_, variant)) = LIFETIMES
                    .iter()
                    .find(|(keyword, _)| path.is_ident(keyword))
            {
                if lifetime.is_some() {
                    return TokenStream::from(
                        Error::new(meta.span(), "Multiple lifetimes declared")
                            .to_compile_error(),
                    );
                }
                lifetime = Some(*variant);
                continue;
            }
            if let Meta::List(list) = &meta
                && list.path.is_ident(CONTRACTS_OPTION)
            {
                let paths =
                    match list.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated) {
                        Ok(paths) => paths,
                        Err(err) => return TokenStream::from(err.to_compile_error()),
                    };
                contracts.extend(paths);
                continue;
            }
            if let Meta::NameValue(name_value) = &meta
                && name_value.path.is_ident(OVERRIDE_OPTION)
            {
                let literal = match &name_value.value {
                    Expr::Lit(ExprLit {
                        lit: Lit::Str(literal),
                        ..
                    }) => literal.clone(),
                    _ => {
                        return TokenStream::from(
                            Error::new(
                                name_value.value.span(),
                                format!("{OVERRIDE_OPTION} expects a string literal"),
                            )
                            .to_compile_error(),
                        );
                    }
                };
                if contract_override.is_some() {
                    return TokenStream::from(
                        Error::new(meta.span(), "Multiple contract overrides declared")
                            .to_compile_error(),
                    );
                }
                contract_override = Some(literal);
                continue;
            }
            return TokenStream::from(
                Error::new(
                    meta.span(),
                    format!("Unknown {INJECTABLE_ATTR} option"),
                )
                .to_compile_error(),
            );
        }
    }

    let mut descriptor = quote! { ::solder::TypeDescriptor::of::<Self>() };
    if let Some(variant) = lifetime {
        let variant = proc_macro2::Ident::new(variant, proc_macro2::Span::call_site());
        descriptor = quote! { #descriptor.with_lifetime(::solder::Lifetime::#variant) };
    }
    for contract in &contracts {
        descriptor = quote! {
            #descriptor.with_contract(::solder::ContractRef::of::<dyn #contract>())
        };
    }
    if let Some(contract_name) = &contract_override {
        descriptor = quote! { #descriptor.with_override(#contract_name) };
    }

    quote! {
        impl ::solder::Discoverable for #name {
            fn descriptor() -> ::solder::TypeDescriptor {
                #descriptor
            }
        }
    }
    .into()
}
