//! Derive macros for hexwin.
//!
//! `#[derive(WithBuilders)]` adds a `with_<field>(value)` method per named
//! field, taking `self` by value and returning `Self`.
//!
//! Field options, given as `#[with_builders(...)]`:
//! - `skip`: no method for this field
//! - `into`: the method accepts `impl Into<FieldType>`
//!
//! ```ignore
//! use hexwin_macros::WithBuilders;
//!
//! #[derive(Default, WithBuilders)]
//! pub struct HostConfig {
//!     #[with_builders(into)]
//!     pub name: String,
//!     pub screen_scale: i32,
//!     #[with_builders(skip)]
//!     frame: u64,
//! }
//!
//! let config = HostConfig::default().with_name("demo").with_screen_scale(2);
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Field, Fields};

#[proc_macro_derive(WithBuilders, attributes(with_builders))]
pub fn derive_with_builders(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "WithBuilders needs a struct with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new(
                input.ident.span(),
                "WithBuilders can only be derived for structs",
            ))
        }
    };

    let methods = fields
        .iter()
        .map(builder_method)
        .collect::<syn::Result<Vec<_>>>()?;

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#methods)*
        }
    })
}

fn builder_method(field: &Field) -> syn::Result<TokenStream2> {
    let options = FieldOptions::parse(field)?;
    let Some(name) = field.ident.as_ref() else {
        return Ok(TokenStream2::new());
    };
    if options.skip {
        return Ok(TokenStream2::new());
    }

    let ty = &field.ty;
    let method = format_ident!("with_{}", name);
    let docs = format!("Set `{name}` (builder style)");
    Ok(if options.into {
        quote! {
            #[doc = #docs]
            #[must_use]
            pub fn #method(mut self, value: impl ::core::convert::Into<#ty>) -> Self {
                self.#name = value.into();
                self
            }
        }
    } else {
        quote! {
            #[doc = #docs]
            #[must_use]
            pub fn #method(mut self, value: #ty) -> Self {
                self.#name = value;
                self
            }
        }
    })
}

#[derive(Default)]
struct FieldOptions {
    skip: bool,
    into: bool,
}

impl FieldOptions {
    fn parse(field: &Field) -> syn::Result<Self> {
        let mut options = Self::default();
        for attr in field
            .attrs
            .iter()
            .filter(|attr| attr.path().is_ident("with_builders"))
        {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    options.skip = true;
                    Ok(())
                } else if meta.path.is_ident("into") {
                    options.into = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `skip` or `into`"))
                }
            })?;
        }
        Ok(options)
    }
}
