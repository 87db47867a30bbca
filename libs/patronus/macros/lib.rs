extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// Usage:
/// `
/// #[patronus(name = "DocumentUpdate", derives = "Debug, Default, Clone")]
/// struct Document { name: String }
/// `
///
/// Generates `DocumentUpdate` with every field wrapped in an `Option`, chainable
/// `set_*`/`unset_*` setters and an implementation of `patronus::Partial<Document>`.
#[proc_macro_attribute]
pub fn patronus(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let attr_args = parse_macro_input!(attr as syn::AttributeArgs);

    let struct_name = input.ident.clone();
    let mut derives = Vec::new();
    let mut partial_name = None;

    for arg in attr_args {
        match arg {
            syn::NestedMeta::Meta(syn::Meta::NameValue(nv)) if nv.path.is_ident("name") => {
                if let syn::Lit::Str(lit) = nv.lit {
                    partial_name = Some(syn::Ident::new(&lit.value(), struct_name.span()));
                }
            }
            syn::NestedMeta::Meta(syn::Meta::NameValue(nv)) if nv.path.is_ident("derives") => {
                if let syn::Lit::Str(lit) = nv.lit {
                    derives = lit
                        .value()
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect();
                }
            }
            _ => {}
        }
    }

    let partial_name = match partial_name {
        Some(name) => name,
        None => {
            return syn::Error::new(struct_name.span(), "patronus: missing 'name' argument")
                .to_compile_error()
                .into()
        }
    };

    let derives_tokens = derives
        .iter()
        .map(|d| syn::Ident::new(d, struct_name.span()));

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.clone(),
            _ => {
                return syn::Error::new(
                    struct_name.span(),
                    "patronus: only structs with named fields are supported",
                )
                .to_compile_error()
                .into()
            }
        },
        _ => {
            return syn::Error::new(
                struct_name.span(),
                "patronus: only structs with named fields are supported",
            )
            .to_compile_error()
            .into()
        }
    };

    let field_definitions = fields.iter().map(|f| {
        let name = &f.ident;
        let ty = &f.ty;
        quote! {
            pub #name: Option<#ty>,
        }
    });

    let setters = fields.iter().map(|f| {
        let name = &f.ident;
        let ty = &f.ty;
        let field = name.as_ref().map(|n| n.to_string()).unwrap_or_default();
        let span = name
            .as_ref()
            .map(|n| n.span())
            .unwrap_or_else(proc_macro2::Span::call_site);
        let set_opt_fn_name = syn::Ident::new(&format!("set_opt_{field}"), span);
        let set_fn_name = syn::Ident::new(&format!("set_{field}"), span);
        let unset_fn_name = syn::Ident::new(&format!("unset_{field}"), span);
        quote! {
            pub fn #set_opt_fn_name(mut self, value: impl Into<Option<#ty>>) -> Self {
                self.#name = value.into();
                self
            }

            pub fn #set_fn_name(mut self, value: impl Into<#ty>) -> Self {
                self.#name = Some(value.into());
                self
            }

            pub fn #unset_fn_name(mut self) -> Self {
                self.#name = None;
                self
            }
        }
    });

    let empty_checks = fields.iter().map(|f| {
        let name = &f.ident;
        quote! { self.#name.is_none() }
    });

    let merged_fields = fields.iter().map(|f| {
        let name = &f.ident;
        quote! { #name: self.#name.unwrap_or_else(|| base.#name.clone()), }
    });

    let expanded = quote! {
        #input

        #[derive(#(#derives_tokens),*)]
        pub struct #partial_name {
            #(#field_definitions)*
        }

        impl #partial_name {
            #(#setters)*
        }

        impl ::patronus::Partial<#struct_name> for #partial_name {
            fn is_empty(&self) -> bool {
                true #(&& #empty_checks)*
            }

            fn merge_with(self, base: &#struct_name) -> #struct_name {
                #struct_name {
                    #(#merged_fields)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}
