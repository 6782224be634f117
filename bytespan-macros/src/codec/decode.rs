//! Decode derive macro implementation.

use super::has_skip_attr;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derive the `Decode` trait for a struct.
pub fn derive_decode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let generics = super::with_bound(&input.generics, syn::parse_quote!(bytespan::Decode));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let (reads, constructor, min_size) = match &input.data {
        Data::Struct(data) => {
            let (reads, constructor) = generate_struct(name, &data.fields)?;
            let min_size = generate_min_size(&data.fields);
            (reads, constructor, min_size)
        }
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Decode derive supports only structs: the wire format carries \
                 no type tags, so enums have no encoding.",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Decode derive is not supported for unions.",
            ));
        }
    };

    Ok(quote! {
        impl #impl_generics bytespan::Decode for #name #ty_generics #where_clause {
            const MIN_SIZE: usize = #min_size;

            fn decode(
                cursor: &mut bytespan::ReadCursor<'_>,
            ) -> Result<Self, bytespan::WireError> {
                #reads
                Ok(#constructor)
            }
        }
    })
}

fn generate_struct(
    name: &syn::Ident,
    fields: &Fields,
) -> syn::Result<(TokenStream2, TokenStream2)> {
    match fields {
        Fields::Named(named) => {
            let field_reads: Vec<_> = named
                .named
                .iter()
                .map(|f| {
                    let field_name = &f.ident;
                    let field_type = &f.ty;
                    if has_skip_attr(f) {
                        quote! {
                            let #field_name: #field_type = Default::default();
                        }
                    } else {
                        quote! {
                            let #field_name =
                                <#field_type as bytespan::Decode>::decode(cursor)?;
                        }
                    }
                })
                .collect();

            let field_names: Vec<_> = named.named.iter().map(|f| &f.ident).collect();
            let constructor = quote! { #name { #(#field_names),* } };

            Ok((quote! { #(#field_reads)* }, constructor))
        }
        Fields::Unnamed(unnamed) => {
            let field_reads: Vec<_> = unnamed
                .unnamed
                .iter()
                .enumerate()
                .map(|(i, f)| {
                    let field_name =
                        syn::Ident::new(&format!("field_{}", i), proc_macro2::Span::call_site());
                    let field_type = &f.ty;
                    if has_skip_attr(f) {
                        quote! {
                            let #field_name: #field_type = Default::default();
                        }
                    } else {
                        quote! {
                            let #field_name =
                                <#field_type as bytespan::Decode>::decode(cursor)?;
                        }
                    }
                })
                .collect();

            let field_names: Vec<_> = (0..unnamed.unnamed.len())
                .map(|i| syn::Ident::new(&format!("field_{}", i), proc_macro2::Span::call_site()))
                .collect();
            let constructor = quote! { #name(#(#field_names),*) };

            Ok((quote! { #(#field_reads)* }, constructor))
        }
        Fields::Unit => Ok((quote! {}, quote! { #name })),
    }
}

/// Sum of the fields' compile-time size lower bounds; skipped fields are
/// not on the wire and contribute nothing.
fn generate_min_size(fields: &Fields) -> TokenStream2 {
    let field_mins: Vec<_> = match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .filter(|f| !has_skip_attr(f))
            .map(|f| {
                let ty = &f.ty;
                quote! { <#ty as bytespan::Decode>::MIN_SIZE }
            })
            .collect(),
        Fields::Unnamed(unnamed) => unnamed
            .unnamed
            .iter()
            .filter(|f| !has_skip_attr(f))
            .map(|f| {
                let ty = &f.ty;
                quote! { <#ty as bytespan::Decode>::MIN_SIZE }
            })
            .collect(),
        Fields::Unit => Vec::new(),
    };

    if field_mins.is_empty() {
        quote! { 0 }
    } else {
        quote! { 0 #(+ #field_mins)* }
    }
}
