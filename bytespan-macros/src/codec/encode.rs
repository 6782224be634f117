//! Encode derive macro implementation.

use super::has_skip_attr;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derive the `Encode` trait for a struct.
pub fn derive_encode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let generics = super::with_bound(&input.generics, syn::parse_quote!(bytespan::Encode));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let (size_body, encode_body) = match &input.data {
        Data::Struct(data) => (
            generate_wire_size(&data.fields),
            generate_encode(&data.fields),
        ),
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Encode derive supports only structs: the wire format carries \
                 no type tags, so enums have no encoding.",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Encode derive is not supported for unions.",
            ));
        }
    };

    Ok(quote! {
        impl #impl_generics bytespan::Encode for #name #ty_generics #where_clause {
            fn wire_size(&self) -> usize {
                #size_body
            }

            fn encode(
                &self,
                cursor: &mut bytespan::WriteCursor<'_>,
            ) -> Result<(), bytespan::WireError> {
                #encode_body
                Ok(())
            }
        }
    })
}

/// Accessor expressions for every non-skipped field, in declared order.
fn field_accessors(fields: &Fields) -> Vec<TokenStream2> {
    match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .filter(|f| !has_skip_attr(f))
            .map(|f| {
                let name = &f.ident;
                quote! { self.#name }
            })
            .collect(),
        Fields::Unnamed(unnamed) => unnamed
            .unnamed
            .iter()
            .enumerate()
            .filter(|(_, f)| !has_skip_attr(f))
            .map(|(i, _)| {
                let index = syn::Index::from(i);
                quote! { self.#index }
            })
            .collect(),
        Fields::Unit => Vec::new(),
    }
}

fn generate_wire_size(fields: &Fields) -> TokenStream2 {
    let field_sizes: Vec<_> = field_accessors(fields)
        .into_iter()
        .map(|accessor| quote! { bytespan::Encode::wire_size(&#accessor) })
        .collect();

    if field_sizes.is_empty() {
        quote! { 0 }
    } else {
        quote! { 0 #(+ #field_sizes)* }
    }
}

fn generate_encode(fields: &Fields) -> TokenStream2 {
    let field_writes: Vec<_> = field_accessors(fields)
        .into_iter()
        .map(|accessor| {
            quote! {
                bytespan::Encode::encode(&#accessor, cursor)?;
            }
        })
        .collect();

    quote! { #(#field_writes)* }
}
