//! Derive macros for bytespan.
//!
//! Only structs are supported: the wire format is a closed set of value
//! categories (leaf numerics, text, fixed arrays, sequences, composites)
//! with no runtime type tags, so sum types have no encoding. Deriving on
//! an enum or union is a compile error.

mod decode;
mod encode;

pub use decode::derive_decode;
pub use encode::derive_encode;

/// Bound every type parameter by `bound`, so `Wrap<T>` derives an impl
/// that requires `T` to be encodable/decodable itself.
pub fn with_bound(generics: &syn::Generics, bound: syn::TypeParamBound) -> syn::Generics {
    let mut generics = generics.clone();
    for param in &mut generics.params {
        if let syn::GenericParam::Type(type_param) = param {
            type_param.bounds.push(bound.clone());
        }
    }
    generics
}

/// Check if a field has `#[bytespan(skip)]`.
pub fn has_skip_attr(field: &syn::Field) -> bool {
    field.attrs.iter().any(|attr| {
        if !attr.path().is_ident("bytespan") {
            return false;
        }
        let mut found = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                found = true;
            }
            Ok(())
        });
        found
    })
}
