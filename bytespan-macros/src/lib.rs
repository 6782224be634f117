//! Derive macros for bytespan.

use proc_macro::TokenStream;
mod codec;

/// Derive `Encode`.
///
/// The struct's declared field order becomes its wire layout: `wire_size`
/// and `encode` visit every field in that order. Fields marked
/// `#[bytespan(skip)]` are left off the wire.
#[proc_macro_derive(Encode, attributes(bytespan))]
pub fn derive_encode(input: TokenStream) -> TokenStream {
    codec::derive_encode(input)
}

/// Derive `Decode`.
///
/// Fields are decoded in declared order; `#[bytespan(skip)]` fields are
/// default-initialized instead of read from the wire.
#[proc_macro_derive(Decode, attributes(bytespan))]
pub fn derive_decode(input: TokenStream) -> TokenStream {
    codec::derive_decode(input)
}
