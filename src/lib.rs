//! Compact, deterministic, little-endian binary codec over caller-owned
//! buffers.
//!
//! Values are walked field by field to produce a versionless byte layout:
//! leaf numerics are written raw in little-endian order, text carries a
//! `u16` length prefix, fixed arrays and `Vec`s carry a `u32` count prefix,
//! and composite types are the plain concatenation of their fields in
//! declared order. There is no schema file, magic number or type tag; a
//! buffer is only meaningful to a reader using the same types, in the same
//! field order, that produced it.
//!
//! The caller sizes the destination exactly with [`Encode::wire_size`]; the
//! engine never grows a buffer, and every read or write is bounds-checked
//! against the cursor's remaining length.
//!
//! # Example
//!
//! ```
//! use bytespan::{Decode, Encode, ReadCursor, WriteCursor};
//!
//! let name = String::from("pepito");
//! let pixels: Vec<u8> = vec![0; 64];
//!
//! let mut buf = vec![0u8; name.wire_size() + pixels.wire_size()];
//! let mut cursor = WriteCursor::new(&mut buf);
//! name.encode(&mut cursor).unwrap();
//! pixels.encode(&mut cursor).unwrap();
//! assert_eq!(cursor.remaining(), 0);
//!
//! let mut cursor = ReadCursor::new(&buf);
//! assert_eq!(String::decode(&mut cursor).unwrap(), name);
//! assert_eq!(Vec::<u8>::decode(&mut cursor).unwrap(), pixels);
//! ```
//!
//! With the `derive` feature, a struct declares its field order once and
//! reuses it for size, encode and decode:
//!
//! ```ignore
//! use bytespan::{Decode, Encode};
//!
//! #[derive(Encode, Decode, Debug, PartialEq)]
//! struct Image {
//!     width: i32,
//!     height: i32,
//!     name: String,
//!     pixels: Vec<u8>,
//! }
//! ```

#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod cursor;
pub mod endian;
mod error;
mod impls;
mod traits;

pub use cursor::{ReadCursor, WriteCursor};
pub use error::{Result, WireError};
pub use traits::{Decode, DecodeExt, Encode};

#[cfg(feature = "alloc")]
pub use traits::EncodeExt;

#[cfg(feature = "derive")]
pub use bytespan_macros::{Decode, Encode};

#[cfg(test)]
mod tests;

/// Exact number of bytes `value` occupies on the wire.
#[inline]
pub fn wire_size<T: Encode + ?Sized>(value: &T) -> usize {
    value.wire_size()
}

/// Encode `value` into the front of `buf`, returning the bytes written.
///
/// Fails with [`WireError::Overflow`] if `buf` is smaller than
/// [`wire_size(value)`](wire_size); nothing is ever truncated.
#[inline]
pub fn encode<T: Encode + ?Sized>(value: &T, buf: &mut [u8]) -> Result<usize> {
    let total = buf.len();
    let mut cursor = WriteCursor::new(buf);
    value.encode(&mut cursor)?;
    Ok(total - cursor.remaining())
}

/// Decode a `T` from the front of `buf`, returning the value and the bytes
/// consumed.
#[inline]
pub fn decode<T: Decode>(buf: &[u8]) -> Result<(T, usize)> {
    DecodeExt::from_slice(buf)
}
