//! The codec traits: size calculation, encoding and decoding.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::cursor::{ReadCursor, WriteCursor};
use crate::error::Result;

/// Serialize a value into the wire format.
///
/// `wire_size` and `encode` must visit the same fields in the same order:
/// for every legal value, `wire_size` equals the number of bytes `encode`
/// consumes from the cursor. Callers rely on this to allocate destination
/// buffers exactly.
///
/// # Example
///
/// ```
/// use bytespan::{Encode, WriteCursor};
///
/// let value: u32 = 42;
/// let mut buf = [0u8; 4];
/// let mut cursor = WriteCursor::new(&mut buf);
/// value.encode(&mut cursor).unwrap();
/// assert_eq!(cursor.remaining(), 0);
/// assert_eq!(buf, [42, 0, 0, 0]);
/// ```
pub trait Encode {
    /// Exact number of bytes `encode` will write for this value.
    ///
    /// Pure: touches no buffer and has no side effects.
    fn wire_size(&self) -> usize;

    /// Write the wire representation into `cursor`, advancing it by
    /// exactly [`wire_size`](Encode::wire_size) bytes.
    fn encode(&self, cursor: &mut WriteCursor<'_>) -> Result<()>;

    /// Wire size of a run of elements, excluding any count prefix.
    #[inline]
    fn slice_size(items: &[Self]) -> usize
    where
        Self: Sized,
    {
        items.iter().map(Self::wire_size).sum()
    }

    /// Encode a run of elements back-to-back, no prefix.
    ///
    /// The default walks element by element; `u8` overrides this with a
    /// bulk copy that produces byte-identical output.
    #[inline]
    fn encode_slice(items: &[Self], cursor: &mut WriteCursor<'_>) -> Result<()>
    where
        Self: Sized,
    {
        for item in items {
            item.encode(cursor)?;
        }
        Ok(())
    }
}

/// Deserialize a value from the wire format.
pub trait Decode: Sized {
    /// Lower bound on the encoded size of any value of this type.
    ///
    /// Used to reject a corrupt or hostile count prefix before any
    /// storage for the elements is allocated.
    const MIN_SIZE: usize;

    /// Read one value out of `cursor`, advancing it by exactly the bytes
    /// the value occupied on the wire.
    fn decode(cursor: &mut ReadCursor<'_>) -> Result<Self>;

    /// Decode into every slot of a pre-filled slice, element by element.
    ///
    /// `u8` overrides this with a bulk copy.
    #[inline]
    fn decode_fill(items: &mut [Self], cursor: &mut ReadCursor<'_>) -> Result<()> {
        for slot in items {
            *slot = Self::decode(cursor)?;
        }
        Ok(())
    }

    /// Decode `count` elements onto the end of `vec`.
    ///
    /// `u8` overrides this with a bulk copy.
    #[cfg(feature = "alloc")]
    #[inline]
    fn decode_extend(vec: &mut Vec<Self>, count: usize, cursor: &mut ReadCursor<'_>) -> Result<()> {
        for _ in 0..count {
            vec.push(Self::decode(cursor)?);
        }
        Ok(())
    }
}

/// Allocating conveniences for [`Encode`].
#[cfg(feature = "alloc")]
pub trait EncodeExt: Encode {
    /// Encode into a freshly allocated `Vec` of exactly
    /// [`wire_size`](Encode::wire_size) bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use bytespan::EncodeExt;
    ///
    /// let bytes = 0x1234u16.to_wire_vec().unwrap();
    /// assert_eq!(bytes, [0x34, 0x12]);
    /// ```
    fn to_wire_vec(&self) -> Result<Vec<u8>> {
        let mut buf = alloc::vec![0u8; self.wire_size()];
        let mut cursor = WriteCursor::new(&mut buf);
        self.encode(&mut cursor)?;
        Ok(buf)
    }
}

#[cfg(feature = "alloc")]
impl<T: Encode + ?Sized> EncodeExt for T {}

/// Slice-level conveniences for [`Decode`].
pub trait DecodeExt: Decode {
    /// Decode from the front of `buf`, returning the value and the number
    /// of bytes consumed.
    fn from_slice(buf: &[u8]) -> Result<(Self, usize)> {
        let mut cursor = ReadCursor::new(buf);
        let value = Self::decode(&mut cursor)?;
        Ok((value, buf.len() - cursor.remaining()))
    }
}

impl<T: Decode> DecodeExt for T {}
