mod macros;

#[cfg(feature = "alloc")]
pub mod alloc;

#[cfg(feature = "alloc")]
use ::alloc::vec::Vec;

use crate::cursor::{ReadCursor, WriteCursor};
use crate::error::{Result, WireError};
use crate::traits::{Decode, Encode};

/// Every fixed array and dynamic sequence is prefixed by its element count
/// as an unsigned 32-bit integer.
pub(crate) const COUNT_PREFIX_SIZE: usize = core::mem::size_of::<u32>();

/// Largest element count the prefix can represent.
pub(crate) const COUNT_MAX: usize = u32::MAX as usize;

// u8 (special case - no endianness, and the bulk-copy element type)
impl Encode for u8 {
    #[inline]
    fn wire_size(&self) -> usize {
        1
    }

    #[inline]
    fn encode(&self, cursor: &mut WriteCursor<'_>) -> Result<()> {
        cursor.write_bytes(&[*self])
    }

    #[inline]
    fn slice_size(items: &[Self]) -> usize {
        items.len()
    }

    #[inline]
    fn encode_slice(items: &[Self], cursor: &mut WriteCursor<'_>) -> Result<()> {
        cursor.write_bytes(items)
    }
}

impl Decode for u8 {
    const MIN_SIZE: usize = 1;

    #[inline]
    fn decode(cursor: &mut ReadCursor<'_>) -> Result<Self> {
        Ok(cursor.read_array::<1>()?[0])
    }

    #[inline]
    fn decode_fill(items: &mut [Self], cursor: &mut ReadCursor<'_>) -> Result<()> {
        items.copy_from_slice(cursor.read_bytes(items.len())?);
        Ok(())
    }

    #[cfg(feature = "alloc")]
    #[inline]
    fn decode_extend(vec: &mut Vec<Self>, count: usize, cursor: &mut ReadCursor<'_>) -> Result<()> {
        vec.extend_from_slice(cursor.read_bytes(count)?);
        Ok(())
    }
}

// i8 (special case - no endianness)
impl Encode for i8 {
    #[inline]
    fn wire_size(&self) -> usize {
        1
    }

    #[inline]
    fn encode(&self, cursor: &mut WriteCursor<'_>) -> Result<()> {
        cursor.write_bytes(&[*self as u8])
    }
}

impl Decode for i8 {
    const MIN_SIZE: usize = 1;

    #[inline]
    fn decode(cursor: &mut ReadCursor<'_>) -> Result<Self> {
        Ok(cursor.read_array::<1>()?[0] as i8)
    }
}

// bool - one byte on the wire, 0 or 1
impl Encode for bool {
    #[inline]
    fn wire_size(&self) -> usize {
        1
    }

    #[inline]
    fn encode(&self, cursor: &mut WriteCursor<'_>) -> Result<()> {
        cursor.write_bytes(&[*self as u8])
    }
}

impl Decode for bool {
    const MIN_SIZE: usize = 1;

    #[inline]
    fn decode(cursor: &mut ReadCursor<'_>) -> Result<Self> {
        match cursor.read_array::<1>()?[0] {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(WireError::InvalidData {
                message: "bool must be 0 or 1",
            }),
        }
    }
}

// usize/isize - encoded as u64/i64 so the wire format is portable across
// pointer widths
impl Encode for usize {
    #[inline]
    fn wire_size(&self) -> usize {
        core::mem::size_of::<u64>()
    }

    #[inline]
    fn encode(&self, cursor: &mut WriteCursor<'_>) -> Result<()> {
        (*self as u64).encode(cursor)
    }
}

impl Decode for usize {
    const MIN_SIZE: usize = core::mem::size_of::<u64>();

    #[inline]
    fn decode(cursor: &mut ReadCursor<'_>) -> Result<Self> {
        Ok(u64::decode(cursor)? as usize)
    }
}

impl Encode for isize {
    #[inline]
    fn wire_size(&self) -> usize {
        core::mem::size_of::<i64>()
    }

    #[inline]
    fn encode(&self, cursor: &mut WriteCursor<'_>) -> Result<()> {
        (*self as i64).encode(cursor)
    }
}

impl Decode for isize {
    const MIN_SIZE: usize = core::mem::size_of::<i64>();

    #[inline]
    fn decode(cursor: &mut ReadCursor<'_>) -> Result<Self> {
        Ok(i64::decode(cursor)? as isize)
    }
}

// Fixed arrays: [count: u32][elements]. The count is redundant for a fixed
// array but is part of the wire contract; decode rejects any mismatch
// instead of truncating or padding.
impl<T: Encode, const N: usize> Encode for [T; N] {
    fn wire_size(&self) -> usize {
        COUNT_PREFIX_SIZE + T::slice_size(self)
    }

    fn encode(&self, cursor: &mut WriteCursor<'_>) -> Result<()> {
        if N > COUNT_MAX {
            return Err(WireError::SizeExceeded {
                len: N,
                max: COUNT_MAX,
            });
        }
        (N as u32).encode(cursor)?;
        T::encode_slice(self, cursor)
    }
}

impl<T: Decode + Default, const N: usize> Decode for [T; N] {
    const MIN_SIZE: usize = COUNT_PREFIX_SIZE + N * T::MIN_SIZE;

    fn decode(cursor: &mut ReadCursor<'_>) -> Result<Self> {
        let count = u32::decode(cursor)? as usize;
        if count != N {
            return Err(WireError::SizeMismatch {
                expected: N,
                found: count,
            });
        }
        let mut items: [T; N] = core::array::from_fn(|_| T::default());
        T::decode_fill(&mut items, cursor)?;
        Ok(items)
    }
}
