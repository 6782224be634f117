use alloc::{string::String, vec::Vec};

use crate::cursor::{ReadCursor, WriteCursor};
use crate::error::{Result, WireError};
use crate::impls::{COUNT_MAX, COUNT_PREFIX_SIZE};
use crate::traits::{Decode, Encode};

/// Text carries a narrower, unsigned 16-bit length prefix.
pub(crate) const TEXT_PREFIX_SIZE: usize = core::mem::size_of::<u16>();

/// Longest text the prefix can represent, in bytes.
pub(crate) const TEXT_LEN_MAX: usize = u16::MAX as usize;

impl<T: Encode> Encode for Vec<T> {
    fn wire_size(&self) -> usize {
        COUNT_PREFIX_SIZE + T::slice_size(self)
    }

    fn encode(&self, cursor: &mut WriteCursor<'_>) -> Result<()> {
        let count = self.len();
        if count > COUNT_MAX {
            return Err(WireError::SizeExceeded {
                len: count,
                max: COUNT_MAX,
            });
        }
        (count as u32).encode(cursor)?;
        T::encode_slice(self, cursor)
    }
}

impl<T: Decode> Decode for Vec<T> {
    const MIN_SIZE: usize = COUNT_PREFIX_SIZE;

    fn decode(cursor: &mut ReadCursor<'_>) -> Result<Self> {
        let count = u32::decode(cursor)? as usize;

        // A hostile count prefix must not drive the allocation below:
        // count elements occupy at least count * MIN_SIZE bytes, which has
        // to fit in what is left of the buffer.
        let floor = count.checked_mul(T::MIN_SIZE).unwrap_or(usize::MAX);
        if floor > cursor.remaining() {
            return Err(WireError::Overflow {
                needed: floor,
                available: cursor.remaining(),
            });
        }

        // Elements that occupy zero wire bytes (a composite whose fields
        // are all skipped) make the floor vacuous, so the count cannot be
        // trusted for the reservation; grow as elements arrive instead.
        let capacity = if T::MIN_SIZE == 0 { 0 } else { count };
        let mut vec = Vec::with_capacity(capacity);
        T::decode_extend(&mut vec, count, cursor)?;
        Ok(vec)
    }
}

impl Encode for String {
    fn wire_size(&self) -> usize {
        TEXT_PREFIX_SIZE + self.len()
    }

    fn encode(&self, cursor: &mut WriteCursor<'_>) -> Result<()> {
        let len = self.len();
        if len > TEXT_LEN_MAX {
            return Err(WireError::SizeExceeded {
                len,
                max: TEXT_LEN_MAX,
            });
        }
        (len as u16).encode(cursor)?;
        cursor.write_bytes(self.as_bytes())
    }
}

impl Decode for String {
    const MIN_SIZE: usize = TEXT_PREFIX_SIZE;

    fn decode(cursor: &mut ReadCursor<'_>) -> Result<Self> {
        let len = u16::decode(cursor)? as usize;
        let bytes = cursor.read_bytes(len)?;
        let s = core::str::from_utf8(bytes).map_err(|_| WireError::InvalidData {
            message: "text is not valid UTF-8",
        })?;
        Ok(s.into())
    }
}
