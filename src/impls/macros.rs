use crate::cursor::{ReadCursor, WriteCursor};
use crate::endian;
use crate::error::Result;
use crate::traits::{Decode, Encode};

// Macro for the multi-byte leaf numerics. Values are normalized to wire
// order, then written with their native byte layout.
macro_rules! impl_wire_for_numeric {
    ($($ty:ty),+) => {
        $(
            impl Encode for $ty {
                #[inline]
                fn wire_size(&self) -> usize {
                    core::mem::size_of::<$ty>()
                }

                #[inline]
                fn encode(&self, cursor: &mut WriteCursor<'_>) -> Result<()> {
                    cursor.write_bytes(&endian::to_wire(*self).to_ne_bytes())
                }
            }

            impl Decode for $ty {
                const MIN_SIZE: usize = core::mem::size_of::<$ty>();

                #[inline]
                fn decode(cursor: &mut ReadCursor<'_>) -> Result<Self> {
                    let bytes = cursor.read_array::<{ core::mem::size_of::<$ty>() }>()?;
                    Ok(endian::from_wire(<$ty>::from_ne_bytes(bytes)))
                }
            }
        )+
    };
}

impl_wire_for_numeric!(u16, u32, u64, i16, i32, i64, f32, f64);
