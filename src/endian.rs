//! Host byte-order detection and normalization to the little-endian wire
//! order.
//!
//! The wire format is always little-endian. On little-endian hosts (the
//! common case) [`to_wire`] and [`from_wire`] compile to nothing; on
//! big-endian hosts they reverse the byte order of every multi-byte
//! numeric, length prefixes included.

/// True when the host already stores integers in wire order.
pub const HOST_IS_LITTLE_ENDIAN: bool = cfg!(target_endian = "little");

/// Byte-order reversal for the numeric widths the wire format supports
/// (1, 2, 4 and 8 bytes). Types of any other width have no impl, so an
/// unsupported width is rejected at compile time.
pub(crate) trait SwapBytes: Copy {
    fn swap_byte_order(self) -> Self;
}

macro_rules! impl_swap_for_int {
    ($($ty:ty),+) => {
        $(
            impl SwapBytes for $ty {
                #[inline]
                fn swap_byte_order(self) -> Self {
                    self.swap_bytes()
                }
            }
        )+
    };
}

impl_swap_for_int!(u16, u32, u64, i16, i32, i64);

// Width 1 is a no-op by definition.
impl SwapBytes for u8 {
    #[inline]
    fn swap_byte_order(self) -> Self {
        self
    }
}

impl SwapBytes for i8 {
    #[inline]
    fn swap_byte_order(self) -> Self {
        self
    }
}

// Floats swap through their bit representation.
impl SwapBytes for f32 {
    #[inline]
    fn swap_byte_order(self) -> Self {
        Self::from_bits(self.to_bits().swap_bytes())
    }
}

impl SwapBytes for f64 {
    #[inline]
    fn swap_byte_order(self) -> Self {
        Self::from_bits(self.to_bits().swap_bytes())
    }
}

/// Convert a host-order value to wire order.
#[inline]
pub(crate) fn to_wire<T: SwapBytes>(value: T) -> T {
    if HOST_IS_LITTLE_ENDIAN {
        value
    } else {
        value.swap_byte_order()
    }
}

/// Convert a wire-order value back to host order.
#[inline]
pub(crate) fn from_wire<T: SwapBytes>(value: T) -> T {
    // Byte reversal is its own inverse.
    to_wire(value)
}
