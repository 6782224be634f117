//! Error types for the wire codec.

use core::fmt;

/// Error during encoding or decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    /// An operation would read or write past the cursor's remaining length.
    Overflow {
        /// Bytes needed.
        needed: usize,
        /// Bytes available.
        available: usize,
    },

    /// A fixed array's on-wire count does not match the declared length.
    SizeMismatch {
        /// Statically declared element count.
        expected: usize,
        /// Count found on the wire.
        found: usize,
    },

    /// A value exceeds the maximum its length prefix can represent.
    SizeExceeded {
        /// Actual length of the value.
        len: usize,
        /// Maximum representable length.
        max: usize,
    },

    /// Decoded bytes violate the target type's invariants.
    InvalidData {
        /// Error description.
        message: &'static str,
    },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow { needed, available } => {
                write!(
                    f,
                    "buffer overflow: needed {needed} bytes, only {available} remaining"
                )
            }
            Self::SizeMismatch { expected, found } => {
                write!(
                    f,
                    "fixed array count mismatch: expected {expected} elements, wire says {found}"
                )
            }
            Self::SizeExceeded { len, max } => {
                write!(
                    f,
                    "length {len} exceeds the {max} bytes the length prefix can represent"
                )
            }
            Self::InvalidData { message } => write!(f, "invalid data: {message}"),
        }
    }
}

// Rust 1.81+
impl core::error::Error for WireError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, WireError>;
