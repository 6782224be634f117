//! Bounded cursors over caller-owned byte buffers.
//!
//! A cursor is a forward-only view of a slice plus its remaining length.
//! Every primitive checks the remaining length before touching memory and
//! shrinks the view by exactly the bytes consumed. Cursors never grow or
//! reallocate the underlying buffer.

use crate::error::{Result, WireError};

/// Read-only cursor over encoded bytes.
///
/// # Example
///
/// ```
/// use bytespan::ReadCursor;
///
/// let mut cursor = ReadCursor::new(&[1, 2, 3, 4]);
/// let head = cursor.read_bytes(3).unwrap();
/// assert_eq!(head, &[1, 2, 3]);
/// assert_eq!(cursor.remaining(), 1);
/// assert!(cursor.read_bytes(2).is_err());
/// ```
#[derive(Debug)]
pub struct ReadCursor<'a> {
    buf: &'a [u8],
}

impl<'a> ReadCursor<'a> {
    /// Create a cursor over the whole slice.
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Bytes left to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    /// True when every byte has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume and return the next `n` bytes.
    ///
    /// The returned slice borrows from the original buffer, so bulk copies
    /// out of it are zero-cost views.
    #[inline]
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.buf.len() {
            return Err(WireError::Overflow {
                needed: n,
                available: self.buf.len(),
            });
        }
        let (head, tail) = self.buf.split_at(n);
        self.buf = tail;
        Ok(head)
    }

    /// Consume exactly `N` bytes into a fixed array.
    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.read_bytes(N)?;
        // read_bytes returned exactly N bytes, so try_into cannot fail.
        let Ok(array) = bytes.try_into() else {
            unreachable!()
        };
        Ok(array)
    }
}

/// Write cursor over a caller-allocated destination buffer.
///
/// The destination must be sized up front (see [`Encode::wire_size`]); any
/// write that would not fit fails with [`WireError::Overflow`] instead of
/// growing the buffer.
///
/// [`Encode::wire_size`]: crate::Encode::wire_size
///
/// # Example
///
/// ```
/// use bytespan::WriteCursor;
///
/// let mut buf = [0u8; 4];
/// let mut cursor = WriteCursor::new(&mut buf);
/// cursor.write_bytes(&[0xAB, 0xCD]).unwrap();
/// assert_eq!(cursor.remaining(), 2);
/// assert!(cursor.write_bytes(&[0, 0, 0]).is_err());
/// ```
#[derive(Debug)]
pub struct WriteCursor<'a> {
    buf: &'a mut [u8],
}

impl<'a> WriteCursor<'a> {
    /// Create a cursor over the whole slice.
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf }
    }

    /// Bytes left to write.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    /// True when the destination is full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.buf.is_empty()
    }

    /// Copy `src` into the buffer and advance past it.
    #[inline]
    pub fn write_bytes(&mut self, src: &[u8]) -> Result<()> {
        if src.len() > self.buf.len() {
            return Err(WireError::Overflow {
                needed: src.len(),
                available: self.buf.len(),
            });
        }
        // Re-borrow trick: take the slice out so the shrunk tail can be
        // stored back with the original lifetime.
        let buf = core::mem::take(&mut self.buf);
        let (head, tail) = buf.split_at_mut(src.len());
        head.copy_from_slice(src);
        self.buf = tail;
        Ok(())
    }
}
