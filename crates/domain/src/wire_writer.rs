//! Big-endian writer for DNS wire format.
//!
//! Every multi-byte field goes through [`WireWriter::put_u16`], which always
//! emits network byte order regardless of the host.

use bytes::{BufMut, Bytes, BytesMut};

/// Append-only buffer for assembling a DNS message.
#[derive(Debug, Default)]
pub struct WireWriter {
    buf: BytesMut,
}

impl WireWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn put_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    /// Writes `value` big-endian.
    #[inline]
    pub fn put_u16(&mut self, value: u16) {
        self.buf.put_u16(value);
    }

    #[inline]
    pub fn put_slice(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Freezes the buffer into an immutable byte sequence.
    pub fn finish(self) -> Bytes {
        self.buf.freeze()
    }
}
