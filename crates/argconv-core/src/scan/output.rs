//! Bounded output buffer
//!
//! Every byte the converter emits goes through [`OutputCursor`], so the
//! capacity guarantee lives here and nowhere else.

/// Write cursor over a fixed-capacity buffer.
///
/// One byte of the buffer is reserved for the terminator: a buffer of
/// capacity `N` holds at most `N - 1` data bytes. Writes at the limit are
/// silently dropped.
#[derive(Debug)]
pub struct OutputCursor<'b> {
    buf: &'b mut [u8],
    pos: usize,
    limit: usize,
}

impl<'b> OutputCursor<'b> {
    /// Wrap `buf`; its whole length is the capacity
    pub fn new(buf: &'b mut [u8]) -> Self {
        let limit = buf.len().saturating_sub(1);
        Self { buf, pos: 0, limit }
    }

    /// Number of data bytes written so far
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// True when no further data byte fits
    #[inline]
    pub fn is_full(&self) -> bool {
        self.pos >= self.limit
    }

    /// Data written so far
    #[inline]
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Append one byte; returns false if it was dropped
    #[inline]
    pub fn push(&mut self, b: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.buf[self.pos] = b;
        self.pos += 1;
        true
    }

    /// Append as much of `bytes` as fits
    pub fn copy(&mut self, bytes: &[u8]) {
        let n = bytes.len().min(self.limit - self.pos.min(self.limit));
        self.buf[self.pos..self.pos + n].copy_from_slice(&bytes[..n]);
        self.pos += n;
    }

    /// Append as much of `bytes` as fits, replacing `from` with `to`
    pub fn copy_replacing(&mut self, bytes: &[u8], from: u8, to: u8) {
        for &b in bytes {
            if !self.push(if b == from { to } else { b }) {
                break;
            }
        }
    }

    /// Replace `from` with `to` in everything written since `start`
    pub fn replace_since(&mut self, start: usize, from: u8, to: u8) {
        let start = start.min(self.pos);
        for b in &mut self.buf[start..self.pos] {
            if *b == from {
                *b = to;
            }
        }
    }

    /// Write the terminator and return the data length.
    ///
    /// A zero-capacity buffer is left untouched.
    pub fn terminate(self) -> usize {
        if let Some(slot) = self.buf.get_mut(self.pos) {
            *slot = 0;
        }
        self.pos
    }
}
