//! Read cursor over one argument

use super::byte_at;

/// Byte-position cursor with an exclusive end bound.
///
/// The position never exceeds the bound. Lookahead through [`Self::byte`]
/// may read past the bound (the rest of the argument is still visible) and
/// past the input, where it yields `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanCursor<'a> {
    src: &'a [u8],
    pos: usize,
    end: usize,
    restarted: bool,
}

impl<'a> ScanCursor<'a> {
    /// Cursor over the whole input
    pub fn new(src: &'a [u8]) -> Self {
        Self::bounded(src, 0, src.len())
    }

    /// Cursor over `src[pos..end)`, with `end` clamped to the input
    pub fn bounded(src: &'a [u8], pos: usize, end: usize) -> Self {
        let end = end.min(src.len());
        Self {
            src,
            pos: pos.min(end),
            end,
            restarted: false,
        }
    }

    /// The full input
    #[inline]
    pub fn src(&self) -> &'a [u8] {
        self.src
    }

    /// Current position
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Exclusive end bound
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Byte at an absolute index, `0` outside the input
    #[inline]
    pub fn byte(&self, index: usize) -> u8 {
        byte_at(self.src, index)
    }

    /// Move the start to `pos` (clamped) and mark the scan as restarted
    #[inline]
    pub fn restart_at(&mut self, pos: usize) {
        self.pos = pos.min(self.end);
        self.restarted = true;
    }

    /// True once the classifier skipped a prefix or restarted
    #[inline]
    pub fn restarted(&self) -> bool {
        self.restarted
    }
}
