//! Byte-level scanning primitives shared by the classifier and converters

pub mod cursor;
pub mod output;
pub mod quote;

pub use cursor::ScanCursor;
pub use output::OutputCursor;
pub use quote::QuoteState;

/// C `isspace` over a single byte (includes vertical tab, unlike
/// [`u8::is_ascii_whitespace`])
#[inline]
pub const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Quote characters tracked by [`QuoteState`]
#[inline]
pub const fn is_quote(b: u8) -> bool {
    matches!(b, b'\'' | b'"')
}

/// Returns the byte at `index`, or the `0` sentinel outside `src`
#[inline]
pub fn byte_at(src: &[u8], index: usize) -> u8 {
    src.get(index).copied().unwrap_or(0)
}

/// Search `needle` in `src[from..to)`, clamped to `src`
///
/// An inverted or out-of-range window is empty.
#[inline]
pub fn contains_between(src: &[u8], from: usize, to: usize, needle: u8) -> bool {
    let to = to.min(src.len());
    from < to && memchr::memchr(needle, &src[from..to]).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_space_matches_c_locale() {
        for b in [b' ', b'\t', b'\n', 0x0b, 0x0c, b'\r'] {
            assert!(is_space(b));
        }
        assert!(!is_space(b'a'));
        assert!(!is_space(0));
    }

    #[test]
    fn test_byte_at_sentinel() {
        assert_eq!(byte_at(b"ab", 1), b'b');
        assert_eq!(byte_at(b"ab", 2), 0);
    }

    #[test]
    fn test_contains_between_clamps() {
        assert!(contains_between(b"a:b", 0, 3, b':'));
        assert!(!contains_between(b"a:b", 2, 3, b':'));
        assert!(!contains_between(b"a:b", 3, 1, b':'));
        assert!(contains_between(b"a:b", 0, 100, b'b'));
    }
}
