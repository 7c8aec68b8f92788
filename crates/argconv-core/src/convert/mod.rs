//! Argument conversion: segment driver, per-shape converters and the
//! POSIX path list converter

pub mod driver;
pub mod posix_list;
pub mod shapes;

pub use driver::ArgConverter;

/// Subslice `src[from..to)`, clamped to the input and never inverted
#[inline]
pub(crate) fn run_bytes(src: &[u8], from: usize, to: usize) -> &[u8] {
    let to = to.min(src.len());
    &src[from.min(to)..to]
}

/// True when the argument has a `/` or `\` before its first whitespace
pub fn needs_conversion(src: &[u8]) -> bool {
    for &b in src {
        if b == b'\\' || b == b'/' {
            return true;
        }
        if crate::scan::is_space(b) {
            return false;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_conversion() {
        assert!(needs_conversion(b"/usr/bin"));
        assert!(needs_conversion(b"-I/usr"));
        assert!(needs_conversion(b"a\\b c"));
        assert!(!needs_conversion(b"hello"));
        assert!(!needs_conversion(b"foo /usr/bin"));
        assert!(!needs_conversion(b""));
    }

    #[test]
    fn test_run_bytes_clamps() {
        assert_eq!(run_bytes(b"abcd", 1, 3), b"bc");
        assert_eq!(run_bytes(b"abcd", 3, 1), b"");
        assert_eq!(run_bytes(b"abcd", 2, 99), b"cd");
    }
}
