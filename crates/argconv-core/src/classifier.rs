//! Path shape classifier
//!
//! Finds the path-looking substring inside one argument and decides its
//! [`PathShape`]. Arguments mix flags (`-I/usr/include`), key/value pairs
//! (`PATH=/a:/b`), quoted literals and bare paths with no declared
//! grammar, so the classifier skips likely punctuation (`-`, `=`, `,`,
//! quotes, list separators) and restarts from the next candidate start.
//!
//! Restarts are a loop over the mutable [`ScanCursor`]; each one strictly
//! advances the start, so the total work is linear in the input length.

use crate::scan::{contains_between, is_quote, ScanCursor};
use crate::types::PathShape;

/// Bytes a path may start with
#[inline]
const fn is_path_start(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'/' | b'\\' | b':' | b'-' | b'.')
}

/// Bytes that, after a `:`, make it a POSIX list separator
#[inline]
const fn is_posix_list_lead(b: u8) -> bool {
    matches!(b, b'/' | b':' | b'.')
}

/// Classify the path starting at the cursor.
///
/// On return the cursor sits on the first byte of the path (any skipped
/// flag or value prefix lies before it). `PathShape::None` means no path
/// starts before the bound.
pub fn classify(cursor: &mut ScanCursor<'_>) -> PathShape {
    let src = cursor.src();
    let end = cursor.end();

    'restart: loop {
        let mut it = cursor.pos();
        if it >= end {
            return PathShape::None;
        }

        while !is_path_start(cursor.byte(it)) {
            cursor.restart_at(it + 1);
            it = cursor.pos();
            if it >= end {
                return PathShape::None;
            }
        }

        let c0 = cursor.byte(it);
        let c1 = cursor.byte(it + 1);
        let c2 = cursor.byte(it + 2);

        // Drive letter
        if c0.is_ascii_alphabetic() && c1 == b':' {
            if c2 == b'\\' {
                return PathShape::SimpleWindowsPath;
            }
            if c2 == b'/' && !contains_between(src, it + 2, end, b':') {
                return PathShape::SimpleWindowsPath;
            }
            if c2 == b'/' && contains_between(src, it + 2, end, b';') {
                return PathShape::WindowsPathList;
            }
        }

        if c0 == b'.' && (c1 == b'.' || c1 == b'/') && !contains_between(src, it + 2, end, b':')
        {
            return PathShape::RelativePath;
        }

        if c0 == b'/' {
            return classify_rooted(cursor, it + 1);
        }

        let mut starts_with_minus = false;
        let mut starts_with_minus_alpha = false;
        if c0 == b'-' {
            starts_with_minus = true;
            it += 1;
            if cursor.byte(it).is_ascii_alphabetic() {
                it += 1;
                starts_with_minus_alpha = true;
                if contains_between(src, it, end, b';') {
                    return PathShape::WindowsPathList;
                }
            }
        }

        let mut it2 = it;
        while it2 < end {
            let ch = cursor.byte(it2);

            if starts_with_minus_alpha {
                if ch.is_ascii_alphabetic()
                    && cursor.byte(it2 + 1) == b':'
                    && cursor.byte(it2 + 2) == b'/'
                {
                    return PathShape::SimpleWindowsPath;
                }
                // `-I/usr/include`: the flag value is a fresh path
                if ch == b'/' && !contains_between(src, it2, end, b',') {
                    cursor.restart_at(it2);
                    continue 'restart;
                }
                starts_with_minus_alpha = false;
            }

            if is_quote(ch) {
                starts_with_minus = false;
            }

            if ch == b'=' || (ch == b':' && starts_with_minus) || is_quote(ch) {
                cursor.restart_at(it2 + 1);
                continue 'restart;
            }

            if ch == b',' && starts_with_minus {
                cursor.restart_at(it2 + 1);
                continue 'restart;
            }

            if ch == b':' && it2 + 1 != end {
                it2 += 1;
                let next = cursor.byte(it2);
                if is_posix_list_lead(next) {
                    if next == b'/' && cursor.byte(it2 + 1) == b'/' {
                        return PathShape::Url;
                    }
                    return PathShape::PosixPathList;
                } else if !contains_between(src, it2, end, b'=') {
                    return PathShape::SimpleWindowsPath;
                }
            }

            it2 += 1;
        }

        return PathShape::SimpleWindowsPath;
    }
}

/// Shapes of a path whose first byte is `/`; `it` is the byte after it
fn classify_rooted(cursor: &ScanCursor<'_>, mut it: usize) -> PathShape {
    let end = cursor.end();
    let c = cursor.byte(it);

    if c.is_ascii_alphabetic() && cursor.byte(it + 1) == b':' {
        return PathShape::EscapeWindowsPath;
    }

    if c == b'.' && cursor.byte(it + 1) == b'.' {
        return PathShape::SimpleWindowsPath;
    }

    if c == b'/' {
        it += 1;
        return match cursor.byte(it) {
            b':' => PathShape::Url,
            b'/' => PathShape::EscapedPath,
            _ if contains_between(cursor.src(), it, end, b'/') => PathShape::Unc,
            _ => PathShape::EscapedPath,
        };
    }

    while it < end {
        match cursor.byte(it) {
            b':' if is_posix_list_lead(cursor.byte(it + 1)) => return PathShape::PosixPathList,
            b':' | b';' => return PathShape::WindowsPathList,
            _ => {}
        }
        it += 1;
    }

    PathShape::RootedPath
}

/// Classify `src[start..end)` and return the shape with the path start.
pub fn classify_at(src: &[u8], start: usize, end: usize) -> (PathShape, usize) {
    let mut cursor = ScanCursor::bounded(src, start, end);
    let shape = classify(&mut cursor);
    (shape, cursor.pos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn shape_of(s: &str) -> (PathShape, usize) {
        classify_at(s.as_bytes(), 0, s.len())
    }

    #[test]
    fn test_drive_letter_paths() {
        assert_eq!(shape_of("C:\\foo\\bar"), (PathShape::SimpleWindowsPath, 0));
        assert_eq!(shape_of("C:/foo/bar"), (PathShape::SimpleWindowsPath, 0));
        assert_eq!(shape_of("C:/a;C:/b"), (PathShape::WindowsPathList, 0));
    }

    #[test]
    fn test_relative_paths() {
        assert_eq!(shape_of("./configure"), (PathShape::RelativePath, 0));
        assert_eq!(shape_of("../src/lib.rs"), (PathShape::RelativePath, 0));
        assert_eq!(shape_of(".."), (PathShape::RelativePath, 0));
    }

    #[test]
    fn test_leading_slash_shapes() {
        assert_eq!(shape_of("/C:\\foo").0, PathShape::EscapeWindowsPath);
        assert_eq!(shape_of("/..").0, PathShape::SimpleWindowsPath);
        assert_eq!(shape_of("//server/share").0, PathShape::Unc);
        assert_eq!(shape_of("//server").0, PathShape::EscapedPath);
        assert_eq!(shape_of("///x").0, PathShape::EscapedPath);
        assert_eq!(shape_of("//:x").0, PathShape::Url);
        assert_eq!(shape_of("/usr/bin").0, PathShape::RootedPath);
    }

    #[test]
    fn test_rooted_list_disambiguation() {
        assert_eq!(shape_of("/usr/bin:/bin").0, PathShape::PosixPathList);
        assert_eq!(shape_of("/ab::c").0, PathShape::PosixPathList);
        assert_eq!(shape_of("/ab:.").0, PathShape::PosixPathList);
        assert_eq!(shape_of("/foo:bar").0, PathShape::WindowsPathList);
        assert_eq!(shape_of("/foo;/bar").0, PathShape::WindowsPathList);
    }

    #[test]
    fn test_option_value_starts_after_flag() {
        assert_eq!(shape_of("-I/usr/include"), (PathShape::RootedPath, 2));
        assert_eq!(shape_of("-L/usr/lib:/lib"), (PathShape::PosixPathList, 2));
    }

    #[test]
    fn test_minus_alpha_drive_value() {
        assert_eq!(shape_of("-IC:/include").0, PathShape::SimpleWindowsPath);
    }

    #[test]
    fn test_minus_alpha_semicolon_list() {
        assert_eq!(shape_of("-Ia;b").0, PathShape::WindowsPathList);
    }

    #[test]
    fn test_key_value_restarts_after_equals() {
        assert_eq!(shape_of("PATH=/usr/bin:/bin"), (PathShape::PosixPathList, 5));
        assert_eq!(shape_of("--prefix=/usr/local"), (PathShape::RootedPath, 9));
        assert_eq!(shape_of("-DFOO=/usr/x"), (PathShape::RootedPath, 6));
    }

    #[test]
    fn test_quote_prefix_skipped() {
        let (shape, start) = shape_of("--prefix=\"/usr/local\"");
        assert_eq!(shape, PathShape::RootedPath);
        assert_eq!(start, 10);
    }

    #[test]
    fn test_comma_separated_flag_values() {
        assert_eq!(shape_of("-Wl,-rpath,/usr/lib"), (PathShape::RootedPath, 11));
    }

    #[test]
    fn test_colon_after_flag_restarts_past_it() {
        assert_eq!(shape_of("-x:/usr"), (PathShape::RootedPath, 3));
        assert_eq!(shape_of("--out:/tmp/a"), (PathShape::RootedPath, 6));
    }

    #[test]
    fn test_later_comma_keeps_flag_slash_in_value() {
        // `-I/a,b` is a comma list, not a path after `-I`
        assert_eq!(shape_of("-I/a,b"), (PathShape::SimpleWindowsPath, 5));
        assert_eq!(shape_of("-Ia/b,c"), (PathShape::SimpleWindowsPath, 6));
    }

    #[test]
    fn test_url_and_posix_list_after_word() {
        assert_eq!(shape_of("http://example.com/x").0, PathShape::Url);
        assert_eq!(shape_of("a:/usr/bin:/etc").0, PathShape::PosixPathList);
        assert_eq!(shape_of("x::y").0, PathShape::PosixPathList);
    }

    #[test]
    fn test_colon_without_list_lead_is_windows() {
        assert_eq!(shape_of("foo:bar").0, PathShape::SimpleWindowsPath);
    }

    #[test]
    fn test_plain_word_defaults_to_simple() {
        assert_eq!(shape_of("foo/bar").0, PathShape::SimpleWindowsPath);
        assert_eq!(shape_of("\\foo").0, PathShape::SimpleWindowsPath);
    }

    #[test]
    fn test_no_path_start() {
        assert_eq!(shape_of(""), (PathShape::None, 0));
        assert_eq!(shape_of("\"'").0, PathShape::None);
        assert_eq!(shape_of("a=").0, PathShape::None);
    }

    #[test]
    fn test_bound_limits_lookahead_search() {
        // The `:` after the bound does not count as a second colon
        let src = b"C:/x:/y";
        assert_matches!(classify_at(src, 0, 4), (PathShape::SimpleWindowsPath, 0));
        assert_matches!(classify_at(src, 0, src.len()), (PathShape::PosixPathList, 0));
    }

    #[test]
    fn test_restart_flag_reported() {
        let mut cursor = ScanCursor::new(b"-I/usr/include");
        classify(&mut cursor);
        assert!(cursor.restarted());

        let mut cursor = ScanCursor::new(b"/usr/include");
        classify(&mut cursor);
        assert!(!cursor.restarted());
    }

    #[test]
    fn test_classification_is_deterministic() {
        for input in ["-I/usr/include", "PATH=/a:/b", "//s/h\\x", "C:/x:/y"] {
            assert_eq!(shape_of(input), shape_of(input));
        }
    }
}
