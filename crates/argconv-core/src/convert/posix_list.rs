//! POSIX path list converter
//!
//! `/usr/bin:/bin` becomes `C:\msys64\usr\bin;C:\msys64\bin`: the run is
//! split on `:`, each element is classified and converted on its own, and
//! the native list separator goes between elements.
//!
//! A colon right after a single uppercase letter and before `/` or `\` is
//! a drive designator (`C:/x:/y` keeps `C:/x` whole). Lowercase letters are
//! not drives here: in `a:/usr/bin` the `a` is a one-letter element, so
//! `c:/x:/y` splits into `c`, `/x` and `/y`.

use super::{run_bytes, shapes, ArgConverter};
use crate::classifier::classify;
use crate::scan::{byte_at, OutputCursor, ScanCursor};
use crate::traits::{DiagnosticSink, PathResolver};
use crate::types::{Diagnostic, DiagnosticCategory, DiagnosticSeverity, PathShape};

/// True when the `:` at `colon` ends a URL scheme (`git+ssh://`)
fn is_scheme_separator(src: &[u8], beg: usize, colon: usize) -> bool {
    byte_at(src, colon + 1) == b'/'
        && byte_at(src, colon + 2) == b'/'
        && byte_at(src, beg).is_ascii_alphabetic()
        && run_bytes(src, beg, colon)
            .iter()
            .all(|&b| b.is_ascii_alphanumeric() || b == b'+')
}

/// True when the `:` at `colon` belongs to a drive designator (`C:/x`)
fn is_drive_designator(src: &[u8], beg: usize, colon: usize) -> bool {
    colon == beg + 1
        && byte_at(src, beg).is_ascii_uppercase()
        && matches!(byte_at(src, colon + 1), b'/' | b'\\')
}

/// Convert the list run `src[from..to)`.
///
/// Runs of `:` collapse into one separator. When the output fills up
/// mid-list a [`DiagnosticCategory::PathCutOff`] diagnostic is reported and
/// the remaining elements are dropped; bytes already written stay.
pub(crate) fn convert_posix_list<R: PathResolver, S: DiagnosticSink>(
    conv: &ArgConverter<'_, R, S>,
    src: &[u8],
    from: usize,
    to: usize,
    out: &mut OutputCursor<'_>,
) {
    let to = to.min(src.len());
    let list_start = out.pos();
    let mut it = from;
    let mut beg = from;
    let mut prev_was_separator = false;
    let mut is_url = false;

    while it < to && !out.is_full() {
        if src[it] == b':' {
            if prev_was_separator {
                it += 1;
                continue;
            }
            if is_scheme_separator(src, beg, it) {
                is_url = true;
                it += 1;
                continue;
            }
            if is_drive_designator(src, beg, it) {
                it += 1;
                continue;
            }

            prev_was_separator = true;
            convert_element(conv, src, beg, it, is_url, out);
            is_url = false;

            if out.is_full() {
                conv.sink.report(Diagnostic {
                    severity: DiagnosticSeverity::Warning,
                    category: DiagnosticCategory::PathCutOff,
                    message: format!(
                        "Path cut off during conversion: {}",
                        String::from_utf8_lossy(&out.written()[list_start..])
                    ),
                });
                break;
            }

            out.push(conv.options.list_separator);
        } else if prev_was_separator {
            prev_was_separator = false;
            beg = it;
        }
        it += 1;
    }

    if !prev_was_separator {
        convert_element(conv, src, beg, it, is_url, out);
    }
}

/// Classify and convert one list element `src[beg..end)`.
///
/// Everything written for a non-URL element has `/` swapped for the
/// native separator.
fn convert_element<R: PathResolver, S: DiagnosticSink>(
    conv: &ArgConverter<'_, R, S>,
    src: &[u8],
    beg: usize,
    end: usize,
    is_url: bool,
    out: &mut OutputCursor<'_>,
) {
    let mut cursor = ScanCursor::bounded(src, beg, end);
    let shape = if is_url {
        PathShape::Url
    } else {
        classify(&mut cursor)
    };
    let from = cursor.pos();
    out.copy(run_bytes(src, beg, from));

    if shape == PathShape::None {
        return;
    }

    let start = out.pos();
    shapes::convert_run(conv, src, from, end, shape, out);
    if !is_url {
        out.replace_since(start, b'/', conv.options.native_separator);
    }
}
