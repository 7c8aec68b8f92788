//! Per-shape converters
//!
//! Each converter consumes the run `src[from..to)` and appends to the
//! output cursor.

use super::{posix_list, run_bytes, ArgConverter};
use crate::scan::{is_quote, OutputCursor};
use crate::traits::{DiagnosticSink, PathResolver};
use crate::types::PathShape;

/// Dispatch the run to the converter for `shape`
pub(crate) fn convert_run<R: PathResolver, S: DiagnosticSink>(
    conv: &ArgConverter<'_, R, S>,
    src: &[u8],
    from: usize,
    to: usize,
    shape: PathShape,
    out: &mut OutputCursor<'_>,
) {
    match shape {
        PathShape::None => {}
        PathShape::SimpleWindowsPath | PathShape::RelativePath | PathShape::WindowsPathList => {
            copy_verbatim(src, from, to, out)
        }
        PathShape::EscapeWindowsPath | PathShape::EscapedPath => {
            convert_escaped(src, from, to, out)
        }
        PathShape::Unc | PathShape::Url => convert_unc(src, from, to, out),
        PathShape::RootedPath => convert_rooted(conv, src, from, to, out),
        PathShape::PosixPathList => posix_list::convert_posix_list(conv, src, from, to, out),
    }
}

/// Copy the run as is
pub fn copy_verbatim(src: &[u8], from: usize, to: usize, out: &mut OutputCursor<'_>) {
    out.copy(run_bytes(src, from, to));
}

/// Copy the run with every `\` turned into `/`
pub fn convert_unc(src: &[u8], from: usize, to: usize, out: &mut OutputCursor<'_>) {
    out.copy_replacing(run_bytes(src, from, to), b'\\', b'/');
}

/// Drop the leading separator, then convert like a UNC path
pub fn convert_escaped(src: &[u8], from: usize, to: usize, out: &mut OutputCursor<'_>) {
    convert_unc(src, from + 1, to, out);
}

/// Resolve a rooted path to its native form.
///
/// A quote closing the argument stays out of the resolved text and is
/// appended after it.
pub(crate) fn convert_rooted<R: PathResolver, S: DiagnosticSink>(
    conv: &ArgConverter<'_, R, S>,
    src: &[u8],
    from: usize,
    to: usize,
    out: &mut OutputCursor<'_>,
) {
    let to = to.min(src.len());
    let mut real_to = to;
    if to == src.len() && real_to > from && is_quote(src[real_to - 1]) {
        real_to -= 1;
    }

    let path = run_bytes(src, from, real_to);
    if path == b"/dev/null" {
        out.copy(conv.options.null_device.as_bytes());
    } else {
        resolve_into(&conv.resolver, path, out);
    }

    if real_to != to {
        out.push(src[real_to]);
    }
}

/// Write the native form of `path`, or `path` itself if it cannot be
/// resolved
fn resolve_into<R: PathResolver>(resolver: &R, path: &[u8], out: &mut OutputCursor<'_>) {
    if path.is_empty() {
        return;
    }

    let Ok(posix) = std::str::from_utf8(path) else {
        tracing::trace!("path is not UTF-8, copying unchanged");
        out.copy(path);
        return;
    };

    match resolver.resolve_posix_to_native(posix) {
        Ok(native) => {
            tracing::trace!(posix, native = %native, "resolved path");
            out.copy_replacing(native.as_bytes(), b'\\', b'/');
        }
        Err(err) => {
            tracing::trace!(posix, error = %err, "resolution failed, copying unchanged");
            out.copy(path);
        }
    }
}
