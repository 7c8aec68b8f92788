//! Segment driver
//!
//! Converts one argument: the literal prefix before the first path run is
//! copied, the run is converted according to its shape, and everything
//! after the run's delimiter is copied verbatim. Only the first run of an
//! argument is converted; callers convert argv one argument at a time.

use super::{needs_conversion, shapes};
use crate::bounds::{find_end_of_posix_list, find_end_of_rooted_path};
use crate::classifier::classify;
use crate::diagnostics::TracingSink;
use crate::scan::{OutputCursor, QuoteState, ScanCursor};
use crate::traits::{DiagnosticSink, PathResolver};
use crate::types::{ConvertOptions, PathShape};

/// Converts POSIX paths inside arguments to native form
///
/// Holds no per-call state; one converter may serve many threads as long
/// as each call uses its own output buffer.
#[derive(Debug, Clone)]
pub struct ArgConverter<'o, R, S = TracingSink> {
    pub(crate) resolver: R,
    pub(crate) sink: S,
    pub(crate) options: ConvertOptions<'o>,
}

impl<'o, R: PathResolver> ArgConverter<'o, R, TracingSink> {
    /// Converter with default options reporting diagnostics to `tracing`
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            sink: TracingSink,
            options: ConvertOptions::default(),
        }
    }
}

impl<'o, R: PathResolver, S: DiagnosticSink> ArgConverter<'o, R, S> {
    /// Replace the diagnostic sink
    pub fn with_sink<S2: DiagnosticSink>(self, sink: S2) -> ArgConverter<'o, R, S2> {
        ArgConverter {
            resolver: self.resolver,
            sink,
            options: self.options,
        }
    }

    /// Replace the conversion options
    pub fn with_options(mut self, options: ConvertOptions<'o>) -> Self {
        self.options = options;
        self
    }

    /// Conversion options in effect
    pub fn options(&self) -> &ConvertOptions<'o> {
        &self.options
    }

    /// The diagnostic sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The path resolver
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Convert `src` into `dst` and return the converted bytes.
    ///
    /// `dst.len()` is the capacity: at most `dst.len() - 1` data bytes are
    /// written, followed by a `0` terminator. Output that does not fit is
    /// dropped. A zero-capacity buffer is returned untouched. The input
    /// ends at its first `0` byte, if any.
    pub fn convert<'b>(&self, dst: &'b mut [u8], src: &[u8]) -> &'b [u8] {
        if dst.is_empty() {
            return dst;
        }

        let src = match memchr::memchr(0, src) {
            Some(nul) => &src[..nul],
            None => src,
        };

        let len = {
            let mut out = OutputCursor::new(dst);
            if needs_conversion(src) {
                self.convert_first_run(src, &mut out);
            } else {
                out.copy(src);
            }
            out.terminate()
        };

        &dst[..len]
    }

    /// Convert into a fresh buffer of `capacity` bytes.
    ///
    /// Non-UTF-8 output is replaced lossily.
    pub fn convert_to_string(&self, src: &str, capacity: usize) -> String {
        let mut buf = vec![0u8; capacity];
        String::from_utf8_lossy(self.convert(&mut buf, src.as_bytes())).into_owned()
    }

    fn convert_first_run(&self, src: &[u8], out: &mut OutputCursor<'_>) {
        let mut quote = QuoteState::after(src);

        let mut cursor = ScanCursor::new(src);
        let shape = classify(&mut cursor);
        let from = cursor.pos();
        tracing::debug!(
            shape = %shape,
            start = from,
            restarted = cursor.restarted(),
            "classified argument"
        );

        let to = match shape {
            PathShape::PosixPathList => find_end_of_posix_list(src, src.len(), &mut quote),
            PathShape::RootedPath => find_end_of_rooted_path(src, from, src.len(), &mut quote),
            _ => src.len(),
        };

        out.copy(&src[..from]);
        shapes::convert_run(self, src, from, to, shape, out);

        // Input end needs no delimiter, the terminator closes the output
        let Some(&delimiter) = src.get(to) else {
            return;
        };
        out.push(delimiter);
        out.copy(&src[to + 1..]);
    }
}

/// Convert `src` into `dst` with default options.
///
/// Diagnostics go to `tracing`. See [`ArgConverter::convert`].
pub fn convert<'b, R: PathResolver>(dst: &'b mut [u8], src: &[u8], resolver: R) -> &'b [u8] {
    ArgConverter::new(resolver).convert(dst, src)
}
