//! Trait seams for the collaborators the converter does not own

use crate::error::Result;
use crate::types::Diagnostic;

/// POSIX to native path resolution
///
/// Called only for rooted paths. The returned path may use either
/// separator; the converter normalizes backslashes to forward slashes.
/// On error the converter copies the original POSIX text unchanged.
pub trait PathResolver {
    /// Resolve one POSIX path (no surrounding quotes, no list separators)
    fn resolve_posix_to_native(&self, posix: &str) -> Result<String>;
}

impl<R: PathResolver + ?Sized> PathResolver for &R {
    #[inline]
    fn resolve_posix_to_native(&self, posix: &str) -> Result<String> {
        (**self).resolve_posix_to_native(posix)
    }
}

/// Adapter turning a closure into a [`PathResolver`]
pub struct ResolveFn<F>(pub F);

impl<F> PathResolver for ResolveFn<F>
where
    F: Fn(&str) -> Result<String>,
{
    #[inline]
    fn resolve_posix_to_native(&self, posix: &str) -> Result<String> {
        (self.0)(posix)
    }
}

/// Receiver for advisory diagnostics
///
/// Reporting must not influence the converted output.
pub trait DiagnosticSink {
    /// Record one diagnostic
    fn report(&self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    #[inline]
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic)
    }
}
