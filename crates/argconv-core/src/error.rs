//! Error types for argconv-core
//!
//! Conversion itself never fails: every problem inside [`crate::convert`]
//! degrades to a best-effort copy of the original bytes. These errors
//! surface from the pluggable pieces around it (path resolution, mount
//! table loading).

/// Result type alias for argconv operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for argconv operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// POSIX to native path resolution failed
    #[error("Resolution error: {0}")]
    Resolve(String),

    /// Invalid configuration (mount table, options)
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Yaml(err.to_string())
    }
}

/// Fieldless error category for zero-cost pattern matching.
///
/// Single byte representation (`#[repr(u8)]`), `Copy`, no allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorKind {
    /// Path resolution error
    Resolve,
    /// Configuration error
    Config,
    /// YAML parsing error
    Yaml,
    /// I/O operation error
    Io,
}

impl Error {
    /// Get the error kind without allocating.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Resolve(_) => ErrorKind::Resolve,
            Error::Config(_) => ErrorKind::Config,
            Error::Yaml(_) => ErrorKind::Yaml,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    /// Borrow the error message.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Error::Resolve(msg)
            | Error::Config(msg)
            | Error::Yaml(msg) => msg,
            Error::Io(_) => "I/O error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_repr_u8() {
        assert_eq!(std::mem::size_of::<ErrorKind>(), 1);
    }

    #[test]
    fn test_error_message_borrows() {
        let err = Error::Resolve("no mount for /x".to_string());
        let msg: &str = err.message();
        assert_eq!(msg, "no mount for /x");
    }

    #[test]
    fn test_all_error_variants_have_kind() {
        let cases: Vec<(Error, ErrorKind)> = vec![
            (Error::Resolve("r".into()), ErrorKind::Resolve),
            (Error::Config("c".into()), ErrorKind::Config),
            (Error::Yaml("y".into()), ErrorKind::Yaml),
            (Error::Io(std::io::Error::other("io")), ErrorKind::Io),
        ];

        for (err, expected_kind) in cases {
            assert_eq!(err.kind(), expected_kind, "Mismatch for {:?}", err);
        }
    }

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            Error::Config("bad line".into()).to_string(),
            "Configuration error: bad line"
        );
        assert_eq!(
            Error::Resolve("/x".into()).to_string(),
            "Resolution error: /x"
        );
    }

    #[test]
    fn test_yaml_error_converts() {
        let err: Error = serde_yaml::from_str::<Vec<String>>("{")
            .map_err(Error::from)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Yaml);
    }
}
