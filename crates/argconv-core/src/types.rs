//! Core type definitions

use serde::Serialize;
use std::borrow::Cow;

/// Syntactic shape of a path run found inside an argument
///
/// The shape decides which converter runs and whether directory
/// separators are swapped afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum PathShape {
    /// No path found
    None = 0,
    /// `C:\like\this` or `C:/like/this`, copied as is
    SimpleWindowsPath,
    /// `/C:\like\this`, leading separator dropped
    EscapeWindowsPath,
    /// `C:/a;C:/b` or `/a;/b`, copied as is
    WindowsPathList,
    /// `//server/share`, backslashes become slashes
    Unc,
    /// `//like\this`, leading separator dropped
    EscapedPath,
    /// `/like/this`, resolved to a native path
    RootedPath,
    /// `/a:/b:x/y`, split on `:` and converted element-wise
    PosixPathList,
    /// `./like/this` or `../like/this`, copied as is
    RelativePath,
    /// `scheme://host/path`, backslashes become slashes
    Url,
}

impl PathShape {
    /// Every shape, in tag order
    pub const ALL: [PathShape; 10] = [
        PathShape::None,
        PathShape::SimpleWindowsPath,
        PathShape::EscapeWindowsPath,
        PathShape::WindowsPathList,
        PathShape::Unc,
        PathShape::EscapedPath,
        PathShape::RootedPath,
        PathShape::PosixPathList,
        PathShape::RelativePath,
        PathShape::Url,
    ];

    /// Parse from the numeric tag
    #[inline]
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::None),
            1 => Some(Self::SimpleWindowsPath),
            2 => Some(Self::EscapeWindowsPath),
            3 => Some(Self::WindowsPathList),
            4 => Some(Self::Unc),
            5 => Some(Self::EscapedPath),
            6 => Some(Self::RootedPath),
            7 => Some(Self::PosixPathList),
            8 => Some(Self::RelativePath),
            9 => Some(Self::Url),
            _ => None,
        }
    }

    /// Get string representation
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::SimpleWindowsPath => "simple_windows_path",
            Self::EscapeWindowsPath => "escape_windows_path",
            Self::WindowsPathList => "windows_path_list",
            Self::Unc => "unc",
            Self::EscapedPath => "escaped_path",
            Self::RootedPath => "rooted_path",
            Self::PosixPathList => "posix_path_list",
            Self::RelativePath => "relative_path",
            Self::Url => "url",
        }
    }

    /// True when a path was found
    #[inline]
    pub const fn is_path(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl std::fmt::Display for PathShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conversion options
#[derive(Debug, Clone)]
pub struct ConvertOptions<'a> {
    /// Directory separator written into converted list elements
    pub native_separator: u8,
    /// Separator written between converted list elements
    pub list_separator: u8,
    /// Replacement for `/dev/null`
    pub null_device: Cow<'a, str>,
}

impl<'a> Default for ConvertOptions<'a> {
    fn default() -> Self {
        Self {
            native_separator: b'\\',
            list_separator: b';',
            null_device: Cow::Borrowed("nul"),
        }
    }
}

/// How serious a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// Output was degraded but still produced
    Warning,
}

/// What a diagnostic is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCategory {
    /// Output capacity ran out in the middle of a path list
    PathCutOff,
}

/// Advisory message produced during conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity
    pub severity: DiagnosticSeverity,
    /// Category
    pub category: DiagnosticCategory,
    /// Human readable message
    pub message: String,
}
