//! Mount table: the bundled POSIX to native path resolver

pub mod fstab;

use crate::error::{Error, Result};
use crate::traits::PathResolver;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Default cygdrive prefix: `/c/x` is `C:\x`
pub const DEFAULT_CYGDRIVE: &str = "/";

/// One POSIX mount point and the native directory behind it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mount {
    /// Mount point, absolute, no trailing `/` (except the root itself)
    pub posix: String,
    /// Native directory, `\` separated
    pub native: String,
}

impl Mount {
    /// Build a mount, normalizing both sides
    pub fn new(posix: &str, native: &str) -> Result<Self> {
        if !posix.starts_with('/') {
            return Err(Error::Config(format!(
                "mount point '{}' is not absolute",
                posix
            )));
        }
        if native.is_empty() {
            return Err(Error::Config(format!(
                "mount point '{}' has an empty native path",
                posix
            )));
        }

        let trimmed = posix.trim_end_matches('/');
        Ok(Self {
            posix: if trimmed.is_empty() { "/".to_string() } else { trimmed.to_string() },
            native: native.replace('/', "\\"),
        })
    }

    /// Remainder of `posix` below this mount point, if it is inside it
    fn strip<'p>(&self, posix: &'p str) -> Option<&'p str> {
        if self.posix == "/" {
            return posix.strip_prefix('/');
        }
        let rest = posix.strip_prefix(self.posix.as_str())?;
        if rest.is_empty() {
            Some(rest)
        } else {
            rest.strip_prefix('/')
        }
    }
}

/// Join a native directory and a `/` separated remainder
fn join_native(native: &str, rest: &str) -> String {
    let mut joined = native.trim_end_matches('\\').to_string();
    if rest.is_empty() && !joined.ends_with(':') {
        return joined;
    }
    joined.push('\\');
    joined.push_str(&rest.replace('/', "\\"));
    joined
}

#[derive(Debug, Deserialize)]
struct MountConfig {
    #[serde(default = "default_cygdrive")]
    cygdrive: String,
    #[serde(default)]
    mounts: BTreeMap<String, String>,
}

fn default_cygdrive() -> String {
    DEFAULT_CYGDRIVE.to_string()
}

/// POSIX to native mapping
///
/// Resolution order: the longest explicit mount point other than `/`,
/// then the cygdrive prefix (`/c/x` with the default prefix), then the
/// root mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountTable {
    mounts: Vec<Mount>,
    cygdrive: String,
}

impl Default for MountTable {
    fn default() -> Self {
        Self {
            mounts: Vec::new(),
            cygdrive: DEFAULT_CYGDRIVE.to_string(),
        }
    }
}

impl MountTable {
    /// Empty table: only cygdrive paths resolve
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with `/` mounted at `native_root`
    pub fn with_root(native_root: &str) -> Result<Self> {
        Self::new().with_mount("/", native_root)
    }

    /// Add a mount point, replacing an existing one at the same place
    pub fn with_mount(mut self, posix: &str, native: &str) -> Result<Self> {
        self.insert(Mount::new(posix, native)?);
        Ok(self)
    }

    /// Set the cygdrive prefix
    pub fn with_cygdrive(mut self, prefix: &str) -> Result<Self> {
        self.set_cygdrive(prefix)?;
        Ok(self)
    }

    pub(crate) fn insert(&mut self, mount: Mount) {
        self.mounts.retain(|m| m.posix != mount.posix);
        self.mounts.push(mount);
        // Longest mount point first
        self.mounts
            .sort_by(|a, b| b.posix.len().cmp(&a.posix.len()).then_with(|| a.posix.cmp(&b.posix)));
    }

    pub(crate) fn set_cygdrive(&mut self, prefix: &str) -> Result<()> {
        if !prefix.starts_with('/') {
            return Err(Error::Config(format!(
                "cygdrive prefix '{}' is not absolute",
                prefix
            )));
        }
        let mut prefix = prefix.trim_end_matches('/').to_string();
        prefix.push('/');
        self.cygdrive = prefix;
        Ok(())
    }

    /// Parse an fstab file (see [`fstab::parse`])
    pub fn from_fstab(text: &str) -> Result<Self> {
        fstab::parse(text)
    }

    /// Parse a YAML mount table
    ///
    /// ```yaml
    /// cygdrive: /
    /// mounts:
    ///   /: C:/msys64
    ///   /tmp: D:/scratch
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: MountConfig = serde_yaml::from_str(yaml)?;

        let mut table = Self::new();
        table.set_cygdrive(&config.cygdrive)?;
        for (posix, native) in &config.mounts {
            table.insert(Mount::new(posix, native)?);
        }
        tracing::debug!(mounts = table.mounts.len(), "loaded YAML mount table");
        Ok(table)
    }

    /// Load from a file: YAML for `.yaml`/`.yml`, fstab otherwise
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml" | "yml")
        );

        tracing::debug!(path = %path.display(), yaml = is_yaml, "loading mount table");
        if is_yaml {
            Self::from_yaml(&text)
        } else {
            Self::from_fstab(&text)
        }
    }

    /// Mount points, longest first
    pub fn mounts(&self) -> &[Mount] {
        &self.mounts
    }

    /// Cygdrive prefix, always ending in `/`
    pub fn cygdrive(&self) -> &str {
        &self.cygdrive
    }

    fn resolve_cygdrive(&self, posix: &str) -> Option<String> {
        let rest = posix.strip_prefix(self.cygdrive.as_str())?;
        let mut chars = rest.chars();
        let drive = chars.next().filter(char::is_ascii_alphabetic)?;
        let tail = chars.as_str();
        let tail = if tail.is_empty() { tail } else { tail.strip_prefix('/')? };
        Some(join_native(&format!("{}:", drive.to_ascii_uppercase()), tail))
    }
}

impl PathResolver for MountTable {
    fn resolve_posix_to_native(&self, posix: &str) -> Result<String> {
        if !posix.starts_with('/') {
            return Ok(posix.replace('/', "\\"));
        }

        let explicit = self
            .mounts
            .iter()
            .filter(|m| m.posix != "/")
            .find_map(|m| m.strip(posix).map(|rest| join_native(&m.native, rest)));
        if let Some(native) = explicit {
            return Ok(native);
        }

        if let Some(native) = self.resolve_cygdrive(posix) {
            return Ok(native);
        }

        self.mounts
            .iter()
            .find(|m| m.posix == "/")
            .and_then(|m| m.strip(posix).map(|rest| join_native(&m.native, rest)))
            .ok_or_else(|| Error::Resolve(format!("no mount point covers '{}'", posix)))
    }
}
