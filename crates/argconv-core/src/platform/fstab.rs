//! fstab parsing
//!
//! Each non-comment line is `native posix type options [dump pass]`.
//! Spaces inside a field are written as `\040`. A line of type `cygdrive`
//! sets the cygdrive prefix instead of adding a mount:
//!
//! ```text
//! # /etc/fstab
//! C:/msys64      /      ntfs      binary,noacl       0 0
//! none           /      cygdrive  binary,posix=0     0 0
//! D:/My\040Data  /data  ntfs      binary             0 0
//! ```

use super::{Mount, MountTable};
use crate::error::{Error, Result};

/// Decode octal `\NNN` escapes
pub fn unescape(field: &str) -> String {
    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 3 < bytes.len() && is_octal_escape(&bytes[i + 1..i + 4]) {
            let value = bytes[i + 1..i + 4]
                .iter()
                .fold(0u32, |acc, &d| acc * 8 + u32::from(d - b'0'));
            out.push(value as u8);
            i += 4;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// Three octal digits no larger than `\377`
fn is_octal_escape(digits: &[u8]) -> bool {
    digits.len() == 3
        && digits.iter().all(|d| (b'0'..=b'7').contains(d))
        && digits[0] <= b'3'
}

/// Parse fstab text into a mount table
///
/// Lines with fewer than four fields are rejected with the line number.
pub fn parse(text: &str) -> Result<MountTable> {
    let mut table = MountTable::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(Error::Config(format!(
                "fstab line {}: expected at least 4 fields, found {}",
                index + 1,
                fields.len()
            )));
        }

        let native = unescape(fields[0]);
        let posix = unescape(fields[1]);

        if fields[2] == "cygdrive" {
            table.set_cygdrive(&posix)?;
            continue;
        }

        let mount = Mount::new(&posix, &native)
            .map_err(|e| Error::Config(format!("fstab line {}: {}", index + 1, e.message())))?;
        tracing::trace!(posix = %mount.posix, native = %mount.native, "fstab mount");
        table.insert(mount);
    }

    tracing::debug!(mounts = table.mounts().len(), cygdrive = table.cygdrive(), "parsed fstab");
    Ok(table)
}
