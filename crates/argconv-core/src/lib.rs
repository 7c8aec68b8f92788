//! # argconv core
//!
//! Rewrites POSIX-style paths embedded in command-line arguments into
//! native Windows form before a POSIX-emulation layer hands them to a
//! native program.
//!
//! An argument such as `-I/usr/include`, `PATH=/usr/bin:/bin` or
//! `--prefix="/usr/local"` is scanned once: the classifier finds where the
//! path starts and what shape it has, a boundary finder decides where it
//! ends, and a per-shape converter writes the native form into a
//! caller-provided, fixed-capacity buffer. Everything else is copied
//! byte for byte.
//!
//! - Output never exceeds the buffer: capacity `N` holds `N - 1` data bytes
//!   and a `0` terminator.
//! - Conversion never fails. Resolution errors fall back to the original
//!   text, truncation is reported through a [`DiagnosticSink`].
//! - Rooted paths are resolved by a pluggable [`PathResolver`];
//!   [`MountTable`] is the bundled one.
//!
//! ## Example
//!
//! ```
//! use argconv_core::{ArgConverter, MountTable};
//!
//! # fn example() -> argconv_core::Result<()> {
//! let mounts = MountTable::with_root("C:\\msys64")?;
//! let converter = ArgConverter::new(&mounts);
//!
//! let mut buf = [0u8; 256];
//! let out = converter.convert(&mut buf, b"PATH=/usr/bin:/bin");
//! assert_eq!(out, b"PATH=C:\\msys64\\usr\\bin;C:\\msys64\\bin");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs, rust_2018_idioms)]

pub mod bounds;
pub mod classifier;
pub mod convert;
pub mod diagnostics;
pub mod error;
pub mod platform;
pub mod scan;
pub mod traits;
pub mod types;

pub use classifier::{classify, classify_at};
pub use convert::driver::convert;
pub use convert::{needs_conversion, ArgConverter};
pub use diagnostics::{CollectingSink, NullSink, TracingSink};
pub use error::{Error, ErrorKind, Result};
pub use platform::{Mount, MountTable};
pub use traits::{DiagnosticSink, PathResolver, ResolveFn};
pub use types::{ConvertOptions, Diagnostic, DiagnosticCategory, DiagnosticSeverity, PathShape};
