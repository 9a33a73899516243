//! `fsize` - human-readable, locale-aware file sizes.
//!
//! A [`SizeFormatter`] pulls a byte count from a [`SizeSource`] (a local
//! file, or anything implementing the trait), scales it into binary
//! (`KiB`, `MiB`, ...) or decimal (`KB`, `MB`, ...) units and formats the
//! number with the grouping and decimal separators of its locale.
//!
//! # Example
//!
//! ```
//! use fsize::SizeFormatter;
//!
//! let mut formatter = SizeFormatter::create(Some("de_DE"), None)?;
//! let size = formatter
//!     .with_base_decimal()
//!     .with_source(|| -> fsize::Result<u64> { Ok(1_500_000) })
//!     .formatted_size(2)?;
//!
//! assert_eq!(size, "1,50 MB");
//! # Ok::<(), fsize::FileSizeError>(())
//! ```

pub mod bytes;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod source;

pub use bytes::{system::Base, units::UnitTables};
pub use error::{FileSizeError, Result};
pub use formatter::{SizeFormatter, DEFAULT_PRECISION};
pub use locale::{Locale, DEFAULT_LOCALE};
pub use source::{LocalFile, NullSource, SizeSource, SourceAdapter};
