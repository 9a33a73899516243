//! Error type shared by every fsize operation.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, FileSizeError>;

#[derive(Debug, thiserror::Error)]
pub enum FileSizeError {
    #[error("no file source has been set")]
    NoSource,

    /// The local path did not exist when the source was created.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("invalid locale format: {locale}. Expected format is 'en_US'")]
    LocaleFormat { locale: String },

    #[error("the units {units} must contain non-empty 'binary_units' and 'decimal_units' arrays")]
    Configuration { units: String },

    /// Stat failed after the source was created.
    #[error("error reading size of '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failure reported by a caller-supplied source.
    #[error(transparent)]
    Source(Box<dyn std::error::Error + Send + Sync>),
}

impl FileSizeError {
    pub fn from_source<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Source(err.into())
    }
}
