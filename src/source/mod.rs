//! Providers of the byte count that gets formatted.

pub mod adapter;
pub mod local;
pub mod null;

pub use adapter::SourceAdapter;
pub use local::LocalFile;
pub use null::NullSource;

use crate::error::Result;

/// Anything that can report the size of some resource in bytes.
pub trait SizeSource: Send {
    fn size_in_bytes(&self) -> Result<u64>;
}

impl<F> SizeSource for F
where
    F: Fn() -> Result<u64> + Send,
{
    fn size_in_bytes(&self) -> Result<u64> {
        self()
    }
}
