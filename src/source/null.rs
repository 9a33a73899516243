use crate::{
    error::{FileSizeError, Result},
    source::SizeSource,
};

/// Placeholder installed until a real source is attached.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSource;

impl SizeSource for NullSource {
    fn size_in_bytes(&self) -> Result<u64> {
        Err(FileSizeError::NoSource)
    }
}
