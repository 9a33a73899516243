use crate::{error::Result, source::SizeSource};

/// Normalizes a caller-supplied source behind one entry point. Errors from
/// the inner source pass through untouched.
pub struct SourceAdapter<S> {
    inner: S,
}

impl<S: SizeSource> SourceAdapter<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: SizeSource> SizeSource for SourceAdapter<S> {
    fn size_in_bytes(&self) -> Result<u64> {
        self.inner.size_in_bytes()
    }
}
