use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::trace;

use crate::{
    error::{FileSizeError, Result},
    source::SizeSource,
};

/// Size of a file on the local filesystem.
///
/// Existence is checked once, at construction. The file is stat'ed again on
/// every query, so a file removed in between surfaces as an I/O error.
#[derive(Clone, Debug)]
pub struct LocalFile {
    path: PathBuf,
}

impl LocalFile {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FileSizeError::NotFound {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SizeSource for LocalFile {
    fn size_in_bytes(&self) -> Result<u64> {
        let size = fs::metadata(&self.path)
            .map(|m| m.len())
            .map_err(|source| FileSizeError::Io {
                path: self.path.clone(),
                source,
            })?;

        trace!("stat '{}': {} bytes", self.path.display(), size);
        Ok(size)
    }
}
