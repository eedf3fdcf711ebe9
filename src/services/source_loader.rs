//! Read-only access to input files.
//!
//! Inputs are memory-mapped rather than read into a buffer: ROM and disk
//! images can be large and the renderer only ever reads them.

use memmap2::Mmap;
use std::fs::File;
use std::ops::Deref;
use std::path::Path;

use crate::error::ArtError;

/// Bytes of one input file
#[derive(Debug)]
pub enum SourceData {
    /// Memory-mapped file contents
    Mapped(Mmap),
    /// Zero-length file (empty files cannot be mapped on every platform)
    Empty,
}

impl SourceData {
    /// Open and map `path`.
    pub fn open(path: &Path) -> Result<Self, ArtError> {
        let read_error = |source| ArtError::Read {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_error)?;
        let len = file.metadata().map_err(read_error)?.len();
        if len == 0 {
            tracing::debug!(path = %path.display(), "Empty input, not mapping");
            return Ok(SourceData::Empty);
        }

        // SAFETY: the map is read-only and dropped before the render returns.
        // Another process truncating the file mid-render is not guarded against.
        let mmap = unsafe { Mmap::map(&file) }.map_err(read_error)?;
        tracing::debug!(path = %path.display(), bytes = mmap.len(), "Mapped input");
        Ok(SourceData::Mapped(mmap))
    }
}

impl Deref for SourceData {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            SourceData::Mapped(mmap) => mmap,
            SourceData::Empty => &[],
        }
    }
}
