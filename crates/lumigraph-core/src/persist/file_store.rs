//! File-access collaborator for graph persistence.
//!
//! Load and save are synchronous, blocking calls; failures surface as
//! [`crate::error::Error::Io`] and are never retried automatically.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Synchronous text file access, as the editor consumes it.
///
/// A trait seam so controller and tests can run against an in-memory
/// implementation without touching the filesystem.
pub trait FileStore {
    /// Reads an entire file as UTF-8 text.
    fn read_all_text(&self, path: &Path) -> Result<String>;

    /// Writes `text` to `path`, replacing any existing content.
    fn write_all_text(&self, path: &Path, text: &str) -> Result<()>;
}

/// The `std::fs` implementation used by the real editor.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileStore;

impl FileStore for FsFileStore {
    fn read_all_text(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }

    fn write_all_text(&self, path: &Path, text: &str) -> Result<()> {
        Ok(fs::write(path, text)?)
    }
}
