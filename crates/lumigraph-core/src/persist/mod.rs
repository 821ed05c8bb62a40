//! Persistence: the JSON graph document and the file-access seam.

mod file_store;
mod snapshot;

#[cfg(test)]
mod file_store_tests;

pub use file_store::{FileStore, FsFileStore};
pub use snapshot::GraphSnapshot;
