//! Tests for the filesystem collaborator.

use super::file_store::{FileStore, FsFileStore};
use crate::error::Error;

#[test]
fn test_write_then_read_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");
    let files = FsFileStore;

    files.write_all_text(&path, "{\"nodes\": []}").unwrap();
    let text = files.read_all_text(&path).unwrap();
    assert_eq!(text, "{\"nodes\": []}");
}

#[test]
fn test_read_missing_file_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FsFileStore
        .read_all_text(&dir.path().join("absent.json"))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_write_to_missing_directory_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FsFileStore
        .write_all_text(&dir.path().join("no/such/dir/graph.json"), "{}")
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
