// Integration tests for io/output.rs: the delete-on-failure output guard.
//
// Coverage:
//   - committed output survives with the written bytes
//   - dropping without commit removes the file
//   - create failure (missing parent directory) → OutputOpen

use std::fs;
use std::io::Write;

use bin2c::error::Bin2cError;
use bin2c::io::output::OutputFile;
use tempfile::TempDir;

#[test]
fn committed_file_survives_with_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.c");
    let path_str = path.to_str().unwrap();

    let mut out = OutputFile::create(path_str).unwrap();
    out.write_all(b"generated\n").unwrap();
    out.commit().unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"generated\n");
}

#[test]
fn dropped_uncommitted_file_is_removed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.c");
    let path_str = path.to_str().unwrap();

    {
        let mut out = OutputFile::create(path_str).unwrap();
        out.write_all(b"partial").unwrap();
        assert!(path.exists());
        // dropped here without commit
    }
    assert!(!path.exists(), "partial output must not survive");
}

#[test]
fn create_in_missing_directory_is_output_open_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no/such/dir/out.c");
    let path_str = path.to_str().unwrap().to_owned();

    let err = OutputFile::create(&path_str).unwrap_err();
    match err {
        Bin2cError::OutputOpen { ref path, .. } => assert_eq!(path, &path_str),
        other => panic!("expected OutputOpen, got {other:?}"),
    }
}

#[test]
fn existing_file_is_truncated_on_create() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.c");
    fs::write(&path, b"old contents that are longer").unwrap();

    let mut out = OutputFile::create(path.to_str().unwrap()).unwrap();
    out.write_all(b"new").unwrap();
    out.commit().unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"new");
}
