// Error-path e2e tests: failure exit codes and the all-or-nothing output
// contract, exercised against the built binary.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

fn bin2c_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_bin2c") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("bin2c");
    p
}

// ── Missing input file ────────────────────────────────────────────────────────

#[test]
fn test_missing_input_exits_one_and_removes_output() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.bin");
    fs::write(&good, b"fine").unwrap();
    let output = dir.path().join("data.c");

    let out = Command::new(bin2c_bin())
        .args([
            "-o",
            output.to_str().unwrap(),
            good.to_str().unwrap(),
            dir.path().join("missing.bin").to_str().unwrap(),
        ])
        .output()
        .expect("failed to run bin2c");

    assert_eq!(out.status.code(), Some(1));
    assert!(
        !output.exists(),
        "partially written output must be deleted on failure"
    );
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("missing.bin"),
        "error should name the offending file; got: {stderr}"
    );
}

// ── Unrecognised dash token is an input path ──────────────────────────────────

#[test]
fn test_unknown_flag_treated_as_missing_input() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("data.c");

    let out = Command::new(bin2c_bin())
        .args(["-o", output.to_str().unwrap(), "-x"])
        .current_dir(dir.path())
        .output()
        .expect("failed to run bin2c");

    // `-x` is collected as an input path; no such file exists.
    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists());
}

// ── Output cannot be created ──────────────────────────────────────────────────

#[test]
fn test_unwritable_output_exits_one() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.bin");
    fs::write(&input, b"data").unwrap();
    let output = dir.path().join("no/such/dir/data.c");

    let out = Command::new(bin2c_bin())
        .args(["-o", output.to_str().unwrap(), input.to_str().unwrap()])
        .output()
        .expect("failed to run bin2c");

    assert_eq!(out.status.code(), Some(1));
}

// ── Directory as input ────────────────────────────────────────────────────────

#[test]
fn test_directory_input_fails_and_removes_output() {
    let dir = TempDir::new().unwrap();
    let subdir = dir.path().join("sub");
    fs::create_dir(&subdir).unwrap();
    let output = dir.path().join("data.c");

    let out = Command::new(bin2c_bin())
        .args(["-o", output.to_str().unwrap(), subdir.to_str().unwrap()])
        .output()
        .expect("failed to run bin2c");

    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists());
}

// ── Zero-byte input still succeeds ────────────────────────────────────────────

#[test]
fn test_zero_byte_input_succeeds() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.bin");
    fs::write(&input, b"").unwrap();
    let output = dir.path().join("data.c");

    let status = Command::new(bin2c_bin())
        .args(["-o", output.to_str().unwrap(), input.to_str().unwrap()])
        .status()
        .expect("failed to run bin2c");

    assert!(status.success(), "empty input is not an error");
    let generated = fs::read_to_string(&output).unwrap();
    assert!(generated.contains("_bin_empty_data"));
}
