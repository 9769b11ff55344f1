// CLI integration tests: the `bin2c` binary as a black box.
//
// Covers argument handling, exit codes, generated-file shape, and the
// compress/raw roundtrip, using std::process::Command.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use flate2::{Decompress, FlushDecompress};
use tempfile::TempDir;

/// Locate the `bin2c` binary produced by Cargo.
fn bin2c_bin() -> PathBuf {
    // CARGO_BIN_EXE_bin2c is set by Cargo when running integration tests.
    // Fall back to walking up from the test binary location.
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_bin2c") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // remove test binary filename
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("bin2c");
    p
}

/// Create a TempDir containing a binary fixture file.
fn make_temp_input(name: &str, content: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join(name);
    fs::write(&input_path, content).unwrap();
    (dir, input_path)
}

fn extract_array(source: &str, identifier: &str) -> Vec<u8> {
    let header = format!("static const unsigned char {}[] = {{", identifier);
    let start = source.find(&header).expect("array header present") + header.len();
    let end = source[start..].find("};").expect("array terminator present") + start;
    source[start..end]
        .split(',')
        .map(str::trim)
        .filter(|tok| !tok.is_empty())
        .map(|tok| u8::from_str_radix(tok.trim_start_matches("0x"), 16).unwrap())
        .collect()
}

// ── 1. Successful conversion, compressed roundtrip ────────────────────────────

#[test]
fn test_cli_convert_and_roundtrip() {
    let content = b"binary asset payload ".repeat(500);
    let (dir, input) = make_temp_input("asset.png", &content);
    let output = dir.path().join("data.c");

    let status = Command::new(bin2c_bin())
        .args(["-o", output.to_str().unwrap(), input.to_str().unwrap()])
        .status()
        .expect("failed to run bin2c");
    assert!(status.success(), "conversion should exit 0");
    assert!(output.exists(), "output file should exist");

    let generated = fs::read_to_string(&output).unwrap();
    let emitted = extract_array(&generated, "_png_asset_data");

    let mut recovered = Vec::with_capacity(content.len() + 64);
    let mut stream = Decompress::new(true);
    stream
        .decompress_vec(&emitted, &mut recovered, FlushDecompress::Finish)
        .expect("emitted bytes should decompress");
    assert_eq!(recovered, content, "roundtrip must match original");
}

// ── 2. Multiple inputs and manifest ───────────────────────────────────────────

#[test]
fn test_cli_multiple_inputs_manifest() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.png");
    let b = dir.path().join("b.txt");
    fs::write(&a, b"first").unwrap();
    fs::write(&b, b"second").unwrap();
    let output = dir.path().join("data.c");

    let status = Command::new(bin2c_bin())
        .args([
            "-o",
            output.to_str().unwrap(),
            a.to_str().unwrap(),
            b.to_str().unwrap(),
        ])
        .status()
        .expect("failed to run bin2c");
    assert!(status.success());

    let generated = fs::read_to_string(&output).unwrap();
    let manifest = &generated[generated.find("Export:").expect("manifest present")..];
    assert_eq!(manifest.matches("_png_a_data").count(), 1);
    assert_eq!(manifest.matches("_txt_b_data").count(), 1);
    assert!(manifest.find("_png_a_data").unwrap() < manifest.find("_txt_b_data").unwrap());
    assert!(generated.trim_end().ends_with("*/"), "manifest closes the file");
}

// ── 3. Raw mode ───────────────────────────────────────────────────────────────

#[test]
fn test_cli_raw_mode_verbatim_bytes() {
    let content: Vec<u8> = (0..64u8).collect();
    let (dir, input) = make_temp_input("table.bin", &content);
    let output = dir.path().join("data.c");

    let status = Command::new(bin2c_bin())
        .args(["-r", "-o", output.to_str().unwrap(), input.to_str().unwrap()])
        .status()
        .expect("failed to run bin2c");
    assert!(status.success());

    let generated = fs::read_to_string(&output).unwrap();
    assert_eq!(extract_array(&generated, "_bin_table_data"), content);
}

// ── 4. Help flags ─────────────────────────────────────────────────────────────

#[test]
fn test_cli_help_exits_one_with_usage() {
    for flag in ["-h", "-?"] {
        let out = Command::new(bin2c_bin())
            .arg(flag)
            .output()
            .expect("failed to run bin2c");
        assert_eq!(out.status.code(), Some(1), "{flag} should exit 1");
        let combined = format!(
            "{}{}",
            String::from_utf8_lossy(&out.stdout),
            String::from_utf8_lossy(&out.stderr)
        );
        assert!(
            combined.contains("Usage:"),
            "{flag} output should contain usage; got: {combined}"
        );
    }
}

// ── 5. Bad invocations ────────────────────────────────────────────────────────

#[test]
fn test_cli_no_arguments_exits_one() {
    let out = Command::new(bin2c_bin())
        .output()
        .expect("failed to run bin2c");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage:"), "usage should be printed; got: {stderr}");
}

#[test]
fn test_cli_missing_output_flag_exits_one() {
    let (dir, input) = make_temp_input("a.bin", b"data");
    let out = Command::new(bin2c_bin())
        .args([
            input.to_str().unwrap(),
            input.to_str().unwrap(),
            input.to_str().unwrap(),
        ])
        .current_dir(dir.path())
        .output()
        .expect("failed to run bin2c");
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_cli_zero_inputs_writes_no_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("data.c");
    let out = Command::new(bin2c_bin())
        .args(["-r", "-o", output.to_str().unwrap()])
        .output()
        .expect("failed to run bin2c");
    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists(), "no output file may be created");
}
