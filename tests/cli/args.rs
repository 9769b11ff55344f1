// Integration tests for cli/args.rs: the argument parsing loop.
//
// Coverage:
//   - minimal valid invocation (-o <path> <input>)
//   - input ordering, multiple inputs
//   - -r raw flag, -h/-? help, -v/-q verbosity adjustment
//   - unrecognised dash tokens and bare `-` collected as input paths
//   - error paths: too few tokens, -o without argument, missing -o,
//     no input files

use bin2c::cli::args::{parse_args_from, ParsedArgs};
use bin2c::cli::constants::{display_level, set_display_level};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn args(a: &[&str]) -> Vec<String> {
    a.iter().map(|s| s.to_string()).collect()
}

fn parse(argv: &[&str]) -> ParsedArgs {
    parse_args_from(&args(argv)).expect("parse should succeed")
}

fn parse_err(argv: &[&str]) -> String {
    parse_args_from(&args(argv))
        .expect_err("expected parse error")
        .to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Valid invocations
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn minimal_invocation() {
    let p = parse(&["-o", "data.c", "a.png"]);
    assert_eq!(p.output_filename, "data.c");
    assert_eq!(p.in_file_names, vec!["a.png"]);
    assert!(!p.raw);
    assert!(!p.help_requested);
}

#[test]
fn inputs_keep_command_line_order() {
    let p = parse(&["-o", "data.c", "b.txt", "a.png", "c.bin"]);
    assert_eq!(p.in_file_names, vec!["b.txt", "a.png", "c.bin"]);
}

#[test]
fn output_flag_position_is_free() {
    let p = parse(&["a.png", "-o", "data.c", "b.txt"]);
    assert_eq!(p.output_filename, "data.c");
    assert_eq!(p.in_file_names, vec!["a.png", "b.txt"]);
}

#[test]
fn later_output_flag_wins() {
    let p = parse(&["-o", "first.c", "-o", "second.c", "a.png"]);
    assert_eq!(p.output_filename, "second.c");
}

#[test]
fn raw_flag() {
    let p = parse(&["-r", "-o", "data.c", "a.png"]);
    assert!(p.raw);
}

#[test]
fn unknown_dash_token_is_an_input_path() {
    let p = parse(&["-o", "data.c", "-x", "a.png"]);
    assert_eq!(p.in_file_names, vec!["-x", "a.png"]);
}

#[test]
fn bare_dash_is_an_input_path() {
    let p = parse(&["-o", "data.c", "-"]);
    assert_eq!(p.in_file_names, vec!["-"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Help
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn short_help_flag() {
    let p = parse(&["-h"]);
    assert!(p.help_requested);
}

#[test]
fn question_mark_help_flag() {
    let p = parse(&["-?"]);
    assert!(p.help_requested);
}

#[test]
fn help_wins_over_other_arguments() {
    let p = parse(&["-o", "data.c", "a.png", "-h"]);
    assert!(p.help_requested);
}

// ─────────────────────────────────────────────────────────────────────────────
// Verbosity
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn verbosity_flags_move_the_display_level() {
    // The display level is process-global; save and restore around the test.
    let prev = display_level();
    set_display_level(2);
    let _ = parse(&["-v", "-v", "-o", "data.c", "a.png"]);
    assert_eq!(display_level(), 4);
    let _ = parse(&["-q", "-o", "data.c", "a.png"]);
    assert_eq!(display_level(), 3);
    set_display_level(prev);
}

// ─────────────────────────────────────────────────────────────────────────────
// Error paths
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn too_few_tokens() {
    let msg = parse_err(&["-o", "data.c"]);
    assert!(msg.starts_with("bad usage:"), "got: {msg}");
}

#[test]
fn empty_argv() {
    let msg = parse_err(&[]);
    assert!(msg.starts_with("bad usage:"), "got: {msg}");
}

#[test]
fn output_flag_without_path() {
    let msg = parse_err(&["a.png", "b.png", "-o"]);
    assert!(msg.contains("-o"), "got: {msg}");
}

#[test]
fn missing_output_flag() {
    let msg = parse_err(&["a.png", "b.png", "c.png"]);
    assert!(msg.contains("output"), "got: {msg}");
}

#[test]
fn no_input_files() {
    let msg = parse_err(&["-r", "-o", "data.c"]);
    assert!(msg.contains("input"), "got: {msg}");
}
