//! Command-line argument parsing for `bin2c`.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit-testing).
//! Both return a [`ParsedArgs`] value.
//!
//! Recognised options are `-o <path>` (output file), `-r` (raw, skip
//! compression), `-v` / `-q` (raise / lower verbosity) and `-h` / `-?`
//! (help). Every other token, including unrecognised `-x` style tokens and
//! a bare `-`, is collected as an input file path, in order.
//!
//! Bad or incomplete invocations return an `Err` with a human-readable
//! message that begins with `"bad usage: "`.

use anyhow::anyhow;

use crate::cli::constants::{display_level, set_display_level};
use crate::displaylevel;

/// Fewest tokens that can form a valid invocation: `-o <path> <input>`.
const MIN_ARG_COUNT: usize = 3;

/// Complete set of options and filenames produced by the argument loop.
#[derive(Debug)]
pub struct ParsedArgs {
    /// Path of the C source file to generate.
    pub output_filename: String,
    /// Input filenames, in command-line order.
    pub in_file_names: Vec<String>,
    /// Skip compression and emit file contents verbatim (`-r`).
    pub raw: bool,
    /// When `true`, `-h`/`-?` was seen; the caller prints usage and exits 1
    /// without performing any I/O. All other fields are unset.
    pub help_requested: bool,
}

impl ParsedArgs {
    fn help() -> Self {
        ParsedArgs {
            output_filename: String::new(),
            in_file_names: Vec::new(),
            raw: false,
            help_requested: true,
        }
    }
}

/// Parse `std::env::args()` (skipping argv[0]).
///
/// Delegates to [`parse_args_from`] after collecting `argv` into a `Vec`.
pub fn parse_args() -> anyhow::Result<ParsedArgs> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(&argv)
}

/// Parse an explicit argument list (argv[1..]).
///
/// This variant is callable from tests without touching `std::env`.
pub fn parse_args_from(argv: &[String]) -> anyhow::Result<ParsedArgs> {
    let mut output_filename: Option<String> = None;
    let mut in_file_names: Vec<String> = Vec::new();
    let mut raw = false;

    let mut arg_idx = 0usize;
    while arg_idx < argv.len() {
        let argument = &argv[arg_idx];
        let bytes = argument.as_bytes();

        if bytes.len() >= 2 && bytes[0] == b'-' {
            match bytes[1] {
                b'o' => {
                    arg_idx += 1;
                    let path = argv
                        .get(arg_idx)
                        .ok_or_else(|| anyhow!("bad usage: -o requires a path argument"))?;
                    displaylevel!(3, "output file: {} \n", path);
                    output_filename = Some(path.clone());
                }
                b'h' | b'?' => return Ok(ParsedArgs::help()),
                b'r' => raw = true,
                b'v' => set_display_level(display_level().saturating_add(1)),
                b'q' => set_display_level(display_level().saturating_sub(1)),
                // Anything else that merely starts with '-' is a filename.
                _ => in_file_names.push(argument.clone()),
            }
        } else {
            displaylevel!(4, "input file: {} \n", argument);
            in_file_names.push(argument.clone());
        }

        arg_idx += 1;
    }

    if argv.len() < MIN_ARG_COUNT {
        return Err(anyhow!("bad usage: not enough arguments"));
    }
    let output_filename =
        output_filename.ok_or_else(|| anyhow!("bad usage: no output file given (-o)"))?;
    if in_file_names.is_empty() {
        return Err(anyhow!("bad usage: no input files given"));
    }

    Ok(ParsedArgs {
        output_filename,
        in_file_names,
        raw,
        help_requested: false,
    })
}
