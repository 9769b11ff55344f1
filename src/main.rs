//! Binary entry point for the `bin2c` command-line tool.
//!
//! Parses arguments, runs the conversion batch, and maps the outcome to a
//! process exit code: 0 on full success, 1 on any failure (bad arguments,
//! help request, or any pipeline error). Cleanup of a partially written
//! output file is handled by the guard in [`bin2c::io::output`]; there is
//! no explicit unwind path here.

use bin2c::cli::args::parse_args;
use bin2c::cli::constants::PROGRAM_NAME;
use bin2c::cli::help::print_usage;
use bin2c::convert::convert_files;
use bin2c::displaylevel;

fn run() -> i32 {
    let exe_name = std::env::args().next().unwrap_or_else(|| PROGRAM_NAME.to_owned());

    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{}: {}", PROGRAM_NAME, e);
            print_usage(&exe_name);
            return 1;
        }
    };

    if args.help_requested {
        print_usage(&exe_name);
        return 1;
    }

    displaylevel!(3, "*** {} v{} ***\n", PROGRAM_NAME, bin2c::BIN2C_VERSION_STRING);

    match convert_files(&args) {
        Ok(()) => 0,
        Err(e) => {
            displaylevel!(1, "{}: {:#}\n", PROGRAM_NAME, anyhow::Error::from(e));
            1
        }
    }
}

fn main() {
    std::process::exit(run());
}
