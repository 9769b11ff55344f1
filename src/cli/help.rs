//! Usage text for the `bin2c` command line.

/// Print brief usage to stderr.
///
/// Shown on `-h`/`-?` and on any argument error; the process exits 1 in both
/// cases, so a build script never mistakes a help invocation for a
/// successful conversion.
pub fn print_usage(program: &str) {
    eprintln!();
    eprintln!("Usage: {} [options] -o <output-file> file1 [file2 [file3 [...]]]", program);
    eprintln!();
    eprintln!("    Example: {} -o data.c a.bmp b.jpg c.png", program);
    eprintln!();
    eprintln!("Options: ");
    eprintln!(" -o FILE : write the generated C source to FILE (required) ");
    eprintln!(" -r      : store file contents raw, without compression ");
    eprintln!(" -v      : increase verbosity ");
    eprintln!(" -q      : decrease verbosity ");
    eprintln!(" -h / -? : display this help and exit ");
}
