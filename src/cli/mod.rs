//! Command-line layer: argument parsing, usage text, display machinery.

pub mod args;
pub mod constants;
pub mod help;
