//! File I/O primitives: whole-file buffered reading and guarded output
//! creation with delete-on-failure semantics.

pub mod output;
pub mod reader;

pub use output::OutputFile;
pub use reader::{read_file, READ_CHUNK_SIZE};
