//! Error kinds for the conversion pipeline.
//!
//! Every kind is terminal for the run: the batch is all-or-nothing, and the
//! caller removes any partially written output before exiting. Argument
//! errors are reported separately by the CLI layer (`bad usage: ...`);
//! memory exhaustion aborts via the allocator.

use std::io;

use thiserror::Error;

/// Failure of any stage of a conversion run, carrying the offending path.
#[derive(Debug, Error)]
pub enum Bin2cError {
    /// The output file could not be created.
    #[error("can't open '{path}' for writing")]
    OutputOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    /// An input file could not be opened for reading.
    #[error("can't open '{path}' for reading")]
    InputOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A read failed mid-stream, before end-of-file was reached.
    #[error("error reading '{path}'")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The compression stream errored or did not run to completion inside
    /// the worst-case-sized destination buffer.
    #[error("error compressing '{path}': {detail}")]
    Compress { path: String, detail: String },

    /// Writing generated source to the output file failed.
    #[error("error writing '{path}'")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}
