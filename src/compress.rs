//! Compressor adapter over the zlib stream interface.
//!
//! The conversion pipeline treats compression as an external collaborator
//! with a known worst-case output bound: the destination buffer is sized up
//! front from [`worst_case_bound`], the stream runs once at maximum effort,
//! and anything short of a clean `StreamEnd` is an error.

use flate2::{Compress, Compression, FlushCompress, Status};

use crate::error::Bin2cError;

/// Worst-case compressed size for `len` input bytes.
///
/// zlib requires the destination to be at least 0.1% larger than the source
/// plus 12 bytes; `len/10` over-provisions that bound so a single-shot
/// compress can never run out of room, even on incompressible input.
pub fn worst_case_bound(len: usize) -> usize {
    len + len / 10 + 12
}

/// Compress `src` into `dst` at maximum effort, reusing `dst`'s allocation.
///
/// `dst` is cleared and its capacity grown to [`worst_case_bound`] before
/// the stream runs; on success it holds exactly the compressed bytes
/// (zlib-wrapped deflate). `path` names the input file in error reports.
pub fn compress_into(src: &[u8], dst: &mut Vec<u8>, path: &str) -> Result<(), Bin2cError> {
    dst.clear();
    dst.reserve(worst_case_bound(src.len()));

    let mut stream = Compress::new(Compression::best(), true);
    match stream.compress_vec(src, dst, FlushCompress::Finish) {
        Ok(Status::StreamEnd) => Ok(()),
        Ok(status) => Err(Bin2cError::Compress {
            path: path.to_owned(),
            detail: format!("unexpected stream status {:?}", status),
        }),
        Err(e) => Err(Bin2cError::Compress {
            path: path.to_owned(),
            detail: e.to_string(),
        }),
    }
}
