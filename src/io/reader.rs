//! Whole-file buffered reading.

use std::fs::File;
use std::io::{ErrorKind, Read};

use crate::error::Bin2cError;

/// Chunk size for file reads; the destination buffer grows by the same
/// fixed increment.
pub const READ_CHUNK_SIZE: usize = 16 * 1024;

/// Read the entire file at `path` into `buf`, reusing `buf`'s allocation.
///
/// The buffer is truncated to zero before the first chunk, so nothing from
/// a previous call survives, then grown in [`READ_CHUNK_SIZE`] increments
/// until end-of-file. On success `buf` holds exactly the file's bytes; its
/// capacity may be larger. The file size need not be known in advance and
/// is bounded only by available memory.
///
/// Open failures map to [`Bin2cError::InputOpen`], mid-stream read failures
/// to [`Bin2cError::Read`]; interrupted reads are retried.
pub fn read_file(path: &str, buf: &mut Vec<u8>) -> Result<(), Bin2cError> {
    let mut file = File::open(path).map_err(|e| Bin2cError::InputOpen {
        path: path.to_owned(),
        source: e,
    })?;

    buf.truncate(0);
    let mut len = 0usize;
    loop {
        // Grow so the next chunk always has room: len never exceeds the old
        // initialized size, so one increment suffices.
        if len + READ_CHUNK_SIZE > buf.len() {
            buf.resize(buf.len() + READ_CHUNK_SIZE, 0);
        }
        match file.read(&mut buf[len..len + READ_CHUNK_SIZE]) {
            Ok(0) => break,
            Ok(n) => len += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(Bin2cError::Read {
                    path: path.to_owned(),
                    source: e,
                })
            }
        }
    }
    buf.truncate(len);
    Ok(())
}
