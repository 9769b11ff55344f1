//! Guarded creation of the generated source file.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::Bin2cError;

/// A writable output file that removes itself on drop unless committed.
///
/// The conversion is an all-or-nothing batch: when any stage fails, the
/// partially written file must not survive for downstream build steps to
/// pick up. Dropping the guard without calling [`OutputFile::commit`]
/// deletes the file from disk.
#[derive(Debug)]
pub struct OutputFile {
    writer: Option<BufWriter<File>>,
    path: PathBuf,
    committed: bool,
}

impl OutputFile {
    /// Create (or truncate) the file at `path` for writing.
    pub fn create(path: &str) -> Result<Self, Bin2cError> {
        let file = File::create(path).map_err(|e| Bin2cError::OutputOpen {
            path: path.to_owned(),
            source: e,
        })?;
        Ok(OutputFile {
            writer: Some(BufWriter::new(file)),
            path: PathBuf::from(path),
            committed: false,
        })
    }

    /// Flush buffered output and keep the file on disk.
    ///
    /// A flush failure leaves the guard uncommitted, so the partial file is
    /// removed when the error propagates.
    pub fn commit(mut self) -> Result<(), Bin2cError> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush().map_err(|e| Bin2cError::Write {
                path: self.path.display().to_string(),
                source: e,
            })?;
        }
        self.writer = None;
        self.committed = true;
        Ok(())
    }
}

impl Write for OutputFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.writer.as_mut() {
            Some(writer) => writer.write(buf),
            None => Err(io::Error::new(io::ErrorKind::Other, "output file closed")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for OutputFile {
    fn drop(&mut self) {
        if !self.committed {
            // Close the handle before unlinking so the removal also works on
            // platforms that refuse to delete open files.
            self.writer = None;
            let _ = fs::remove_file(&self.path);
        }
    }
}
