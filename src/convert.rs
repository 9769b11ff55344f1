//! Conversion pipeline: sequences the reader, compressor, identifier
//! synthesizer, and emitter over every input file.
//!
//! The batch is all-or-nothing. The output file is held by an
//! [`OutputFile`] guard, so the first error at any stage unwinds through
//! `?`, the guard drops uncommitted, and no partial output survives.

use std::io;

use crate::compress::compress_into;
use crate::cli::args::ParsedArgs;
use crate::displaylevel;
use crate::emit::{write_array, write_manifest};
use crate::error::Bin2cError;
use crate::ident::{synthesize_identifier, ExportRecord};
use crate::io::output::OutputFile;
use crate::io::reader::read_file;

/// Run the whole batch described by `args`: read, compress (unless `raw`),
/// name, and emit every input, then append the export manifest and commit
/// the output file.
pub fn convert_files(args: &ParsedArgs) -> Result<(), Bin2cError> {
    let mut out = OutputFile::create(&args.output_filename)?;
    let write_err = |e: io::Error| Bin2cError::Write {
        path: args.output_filename.clone(),
        source: e,
    };

    // Both buffers are reused across iterations; the reader and the
    // compressor each truncate before filling, so lengths stay exact.
    let mut source: Vec<u8> = Vec::new();
    let mut compressed: Vec<u8> = Vec::new();
    let mut exports: Vec<ExportRecord> = Vec::with_capacity(args.in_file_names.len());

    for path in &args.in_file_names {
        read_file(path, &mut source)?;

        let payload: &[u8] = if args.raw {
            &source
        } else {
            compress_into(&source, &mut compressed, path)?;
            &compressed
        };

        let identifier = synthesize_identifier(path);
        displaylevel!(
            2,
            "{}: {} -> {} bytes, as {} \n",
            path,
            source.len(),
            payload.len(),
            identifier
        );

        write_array(&mut out, &identifier, payload).map_err(write_err)?;
        exports.push(ExportRecord { identifier });
    }

    write_manifest(&mut out, &exports).map_err(write_err)?;
    out.commit()
}
