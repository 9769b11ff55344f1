//! C source emission: array literals and the export manifest.
//!
//! The byte layout is a compatibility surface: generated files get diffed
//! and occasionally parsed by downstream build steps, so the column layout
//! is reproduced exactly: eight two-digit hex values per line, two-space
//! line indent, no trailing comma after the final value.

use std::io::{self, Write};

use crate::ident::ExportRecord;

/// Values per line in the generated array literal.
const VALUES_PER_LINE: usize = 8;

/// Write `data` as a C array literal declared under `identifier`.
///
/// An empty buffer produces the declaration header immediately followed by
/// the terminator, a valid minimal array.
pub fn write_array<W: Write>(out: &mut W, identifier: &str, data: &[u8]) -> io::Result<()> {
    writeln!(out, "static const unsigned char {}[] = {{", identifier)?;
    if data.is_empty() {
        write!(out, "}};\n\n")?;
        return Ok(());
    }

    let last = data.len() - 1;
    for (i, byte) in data.iter().enumerate() {
        if i % VALUES_PER_LINE == 0 {
            write!(out, "  ")?;
        }
        if i == last {
            write!(out, "0x{:02x}\n}};\n\n", byte)?;
        } else if i % VALUES_PER_LINE == VALUES_PER_LINE - 1 {
            writeln!(out, "0x{:02x},", byte)?;
        } else {
            write!(out, "0x{:02x}, ", byte)?;
        }
    }
    Ok(())
}

/// Write the trailing manifest comment block listing every synthesized
/// identifier, one per line, in the order the files were processed.
pub fn write_manifest<W: Write>(out: &mut W, exports: &[ExportRecord]) -> io::Result<()> {
    writeln!(out, "/*********************************************")?;
    writeln!(out, "Export:")?;
    for record in exports {
        writeln!(out, "\t{}", record.identifier)?;
    }
    writeln!(out, "**********************************************/")?;
    Ok(())
}
