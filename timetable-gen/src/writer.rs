//! Tab-delimited serialization of rendered rows.
//!
//! The timetable format is a plain tab-separated stream with no field
//! quoting; cells are not expected to contain tabs or newlines and are not
//! escaped.

use std::io::{self, Write};

use crate::render::Row;

/// Write rows as tab-separated lines.
///
/// Each row becomes one line: cells joined with `\t`, terminated with
/// `\n`. A blank separator row (no cells) becomes an empty line.
pub fn write_rows<W: Write>(out: &mut W, rows: &[Row]) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{}", row.join("\t"))?;
    }
    Ok(())
}
