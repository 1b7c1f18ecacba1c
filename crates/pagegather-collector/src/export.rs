//! Delimited-text export of a labeled Collection.
//!
//! One row per item record, columns `title,raw_date,year,source_label`.
//! Fields containing the delimiter, a quote, or a line break are quoted with
//! doubled-quote escaping. An absent `year` and a missing source label both
//! serialize as an empty field.

use std::io::{self, Write};

use pagegather_core::Collection;

const HEADER: &str = "title,raw_date,year,source_label";

/// Writes `collection` as CSV, header first, one line per record.
///
/// # Errors
///
/// Returns any I/O error from the underlying writer.
pub fn write_csv<W: Write>(collection: &Collection, out: &mut W) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;

    let label = collection.source_label().unwrap_or("");
    for record in collection.records() {
        writeln!(
            out,
            "{},{},{},{}",
            escape_field(&record.title),
            escape_field(&record.raw_date),
            escape_field(record.year.as_deref().unwrap_or("")),
            escape_field(label),
        )?;
    }

    Ok(())
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn escape_field(field: &str) -> String {
    if needs_quotes(field) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
