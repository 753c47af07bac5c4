//! CSV export of the history ledger.

use std::{fmt::Display, io::Write};

use chrono::{NaiveDate, TimeZone};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use thiserror::Error;

use crate::{
    entry::HistoryEntry,
    format::{format_time, numeral_text},
};

/// UTF-8 byte-order mark written before the header.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
/// Header row.
pub const HEADER: &str = "time,expression,result";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no history to export")]
    Empty,
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders `entries` as a BOM-prefixed CSV table with quoted fields.
pub fn export_csv<Tz>(entries: &[HistoryEntry], tz: &Tz) -> Result<Vec<u8>, ExportError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    write_csv(entries, tz, Vec::new())
}

/// Writes the export table into `out` and hands it back once flushed.
pub fn write_csv<W, Tz>(entries: &[HistoryEntry], tz: &Tz, mut out: W) -> Result<W, ExportError>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if entries.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut prefix = UTF8_BOM.to_vec();
    prefix.extend_from_slice(HEADER.as_bytes());
    prefix.push(b'\n');
    out.write_all(&prefix)?;

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(out);
    for entry in entries {
        writer.write_record([
            format_time(&entry.timestamp, tz),
            entry.expression.clone(),
            numeral_text(entry.result),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))
}

/// Download file name for an export made on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("calculator_history_{}.csv", date.format("%Y-%m-%d"))
}
