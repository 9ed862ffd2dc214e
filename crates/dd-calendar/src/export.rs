//! CSV export of a generated calendar.

use std::fs::File;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::table::CalendarTable;

/// Errors raised while writing a table.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Serialization or CSV writer failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Failure opening or flushing the destination.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Destination path.
        path: String,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}

/// Write `table` as CSV with a header row to `writer`.
pub fn write_csv<W: io::Write>(table: &CalendarTable, writer: W) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in table.rows() {
        csv.serialize(row)?;
    }
    csv.flush().map_err(|source| ExportError::Io {
        path: "<writer>".into(),
        source,
    })?;
    Ok(())
}

/// Write `table` as CSV to the file at `path`, replacing any existing file.
pub fn write_csv_path(table: &CalendarTable, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    write_csv(table, io::BufWriter::new(file))?;
    debug!(path = %path.display(), rows = table.len(), "wrote calendar CSV");
    Ok(())
}
