//! CSV export of the alert store.
//!
//! The file has a header row followed by one row per alert in store order,
//! with the columns of [`COLUMNS`](alertgen_types::COLUMNS). Unresolved
//! alerts leave `resolutation_datetime` and `conclusion` empty. Any existing
//! file at the target path is overwritten; I/O failures are returned to the
//! caller without retry.
//!
//! [`read_csv`] reads an export back, validating every row.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use alertgen_types::{Alert, AlertRecord, RecordError};
use tracing::info;

use crate::store::AlertStore;

/// Default export file name.
pub const DEFAULT_EXPORT_PATH: &str = "alerts.csv";

/// Errors raised while writing or reading a CSV export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The file could not be created, opened, or flushed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being written or read.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The CSV layer failed to encode or decode a row.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row decoded but violates the alert invariants.
    #[error("invalid record: {0}")]
    Record(#[from] RecordError),
}

/// Write the store to `path` as CSV, replacing any existing file.
///
/// Returns the number of data rows written.
pub fn export_csv(store: &AlertStore, path: &Path) -> Result<usize, ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let rows = write_csv(store, file)?;
    info!(path = %path.display(), rows, "Alerts exported to CSV");
    Ok(rows)
}

/// Write the store as CSV to any writer.
///
/// The header row is always written, even for an empty store.
pub fn write_csv<W: Write>(store: &AlertStore, writer: W) -> Result<usize, ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(alertgen_types::COLUMNS)?;
    for alert in store {
        wtr.serialize(alert)?;
    }
    wtr.flush().map_err(|source| ExportError::Io {
        path: String::from("<writer>"),
        source,
    })?;

    Ok(store.len())
}

/// Read a CSV export back into alerts, in file order.
pub fn read_csv(path: &Path) -> Result<Vec<Alert>, ExportError> {
    let file = File::open(path).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_csv_from(file)
}

/// Read CSV alerts from any reader. The first row must be the header.
pub fn read_csv_from<R: Read>(reader: R) -> Result<Vec<Alert>, ExportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut alerts = Vec::new();
    for row in rdr.deserialize::<AlertRecord>() {
        alerts.push(Alert::try_from(row?)?);
    }
    Ok(alerts)
}
