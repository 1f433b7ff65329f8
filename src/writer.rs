//! CSV output

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use crate::error::CleanError;
use crate::model::Table;

/// Write the table to `path`, creating or truncating the file.
///
/// The header goes out first, unchanged, followed by the data rows. A run
/// that fails midway leaves whatever was already written; there is no
/// rollback.
pub fn write_table(path: &Path, table: &Table) -> Result<(), CleanError> {
    let file = File::create(path).map_err(|e| match e.kind() {
        io::ErrorKind::PermissionDenied => CleanError::Permission {
            path: path.to_path_buf(),
        },
        _ => CleanError::Io(e),
    })?;

    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(BufWriter::new(file));

    // An empty header only happens for empty input; emit an empty file.
    if !table.header.is_empty() {
        csv_writer.write_record(&table.header)?;
    }
    for row in &table.rows {
        csv_writer.write_record(row)?;
    }
    csv_writer.flush()?;

    Ok(())
}
