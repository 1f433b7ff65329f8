//! CSV input

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crate::error::CleanError;
use crate::model::Table;

/// Read a whole CSV file into memory.
///
/// The first record is always the header; everything after it is data.
/// Ragged rows are loaded as-is. The existence check in
/// [`Config::validate`](crate::Config::validate) races with this open, so a
/// file removed in between still maps to [`CleanError::NotFound`].
pub fn read_table(path: &Path) -> Result<Table, CleanError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CleanError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CleanError::Io(e),
    })?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let header: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
    let mut table = Table::new(header);

    for record in csv_reader.records() {
        let record = record?;
        table.add_row(record.iter().map(str::to_string).collect());
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_csv(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("in.csv");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_reads_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "Name,Age\nBob,30\nAlice,25\n");

        let table = read_table(&path).unwrap();
        assert_eq!(table.header, vec!["Name", "Age"]);
        assert_eq!(table.rows, vec![vec!["Bob", "30"], vec!["Alice", "25"]]);
    }

    #[test]
    fn test_header_only_file_has_no_data_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "Name,Age\n");

        let table = read_table(&path).unwrap();
        assert_eq!(table.header, vec!["Name", "Age"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_ragged_rows_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "A,B,C\n1,2\nx,y,z,extra\n");

        let table = read_table(&path).unwrap();
        assert_eq!(table.rows[0], vec!["1", "2"]);
        assert_eq!(table.rows[1], vec!["x", "y", "z", "extra"]);
    }

    #[test]
    fn test_quoted_fields_keep_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "Name,Note\n\"Smith, Bob\",fine\n");

        let table = read_table(&path).unwrap();
        assert_eq!(table.rows[0], vec!["Smith, Bob", "fine"]);
    }

    #[test]
    fn test_missing_file_maps_to_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.csv");

        match read_table(&path) {
            Err(CleanError::NotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
