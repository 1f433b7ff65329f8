//! In-memory table model

/// A parsed CSV table: one header row plus zero or more data rows.
///
/// Cells stay raw strings end to end; no type coercion is performed. The
/// header is stored apart from the data rows and is never transformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column names from the first row of the file
    pub header: Vec<String>,
    /// Every row after the header, in file order
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given header
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Create a table from a header and an already-built row set
    pub fn from_parts(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Append a data row
    pub fn add_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Number of data rows (the header is not counted)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns named by the header
    pub fn column_count(&self) -> usize {
        self.header.len()
    }
}
