//! Error taxonomy for csvclean

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the user, one variant per failure kind.
///
/// Every variant is fatal to the run: it is printed once and the process
/// exits with the code from [`CleanError::exit_code`]. Nothing is retried.
#[derive(Debug, Error)]
pub enum CleanError {
    /// Input or output path does not end in `.csv`
    #[error("Input and output files must be in CSV format.")]
    Format,

    /// Input path missing at check time, or gone by the time it is opened
    #[error("Input file '{}' not found.", .path.display())]
    NotFound { path: PathBuf },

    /// Output path cannot be written due to access rights
    #[error("Permission denied to write to '{}'.", .path.display())]
    Permission { path: PathBuf },

    /// Malformed CSV, or a mid-stream read/write failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Any other I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CleanError {
    /// Process exit code for this error kind.
    ///
    /// The original tool exited 0 on every path; here each kind gets a
    /// distinct non-zero code so scripts can tell failures apart.
    pub fn exit_code(&self) -> u8 {
        match self {
            CleanError::Format => 2,
            CleanError::NotFound { .. } => 3,
            CleanError::Permission { .. } => 4,
            CleanError::Csv(_) | CleanError::Io(_) => 1,
        }
    }
}
