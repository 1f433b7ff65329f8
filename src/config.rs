//! Configuration handling for csvclean

use std::path::{Path, PathBuf};

use crate::error::CleanError;

/// Configuration for a cleanup run
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to the source CSV
    pub input_file: PathBuf,
    /// Path to the destination CSV
    pub output_file: PathBuf,
    /// Convert every data cell to lowercase
    pub lowercase: bool,
    /// Drop empty rows and sort data rows by the first column
    pub organize: bool,
}

impl Config {
    /// Create a new Config with file paths
    pub fn new(input_file: PathBuf, output_file: PathBuf) -> Self {
        Self {
            input_file,
            output_file,
            ..Default::default()
        }
    }

    /// Enable the lowercase transform
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Enable the organize transform
    pub fn with_organize(mut self, organize: bool) -> Self {
        self.organize = organize;
        self
    }

    /// Validate the configured paths before any file is opened.
    ///
    /// Checks run in a fixed order: both paths must carry a `.csv` suffix
    /// (case-sensitive, checked without touching the filesystem), then the
    /// input file must exist. The first failing check wins.
    pub fn validate(&self) -> Result<(), CleanError> {
        if !has_csv_suffix(&self.input_file) || !has_csv_suffix(&self.output_file) {
            return Err(CleanError::Format);
        }
        if !self.input_file.exists() {
            return Err(CleanError::NotFound {
                path: self.input_file.clone(),
            });
        }
        Ok(())
    }
}

/// Case-sensitive `.csv` suffix match on the path string
fn has_csv_suffix(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".csv")
}
