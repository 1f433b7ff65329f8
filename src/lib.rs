//! csvclean - Clean up data from CSV files
//!
//! A small library behind the `csvclean` CLI: reads a CSV table into memory,
//! runs the data rows through an ordered pipeline of transforms, and writes
//! the result back out. The header row never enters the pipeline.

pub mod config;
pub mod error;
pub mod model;
pub mod reader;
pub mod transform;
pub mod writer;

pub use config::Config;
pub use error::CleanError;
pub use model::Table;
