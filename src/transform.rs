//! Row transformation pipeline
//!
//! Each enabled stage consumes the previous stage's rows and returns a new
//! set; the first stage always starts from the original data rows. The
//! header row never enters the pipeline.

use crate::config::Config;

/// A named transformation over data rows
pub trait Transform {
    /// Stage name, used in the run summary
    fn name(&self) -> &'static str;

    /// Consume the previous stage's rows and produce the next set
    fn apply(&self, rows: Vec<Vec<String>>) -> Vec<Vec<String>>;
}

/// Convert every cell of every row to its Unicode lowercase form.
///
/// Row count and order are unchanged.
pub struct Lowercase;

impl Transform for Lowercase {
    fn name(&self) -> &'static str {
        "lowercase"
    }

    fn apply(&self, rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
        rows.into_iter()
            .map(|row| row.into_iter().map(|cell| cell.to_lowercase()).collect())
            .collect()
    }
}

/// Drop zero-length rows, then stable-sort the rest by their first cell
/// in lexicographic string order.
pub struct Organize;

impl Transform for Organize {
    fn name(&self) -> &'static str {
        "organize"
    }

    fn apply(&self, rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
        let mut rows: Vec<_> = rows.into_iter().filter(|row| !row.is_empty()).collect();
        rows.sort_by(|a, b| a[0].cmp(&b[0]));
        rows
    }
}

/// Build the stage list selected by the config.
///
/// Stage order is fixed: lowercase, then organize.
pub fn pipeline(config: &Config) -> Vec<Box<dyn Transform>> {
    let mut stages: Vec<Box<dyn Transform>> = Vec::new();
    if config.lowercase {
        stages.push(Box::new(Lowercase));
    }
    if config.organize {
        stages.push(Box::new(Organize));
    }
    stages
}

/// Run rows through every stage in order.
///
/// With no stages enabled the rows pass through verbatim.
pub fn apply_all(stages: &[Box<dyn Transform>], rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    stages.iter().fold(rows, |rows, stage| stage.apply(rows))
}
