use std::path::PathBuf;

use thiserror::Error;

/// Failures while fetching or parsing the salary dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetching dataset: {0}")]
    Http(#[from] reqwest::Error),

    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV is missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}
