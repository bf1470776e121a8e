use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EtlError>;

/// Everything that can stop a pipeline run. `Fetch` is the network family,
/// the rest are data/filesystem failures.
#[derive(Error, Debug)]
pub enum EtlError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl EtlError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EtlError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, EtlError::Fetch(_))
    }
}
