// File: src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NameError {
    /// Raised before any resource is touched.
    #[error("variant must be 'org' or 'opti', got '{0}'")]
    InvalidVariant(String),

    #[error("dataset resource '{name}' not found at {path:?}")]
    ResourceNotFound {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    /// Nothing to sample from (every entry lacks kanji, or the index is empty).
    #[error("no samplable entries in {0}")]
    EmptyPool(&'static str),

    #[error("dataset was loaded without last names")]
    MissingLastNames,
}

pub type Result<T> = std::result::Result<T, NameError>;
