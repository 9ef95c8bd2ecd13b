//! Error types for document loading, saving, and editing.

use std::path::PathBuf;
use thiserror::Error;

use crate::mutations::MutationError;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Error reading data file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error parsing data file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Data file {path} does not contain a top-level object")]
    NotAnObject { path: PathBuf },

    #[error("Error writing data file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Document has no backing file")]
    NoBackingFile,

    #[error("Invalid node path: {0}")]
    InvalidPath(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),
}
