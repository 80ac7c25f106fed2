use crate::reference::types::ReferenceKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexiError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{kind} reference not found at '{}'", .path.display())]
    MissingReference { kind: ReferenceKind, path: PathBuf },

    #[error("{kind} reference is malformed (row {row}): {reason}")]
    Malformed {
        kind: ReferenceKind,
        row: usize,
        reason: String,
    },

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type LxResult<T> = Result<T, LexiError>;
