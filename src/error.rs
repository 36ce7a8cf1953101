// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassLogError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database Error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("Config error: {0}")]
    Config(String),

    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Failed to save entry: {0}")]
    BackendWrite(String),

    #[error("Worksheet '{0}' not found")]
    WorksheetNotFound(String),

    #[error("Malformed date '{value}' in row {row}")]
    MalformedDate { row: usize, value: String },

    #[error("Log sheet header mismatch: expected [{}], found [{}]", expected.join(", "), found.join(", "))]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Editor exited with a non-zero status")]
    EditorError,
}

pub type Result<T> = std::result::Result<T, ClassLogError>;
