//! Error types for colcompare operations

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ComparerError>;

#[derive(Error, Debug)]
pub enum ComparerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unsupported workbook format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Sheet not found: index {index}")]
    SheetNotFound { index: usize },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl ComparerError {
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }

    pub fn sheet_not_found(index: usize) -> Self {
        Self::SheetNotFound { index }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }
}
