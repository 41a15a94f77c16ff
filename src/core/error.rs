

use std::path::PathBuf;

use thiserror::Error;

use crate::extraction::ExtractionError;


#[derive(Error, Debug)]
pub enum ConceptMapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConceptMapError {
    pub fn malformed_row(row: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            row,
            reason: reason.into(),
        }
    }
}


pub type Result<T> = std::result::Result<T, ConceptMapError>;
