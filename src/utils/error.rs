// src/utils/error.rs
#![allow(dead_code)]
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Could not read document {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse PDF {name}: {reason}")]
    Pdf { name: String, reason: String },

    // pdf-extract panics on some malformed inputs instead of returning an error
    #[error("PDF backend failed on {name}: {reason}")]
    Backend { name: String, reason: String },
}

#[derive(Error, Debug, PartialEq)]
pub enum ScoreError {
    #[error("Similarity input is degenerate (empty vocabulary or all-zero vector)")]
    DegenerateSimilarityInput,

    #[error("Scoring criteria list '{0}' is empty")]
    EmptyCriteria(&'static str),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Scoring failed: {0}")]
    Scoring(#[from] ScoreError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
