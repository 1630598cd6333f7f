// src/utils/error.rs
#![allow(dead_code)]
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("No ':0x' feature marker found in URL")]
    MarkerNotFound,

    #[error("No '!3d' latitude field after the feature marker")]
    LatitudeFieldNotFound,

    #[error("No '!4d' longitude field following the latitude")]
    LongitudeFieldNotFound,

    #[error("Coordinate is not a finite decimal number: {0}")]
    MalformedCoordinate(String),

    #[error("Coordinate out of range: {0}")]
    OutOfRange(String),
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
