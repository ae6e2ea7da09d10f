//! Error types for the faktura-core library.

use thiserror::Error;

/// Main error type for the faktura library.
#[derive(Error, Debug)]
pub enum FakturaError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Report serialization error.
    #[error("report error: {0}")]
    Report(#[from] ReportError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to report aggregation and serialization.
#[derive(Error, Debug)]
pub enum ReportError {
    /// CSV writer failure.
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The output path could not be created or written.
    #[error("failed to write report to {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Result type for the faktura library.
pub type Result<T> = std::result::Result<T, FakturaError>;
