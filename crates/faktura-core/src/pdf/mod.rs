//! PDF text extraction module.

mod extractor;

pub use extractor::PdfExtractor;
pub use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;
