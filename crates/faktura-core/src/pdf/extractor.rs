//! First-page text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{PdfError, Result};

/// PDF text extractor.
///
/// lopdf handles document structure (page count, decryption); the text
/// layer itself is pulled with pdf-extract.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Load a PDF from bytes.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf_extract needs the decrypted bytes
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    /// Get the number of pages in the loaded PDF.
    pub fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    /// Extract text from the entire PDF.
    pub fn extract_text(&self) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        Ok(text)
    }

    /// Extract the first page's text.
    ///
    /// pdf-extract only exposes the whole document, so the first page's
    /// share is approximated as a line-proportional split. Returns an
    /// empty string when the text layer is empty.
    pub fn first_page_text(&self) -> Result<String> {
        let full_text = self.extract_text()?;
        Ok(first_page_slice(&full_text, self.page_count() as usize))
    }
}

/// Line-proportional first-page split. A document whose text layer has
/// fewer lines than pages keeps at least one line instead of truncating
/// to nothing.
fn first_page_slice(text: &str, page_count: usize) -> String {
    if page_count <= 1 {
        return text.to_string();
    }

    let lines: Vec<&str> = text.lines().collect();
    let lines_per_page = (lines.len() / page_count).max(1);
    let end = lines_per_page.min(lines.len());

    lines[..end].join("\n")
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_load_garbage_fails() {
        let mut extractor = PdfExtractor::new();
        let result = extractor.load(b"this is not a pdf");
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_first_page_slice_splits_proportionally() {
        assert_eq!(first_page_slice("a\nb\nc\nd", 2), "a\nb");
        assert_eq!(first_page_slice("a\nb\nc", 1), "a\nb\nc");
    }

    #[test]
    fn test_first_page_slice_keeps_text_shorter_than_page_count() {
        assert_eq!(first_page_slice("KID: 42", 3), "KID: 42");
        assert_eq!(first_page_slice("a\nb", 4), "a");
        assert_eq!(first_page_slice("", 2), "");
    }
}
