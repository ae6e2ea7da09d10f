//! Directory scanning: invoice PDF discovery and sequential extraction.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{FakturaError, Result};
use crate::invoice::patterns::FILE_NAME;
use crate::invoice::{FieldParser, RecordParser};
use crate::models::config::{RecordPolicy, ScanConfig};
use crate::models::record::InvoiceRecord;
use crate::pdf::PdfExtractor;

/// Recursively find invoice PDFs under `root`.
///
/// Only file names matching the `<nr>-<nr>-<nr>.pdf` pattern qualify;
/// everything else is traversed but not matched. Entries within a
/// directory are visited in file-name order so runs are deterministic.
pub fn find_invoice_pdfs(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(FakturaError::Config(format!(
            "not a directory: {}",
            root.display()
        )));
    }

    let mut files = Vec::new();

    let walker = WalkDir::new(root).sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if FILE_NAME.is_match(&name) {
            debug!("Matched invoice PDF: {}", entry.path().display());
            files.push(entry.path().to_path_buf());
        }
    }

    Ok(files)
}

/// Outcome of scanning a set of invoice PDFs.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Records kept under the completeness policy, in input order.
    pub records: Vec<InvoiceRecord>,
    /// Files skipped: extraction failure or policy rejection.
    pub skipped: usize,
}

/// Extract one record per file, in order, filtering by the completeness
/// policy.
///
/// A single file's failure (corrupt PDF, empty text layer) is logged and
/// skipped; it never aborts the run. `on_file` is invoked after each
/// file so callers can drive progress display.
pub fn scan_files<F>(files: &[PathBuf], policy: RecordPolicy, mut on_file: F) -> ScanOutcome
where
    F: FnMut(&Path),
{
    let parser = FieldParser::new();
    let mut outcome = ScanOutcome::default();

    for path in files {
        match extract_record(path, &parser) {
            Ok(record) if policy.keeps(&record) => outcome.records.push(record),
            Ok(_) => {
                warn!("Skipping {}: required fields missing", path.display());
                outcome.skipped += 1;
            }
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                outcome.skipped += 1;
            }
        }
        on_file(path);
    }

    outcome
}

/// Scan the configured root directory and extract one record per
/// matching PDF, in discovery order.
pub fn scan_directory(config: &ScanConfig) -> Result<Vec<InvoiceRecord>> {
    let files = find_invoice_pdfs(&config.root)?;
    Ok(scan_files(&files, config.policy, |_| {}).records)
}

/// Extract a single record from one invoice PDF.
pub fn extract_record(path: &Path, parser: &FieldParser) -> Result<InvoiceRecord> {
    let data = fs::read(path)?;

    let mut extractor = PdfExtractor::new();
    extractor.load(&data)?;

    let text = extractor.first_page_text()?;
    debug!(
        "Extracted {} characters from first page of {}",
        text.len(),
        path.display()
    );

    Ok(parser.parse(&text, path))
}
