//! Core library for Norwegian invoice PDF scanning.
//!
//! This crate provides:
//! - PDF first-page text extraction (lopdf + pdf-extract)
//! - Invoice field extraction (Fakturanr., Bestillingsnr., Leverandør, KID, VAT amounts)
//! - Record normalization and per-vendor / grand-total aggregation
//! - CSV report serialization

pub mod error;
pub mod models;
pub mod pdf;
pub mod invoice;
pub mod scan;
pub mod report;

pub use error::{FakturaError, Result};
pub use models::record::{GrandTotal, InvoiceRecord, VendorTotal};
pub use models::config::{RecordPolicy, ScanConfig};
pub use pdf::{PdfExtractor, PdfError};
pub use invoice::{FieldParser, RecordParser};
pub use scan::{extract_record, find_invoice_pdfs, scan_directory, scan_files, ScanOutcome};
pub use report::{build_summary, write_report, ReportSummary};
