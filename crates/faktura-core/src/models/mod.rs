//! Data models for invoice records, aggregates, and configuration.

pub mod record;
pub mod config;

pub use record::{GrandTotal, InvoiceRecord, VendorTotal};
pub use config::{RecordPolicy, ScanConfig};
