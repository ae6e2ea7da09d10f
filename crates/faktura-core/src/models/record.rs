//! Invoice record and aggregate models.

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fields extracted from a single invoice PDF.
///
/// All fields are kept as strings until aggregation; numeric parsing
/// happens there, with unparsable values treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Invoice number ("Fakturanr.").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    /// Order number ("Bestillingsnr.").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,

    /// Vendor name ("Leverandør").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// KID payment reference. Numeric-looking but kept as a string to
    /// preserve leading digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,

    /// VAT base amount ("Mva.Gr.lag"), canonical decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_base: Option<String>,

    /// VAT amount ("Mva. beløp"), canonical decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_amount: Option<String>,

    /// Invoice total, canonical decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,

    /// Path of the source PDF. Diagnostics only, not part of the report.
    #[serde(skip)]
    pub source_file: PathBuf,
}

impl InvoiceRecord {
    /// Create an empty record for the given source file.
    pub fn new(source_file: impl Into<PathBuf>) -> Self {
        Self {
            source_file: source_file.into(),
            ..Self::default()
        }
    }

    /// True if at least one extracted field is present.
    pub fn has_any_field(&self) -> bool {
        self.invoice_number.is_some()
            || self.order_number.is_some()
            || self.vendor.is_some()
            || self.kid.is_some()
            || self.vat_base.is_some()
            || self.vat_amount.is_some()
            || self.total.is_some()
    }

    /// True if all seven extracted fields are present.
    pub fn is_complete(&self) -> bool {
        self.invoice_number.is_some()
            && self.order_number.is_some()
            && self.vendor.is_some()
            && self.kid.is_some()
            && self.vat_base.is_some()
            && self.vat_amount.is_some()
            && self.total.is_some()
    }

    /// Parse the VAT base as a decimal, `None` if absent or unparsable.
    pub fn vat_base_decimal(&self) -> Option<Decimal> {
        parse_decimal(self.vat_base.as_deref())
    }

    /// Parse the VAT amount as a decimal, `None` if absent or unparsable.
    pub fn vat_amount_decimal(&self) -> Option<Decimal> {
        parse_decimal(self.vat_amount.as_deref())
    }

    /// Parse the total as a decimal, `None` if absent or unparsable.
    pub fn total_decimal(&self) -> Option<Decimal> {
        parse_decimal(self.total.as_deref())
    }
}

fn parse_decimal(s: Option<&str>) -> Option<Decimal> {
    s.and_then(|v| Decimal::from_str(v.trim()).ok())
}

/// Summed amounts for one vendor group.
///
/// Each sum is rounded to two decimal places after summation, not per
/// record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorTotal {
    /// Vendor name; records without a vendor form their own group.
    pub vendor: Option<String>,

    /// Sum of VAT base amounts.
    pub vat_base: Decimal,

    /// Sum of VAT amounts.
    pub vat_amount: Decimal,

    /// Sum of invoice totals.
    pub total: Decimal,
}

/// Summed amounts over all records in a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrandTotal {
    /// Sum of VAT base amounts.
    pub vat_base: Decimal,

    /// Sum of VAT amounts.
    pub vat_amount: Decimal,

    /// Sum of invoice totals.
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_record_has_no_fields() {
        let record = InvoiceRecord::new("a.pdf");
        assert!(!record.has_any_field());
        assert!(!record.is_complete());
    }

    #[test]
    fn test_partial_record() {
        let record = InvoiceRecord {
            kid: Some("42".to_string()),
            ..InvoiceRecord::new("a.pdf")
        };
        assert!(record.has_any_field());
        assert!(!record.is_complete());
    }

    #[test]
    fn test_decimal_parsing() {
        let record = InvoiceRecord {
            total: Some("125.00".to_string()),
            vat_amount: Some("not a number".to_string()),
            ..InvoiceRecord::new("a.pdf")
        };
        assert_eq!(record.total_decimal(), Some(Decimal::new(12500, 2)));
        assert_eq!(record.vat_amount_decimal(), None);
        assert_eq!(record.vat_base_decimal(), None);
    }
}
