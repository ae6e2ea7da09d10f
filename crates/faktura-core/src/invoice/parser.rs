//! Invoice field parser: regex cascade plus table-row reconciliation.

use std::path::Path;

use tracing::debug;

use crate::models::record::InvoiceRecord;

use super::normalize::{clean_text, format_number};
use super::patterns::*;

/// Trait for parsing a record out of page text.
pub trait RecordParser {
    /// Parse an invoice record from first-page text.
    fn parse(&self, text: &str, source: &Path) -> InvoiceRecord;
}

/// Rule-based field parser.
///
/// Each field is tried with a primary pattern and, where one exists, a
/// fallback (first match only). A five-column summary table row, when
/// present, overrides kid, VAT base, VAT amount, and total: free-text
/// fields vary too much in layout for a positional parse, but the table
/// row is the most reliable source for the tabular ones. The VAT base
/// has no standalone pattern and is populated only through the table.
pub struct FieldParser;

impl FieldParser {
    /// Create a new field parser.
    pub fn new() -> Self {
        Self
    }

    fn extract_invoice_number(&self, text: &str) -> Option<String> {
        INVOICE_NUMBER
            .captures(text)
            .map(|caps| clean_text(&caps[1]))
    }

    fn extract_order_number(&self, text: &str) -> Option<String> {
        ORDER_NUMBER.captures(text).map(|caps| clean_text(&caps[1]))
    }

    fn extract_vendor(&self, text: &str) -> Option<String> {
        VENDOR.captures(text).map(|caps| clean_text(&caps[1]))
    }

    fn extract_kid(&self, text: &str) -> Option<String> {
        if let Some(caps) = KID_LABELED.captures(text) {
            return Some(caps[1].trim().to_string());
        }

        KID_STANDALONE
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
    }

    fn extract_vat_amount(&self, text: &str) -> Option<String> {
        if let Some(caps) = VAT_AMOUNT.captures(text) {
            return Some(format_number(&caps[1]));
        }

        VAT_AMOUNT_FULL_LABEL
            .captures(text)
            .map(|caps| format_number(&caps[1]))
    }

    fn extract_total(&self, text: &str) -> Option<String> {
        if let Some(caps) = TOTAL_WITH_CURRENCY.captures(text) {
            return Some(format_number(&caps[1]));
        }

        TOTAL_STANDALONE
            .captures(text)
            .map(|caps| format_number(&caps[1]))
    }

    /// Reconcile against the five-column summary table, if present.
    ///
    /// The first line after the header (up to 100 characters) is split on
    /// whitespace; with at least six tokens the row layout is
    /// `KID rate VAT-base VAT-amount currency total` and those positional
    /// values win over the standalone patterns.
    fn apply_table_row(&self, text: &str, record: &mut InvoiceRecord) {
        let Some(header) = TABLE_HEADER.find(text) else {
            debug!("No summary table header found, keeping standalone matches");
            return;
        };

        let values_line: String = text[header.end()..]
            .chars()
            .take(100)
            .take_while(|c| *c != '\n')
            .collect();

        let values: Vec<&str> = values_line.split_whitespace().collect();
        if values.len() < 6 {
            debug!(
                "Summary table row has {} tokens, expected at least 6",
                values.len()
            );
            return;
        }

        debug!("Summary table row: {:?}", values);

        record.kid = Some(values[0].to_string());
        record.vat_base = Some(format_number(values[2]));
        record.vat_amount = Some(format_number(values[3]));
        record.total = Some(format_number(values[5]));
    }
}

impl Default for FieldParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordParser for FieldParser {
    fn parse(&self, text: &str, source: &Path) -> InvoiceRecord {
        let mut record = InvoiceRecord::new(source);

        record.invoice_number = self.extract_invoice_number(text);
        record.order_number = self.extract_order_number(text);
        record.vendor = self.extract_vendor(text);
        record.kid = self.extract_kid(text);
        record.vat_amount = self.extract_vat_amount(text);
        record.total = self.extract_total(text);

        // Table values are authoritative for the tabular fields
        self.apply_table_row(text, &mut record);

        debug!(
            file = %source.display(),
            invoice_number = ?record.invoice_number,
            order_number = ?record.order_number,
            vendor = ?record.vendor,
            kid = ?record.kid,
            vat_base = ?record.vat_base,
            vat_amount = ?record.vat_amount,
            total = ?record.total,
            "Extracted fields"
        );

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> InvoiceRecord {
        FieldParser::new().parse(text, Path::new("test.pdf"))
    }

    #[test]
    fn test_parse_full_invoice_page() {
        let text = "Invoice 100\nBestillingsnr.: ORDER 55\nLeverandør: Acme AS\nKID: 42\nKID: Mva. Mva.Gr.lag Mva. beløp Valuta Total\n42 0.00 100.00 25.00 NOK 125.00\n";

        let record = parse(text);

        assert_eq!(record.invoice_number.as_deref(), Some("100"));
        assert_eq!(record.order_number.as_deref(), Some("55"));
        assert_eq!(record.vendor.as_deref(), Some("Acme AS"));
        assert_eq!(record.kid.as_deref(), Some("42"));
        assert_eq!(record.vat_base.as_deref(), Some("100.00"));
        assert_eq!(record.vat_amount.as_deref(), Some("25.00"));
        assert_eq!(record.total.as_deref(), Some("125.00"));
    }

    #[test]
    fn test_table_row_overrides_standalone_kid() {
        let text = "KID: 9999\nKID: Mva. Mva.Gr.lag Mva. beløp Valuta Total\n42 0.00 100.00 25.00 NOK 125.00\n";

        let record = parse(text);
        assert_eq!(record.kid.as_deref(), Some("42"));
    }

    #[test]
    fn test_vat_base_requires_table_row() {
        let text = "Invoice 100\nKID: 42\nMva. beløp 25,00\nTotal\n125,00\n";

        let record = parse(text);
        assert_eq!(record.vat_base, None);
        assert_eq!(record.vat_amount.as_deref(), Some("25.00"));
        assert_eq!(record.total.as_deref(), Some("125.00"));
    }

    #[test]
    fn test_short_table_row_keeps_standalone_matches() {
        let text = "KID: 9999\nKID: Mva. Mva.Gr.lag Mva. beløp Valuta Total\n42 0.00\n";

        let record = parse(text);
        assert_eq!(record.kid.as_deref(), Some("9999"));
        assert_eq!(record.vat_base, None);
    }

    #[test]
    fn test_kid_fallback_without_colon() {
        let record = parse("KID 314159\n");
        assert_eq!(record.kid.as_deref(), Some("314159"));
    }

    #[test]
    fn test_total_with_currency_preferred() {
        let text = "Total\n999,00\nNOK Total\n125,00\n";

        let record = parse(text);
        assert_eq!(record.total.as_deref(), Some("125.00"));
    }

    #[test]
    fn test_empty_text_yields_empty_record() {
        let record = parse("");
        assert!(!record.has_any_field());
    }

    #[test]
    fn test_vendor_whitespace_is_collapsed() {
        let record = parse("Leverandør:   Acme   Corp  \n");
        assert_eq!(record.vendor.as_deref(), Some("Acme Corp"));
    }
}
