//! Compiled regex patterns for Norwegian invoice extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Invoice file names look like "351708-351708-1.pdf"
    pub static ref FILE_NAME: Regex = Regex::new(
        r"(?i)^\d+-\d+-\d+\.pdf$"
    ).unwrap();

    // Invoice number ("Fakturanr.")
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"Invoice\s+(\d+)"
    ).unwrap();

    // Order number; some vendors prefix the value with "ORDER"
    pub static ref ORDER_NUMBER: Regex = Regex::new(
        r"Bestillingsnr\.:\s*(?:ORDER\s+)?([^\n]+)"
    ).unwrap();

    // Vendor name
    pub static ref VENDOR: Regex = Regex::new(
        r"Leverandør:\s*([^\n]+)"
    ).unwrap();

    // KID payment reference
    pub static ref KID_LABELED: Regex = Regex::new(
        r"KID:\s*(\d+)"
    ).unwrap();

    pub static ref KID_STANDALONE: Regex = Regex::new(
        r"KID\s+(\d+)"
    ).unwrap();

    // VAT amount ("Mva. beløp")
    pub static ref VAT_AMOUNT: Regex = Regex::new(
        r"beløp\s+(\d+[.,]\d+)"
    ).unwrap();

    pub static ref VAT_AMOUNT_FULL_LABEL: Regex = Regex::new(
        r"Mva\.\s*beløp\s+(\d+[.,]\d+)"
    ).unwrap();

    // Invoice total, usually after the currency column
    pub static ref TOTAL_WITH_CURRENCY: Regex = Regex::new(
        r"(?:NOK|Valuta)\s+Total\s*\n*(\d+[.,]\d+)"
    ).unwrap();

    pub static ref TOTAL_STANDALONE: Regex = Regex::new(
        r"Total\s*\n*(\d+[.,]\d+)"
    ).unwrap();

    // Five-column summary table header; the value row follows on the
    // next line
    pub static ref TABLE_HEADER: Regex = Regex::new(
        r"KID:\s*Mva\.\s*Mva\.Gr\.lag\s*Mva\.\s*beløp\s*Valuta\s*Total\s*\n"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_pattern() {
        assert!(FILE_NAME.is_match("123-456-7.pdf"));
        assert!(FILE_NAME.is_match("351708-351708-1.PDF"));
        assert!(!FILE_NAME.is_match("123-456.pdf"));
        assert!(!FILE_NAME.is_match("abc-456-7.pdf"));
        assert!(!FILE_NAME.is_match("123-456-7.txt"));
        assert!(!FILE_NAME.is_match("x123-456-7.pdf"));
    }

    #[test]
    fn test_total_pattern_spans_line_break() {
        let caps = TOTAL_WITH_CURRENCY.captures("NOK Total\n125,00").unwrap();
        assert_eq!(&caps[1], "125,00");
    }

    #[test]
    fn test_order_number_tolerates_order_prefix() {
        let caps = ORDER_NUMBER.captures("Bestillingsnr.: ORDER 55\n").unwrap();
        assert_eq!(&caps[1], "55");

        let caps = ORDER_NUMBER.captures("Bestillingsnr.: 55\n").unwrap();
        assert_eq!(&caps[1], "55");
    }
}
