//! Field value normalization.

/// Collapse internal whitespace runs to single spaces and trim.
pub fn clean_text(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a number string to a canonical decimal form: spaces
/// (including non-breaking) stripped, comma replaced with a period.
///
/// No parsing happens here; unparsable values are caught at aggregation
/// time and treated as absent.
pub fn format_number(s: &str) -> String {
    s.replace([' ', '\u{00a0}'], "").replace(',', ".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  Acme   Corp  "), "Acme Corp");
        assert_eq!(clean_text("Acme AS"), "Acme AS");
        assert_eq!(clean_text("   "), "");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number("1 234,56"), "1234.56");
        assert_eq!(format_number("1234.56"), "1234.56");
        assert_eq!(format_number("1\u{00a0}234,56"), "1234.56");
    }

    #[test]
    fn test_format_number_none_passes_through() {
        let value: Option<String> = None;
        assert_eq!(value.map(|s| format_number(&s)), None);
    }
}
