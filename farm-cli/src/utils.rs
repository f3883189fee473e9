use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Normalizes numeric input: trims whitespace and removes commas
/// (thousands separator, in either grouping convention).
pub fn normalize_number_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into an optional [`Decimal`].
///
/// Handles comma as thousands separator. Returns `None` for empty or
/// whitespace-only input, or when parsing fails (logs a warning on parse
/// failure).
pub fn parse_optional_decimal(s: &str) -> Option<Decimal> {
    let normalized = normalize_number_input(s);
    if normalized.is_empty() {
        None
    } else {
        normalized.parse().map_or_else(
            |e| {
                tracing::warn!(input = %s, "invalid decimal: {}", e);
                None
            },
            Some,
        )
    }
}

/// Parses an ISO `YYYY-MM-DD` date, treating empty input as `None` and
/// logging a warning on anything unparseable.
pub fn parse_optional_date(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_or_else(
            |e| {
                tracing::warn!(input = %s, "invalid date: {}", e);
                None
            },
            Some,
        )
    }
}

/// Empty input becomes `None`; anything else is kept verbatim.
pub fn optional_text(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn normalize_strips_commas_and_whitespace() {
        assert_eq!(normalize_number_input(" 1,23,456.78 "), "123456.78");
    }

    #[test]
    fn decimal_parsing_handles_grouping_and_blanks() {
        assert_eq!(parse_optional_decimal("1,234.56"), Some(dec!(1234.56)));
        assert_eq!(parse_optional_decimal("   "), None);
        assert_eq!(parse_optional_decimal("abc"), None);
    }

    #[test]
    fn date_parsing_is_iso_only() {
        assert_eq!(
            parse_optional_date("2024-12-01"),
            NaiveDate::from_ymd_opt(2024, 12, 1)
        );
        assert_eq!(parse_optional_date(""), None);
        assert_eq!(parse_optional_date("01/12/2024"), None);
    }

    #[test]
    fn optional_text_trims_and_drops_blanks() {
        assert_eq!(optional_text("  hello "), Some("hello".to_string()));
        assert_eq!(optional_text("   "), None);
    }
}
