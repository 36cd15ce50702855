//! Free-text parsers for result values, reference ranges, and unit tokens.
//!
//! Sheet text is messy: non-breaking spaces, stray commas, units appended to
//! numbers, ranges written with a hyphen, an en-dash, or the word "to".
//! These parsers extract what they can and return `None` rather than guess.

use std::sync::LazyLock;

use regex::Regex;

/// First signed decimal number anywhere in the text.
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+(\.\d+)?").expect("invalid number regex"));

/// Two numbers joined by a hyphen, an en-dash, or "to".
static RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(-?\d+(\.\d+)?)\s*(?:-|\u{2013}|to)\s*(-?\d+(\.\d+)?)")
        .expect("invalid range regex")
});

/// Recognized unit spellings. Leftmost match wins, so a longer spelling
/// (miu/l) beats the shorter tokens it contains (iu/l, u/l), which can only
/// start later in the text.
static UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mg/dl|mmol/l|meq/l|u/l|iu/l|ng/ml|pg/ml|ug/dl|ug/l|g/dl|miu/l|uiu/ml|pmol/l|ng/dl|%")
        .expect("invalid unit regex")
});

/// Replace non-breaking spaces and commas with plain spaces and trim.
fn normalize(text: &str) -> String {
    text.replace(['\u{00a0}', ','], " ").trim().to_string()
}

/// Extract the first signed decimal number from free text.
///
/// `"Result: 5.4 mmol/L"` parses as `5.4`; text with no digits yields
/// `None`.
pub fn parse_numeric_value(text: &str) -> Option<f64> {
    let normalized = normalize(text);
    let matched = NUMBER.find(&normalized)?;
    matched.as_str().parse().ok()
}

/// Extract a numeric interval from free text, ordered `(min, max)`.
///
/// Accepts `"70-110"`, the en-dash spelling, and `"70 to 110"`; bounds
/// given in reverse order are swapped. Returns `None` when no interval is
/// found or a bound overflows to a non-finite value.
pub fn parse_numeric_range(text: &str) -> Option<(f64, f64)> {
    let normalized = normalize(text);
    let captures = RANGE.captures(&normalized)?;
    let a: f64 = captures.get(1)?.as_str().parse().ok()?;
    let b: f64 = captures.get(3)?.as_str().parse().ok()?;
    if !a.is_finite() || !b.is_finite() {
        return None;
    }
    Some((a.min(b), a.max(b)))
}

/// First recognized unit token in the text, lower-cased; empty when none is
/// present.
pub fn extract_unit_token(text: &str) -> String {
    UNIT.find(&text.to_lowercase())
        .map(|found| found.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_with_unit_suffix() {
        assert_eq!(parse_numeric_value("185 mg/dL"), Some(185.0));
        assert_eq!(parse_numeric_value("Result: 5.4 mmol/L"), Some(5.4));
    }

    #[test]
    fn test_parse_value_negative_and_zero() {
        assert_eq!(parse_numeric_value("-2.5"), Some(-2.5));
        assert_eq!(parse_numeric_value("0"), Some(0.0));
    }

    #[test]
    fn test_parse_value_normalizes_whitespace() {
        assert_eq!(parse_numeric_value("\u{00a0}12.3\u{00a0}"), Some(12.3));
        assert_eq!(parse_numeric_value(" , 7 "), Some(7.0));
    }

    #[test]
    fn test_parse_value_rejects_non_numeric() {
        assert_eq!(parse_numeric_value("See Note"), None);
        assert_eq!(parse_numeric_value(""), None);
    }

    #[test]
    fn test_parse_range_separators() {
        assert_eq!(parse_numeric_range("70-110"), Some((70.0, 110.0)));
        assert_eq!(parse_numeric_range("70 \u{2013} 110"), Some((70.0, 110.0)));
        assert_eq!(parse_numeric_range("70 to 110 mg/dl"), Some((70.0, 110.0)));
        assert_eq!(parse_numeric_range("70 TO 110"), Some((70.0, 110.0)));
    }

    #[test]
    fn test_parse_range_orders_bounds() {
        assert_eq!(parse_numeric_range("110-70"), Some((70.0, 110.0)));
    }

    #[test]
    fn test_parse_range_negative_bounds() {
        assert_eq!(parse_numeric_range("-10 - -5"), Some((-10.0, -5.0)));
    }

    #[test]
    fn test_parse_range_rejects_single_number() {
        assert_eq!(parse_numeric_range("110"), None);
        assert_eq!(parse_numeric_range("up to normal"), None);
        assert_eq!(parse_numeric_range(""), None);
    }

    #[test]
    fn test_unit_token_first_match_wins() {
        assert_eq!(extract_unit_token("3.5-5.1 mmol/L"), "mmol/l");
        assert_eq!(extract_unit_token("70-110 mg/dl or 3.9-6.1 mmol/l"), "mg/dl");
    }

    #[test]
    fn test_unit_token_overlapping_spellings() {
        assert_eq!(extract_unit_token("0.4-4.5 mIU/L"), "miu/l");
        assert_eq!(extract_unit_token("0.4-4.5 uIU/mL"), "uiu/ml");
        assert_eq!(extract_unit_token("10-40 IU/L"), "iu/l");
        assert_eq!(extract_unit_token("10-40 U/L"), "u/l");
    }

    #[test]
    fn test_unit_token_percent() {
        assert_eq!(extract_unit_token("4.0 - 5.6 %"), "%");
    }

    #[test]
    fn test_unit_token_absent() {
        assert_eq!(extract_unit_token("70-110"), "");
        assert_eq!(extract_unit_token(""), "");
    }
}
