//! Property tests for the free-text parsers.

use labtriage_engine::{parse_numeric_range, parse_numeric_value, resolve_range};
use labtriage_model::RangeSource;
use proptest::prelude::*;

/// Decimal literals rendered the way sheets render them.
fn decimal_text() -> impl Strategy<Value = String> {
    (-9999i32..10000, proptest::option::of(0u32..100)).prop_map(|(whole, frac)| match frac {
        Some(frac) => format!("{whole}.{frac:02}"),
        None => whole.to_string(),
    })
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("-"),
        Just(" - "),
        Just(" \u{2013} "),
        Just(" to "),
        Just(" TO "),
    ]
}

proptest! {
    #[test]
    fn prop_value_parses_with_decoration(text in decimal_text()) {
        let expected: f64 = text.parse().unwrap();
        prop_assert_eq!(parse_numeric_value(&text), Some(expected));
        prop_assert_eq!(parse_numeric_value(&format!("Result: {text} mg/dL")), Some(expected));
        prop_assert_eq!(parse_numeric_value(&format!("\u{00a0}{text}\u{00a0}")), Some(expected));
    }

    #[test]
    fn prop_value_rejects_digit_free_text(text in "[A-Za-z ,./%]{0,24}") {
        prop_assert_eq!(parse_numeric_value(&text), None);
        prop_assert_eq!(parse_numeric_range(&text), None);
    }

    #[test]
    fn prop_range_any_separator_any_order(
        a in decimal_text(),
        b in decimal_text(),
        sep in separator(),
    ) {
        let x: f64 = a.parse().unwrap();
        let y: f64 = b.parse().unwrap();
        let rendered = format!("{a}{sep}{b}");
        prop_assert_eq!(parse_numeric_range(&rendered), Some((x.min(y), x.max(y))));
    }

    #[test]
    fn prop_live_range_always_beats_fallback(
        a in decimal_text(),
        b in decimal_text(),
    ) {
        // Sodium has a curated fallback; a parseable live range must win.
        let rendered = format!("{a} - {b} mmol/L");
        let resolved = resolve_range("Serum Sodium", &rendered);
        let x: f64 = a.parse().unwrap();
        let y: f64 = b.parse().unwrap();
        prop_assert_eq!(resolved.source, RangeSource::Live);
        let range = resolved.range.unwrap();
        prop_assert_eq!(range.min, x.min(y));
        prop_assert_eq!(range.max, x.max(y));
    }
}
