//! Scenario tests for row classification.

use labtriage_engine::{classify, extract_unit_token, observe};
use labtriage_model::{RangeSource, Verdict};
use labtriage_rules::reference_ranges;

fn verdict_of(test: &str, value: &str, range: &str) -> Verdict {
    classify(&observe(test, value, range))
}

#[test]
fn test_live_range_abnormal_high() {
    // 185 is out of range but under the glucose panic ceiling of 500.
    assert_eq!(
        verdict_of("Fasting Glucose", "185 mg/dL", "70-110 mg/dl"),
        Verdict::AbnormalOutOfRange
    );
}

#[test]
fn test_missing_range_resolves_fallback_then_panics() {
    let observation = observe("Random Glucose", "25", "");
    assert_eq!(observation.value, Some(25.0));
    assert_eq!(observation.range_source, RangeSource::Fallback);
    assert_eq!(observation.unit, "mg/dl");
    assert_eq!(classify(&observation), Verdict::Panic);
}

#[test]
fn test_in_range_is_normal() {
    assert_eq!(
        verdict_of("Potassium", "4.0", "3.5-5.1 mmol/L"),
        Verdict::Normal
    );
}

#[test]
fn test_zero_value_is_plain_abnormal_without_panic_rule() {
    // Magnesium has no panic threshold, so zero is just out of range.
    assert_eq!(
        verdict_of("Magnesium", "0", "1.7-2.2 mg/dl"),
        Verdict::AbnormalOutOfRange
    );
}

#[test]
fn test_unparseable_value_is_unclassified() {
    let observation = observe("Calcium", "See Note", "8.6-10.2 mg/dl");
    assert_eq!(observation.value, None);
    assert_eq!(classify(&observation), Verdict::Unclassified);
}

#[test]
fn test_missing_range_without_fallback_is_unclassified() {
    let observation = observe("Novel Biomarker X", "12.5", "pending");
    assert_eq!(observation.range, None);
    assert_eq!(observation.range_source, RangeSource::None);
    assert_eq!(classify(&observation), Verdict::Unclassified);
}

#[test]
fn test_panic_precedence_over_abnormal() {
    // 7.0 mmol/l is both out of range and beyond the potassium panic
    // ceiling; panic must win.
    assert_eq!(
        verdict_of("Potassium", "7.0", "3.5-5.1 mmol/L"),
        Verdict::Panic
    );
}

#[test]
fn test_panic_precedence_even_below_range_floor() {
    // Calcium 0 is below the range floor and below the panic floor of 6.0.
    assert_eq!(
        verdict_of("Calcium", "0", "8.6-10.2 mg/dl"),
        Verdict::Panic
    );
}

#[test]
fn test_values_on_panic_bounds_are_not_panic() {
    assert_eq!(
        verdict_of("Plasma Glucose", "40", "70-110 mg/dl"),
        Verdict::AbnormalOutOfRange
    );
    assert_eq!(
        verdict_of("Plasma Glucose", "500", "70-110 mg/dl"),
        Verdict::AbnormalOutOfRange
    );
    assert_eq!(
        verdict_of("Plasma Glucose", "500.1", "70-110 mg/dl"),
        Verdict::Panic
    );
}

#[test]
fn test_range_bounds_are_inclusive() {
    assert_eq!(
        verdict_of("Fasting Glucose", "70", "70-110 mg/dl"),
        Verdict::Normal
    );
    assert_eq!(
        verdict_of("Fasting Glucose", "110", "70-110 mg/dl"),
        Verdict::Normal
    );
    assert_eq!(
        verdict_of("Fasting Glucose", "110.1", "70-110 mg/dl"),
        Verdict::AbnormalOutOfRange
    );
}

#[test]
fn test_unit_mismatch_disables_panic_rule() {
    // Glucose panic thresholds are defined for mg/dl only; a sheet
    // reporting mmol/l must not trip them.
    assert_eq!(
        verdict_of("Plasma Glucose", "1.5", "3.9-6.1 mmol/l"),
        Verdict::AbnormalOutOfRange
    );
}

#[test]
fn test_observation_trims_cell_text() {
    let observation = observe("  Potassium \u{00a0}", " 4.0 ", " 3.5-5.1 mmol/L ");
    assert_eq!(observation.test_name, "Potassium");
    assert_eq!(observation.value_text, "4.0");
    assert_eq!(classify(&observation), Verdict::Normal);
}

#[test]
fn test_fallback_canonical_units_survive_tokenizing() {
    // Every canonical unit the fallback table can inject into an
    // observation must itself be a recognizable unit token. A new rule
    // whose unit spelling the tokenizer does not know fails here.
    for rule in reference_ranges() {
        if let Some(unit) = rule.display_unit() {
            assert_eq!(extract_unit_token(unit), unit);
        }
    }
}
