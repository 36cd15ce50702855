//! One-shot row classification.

use labtriage_model::{TestObservation, Verdict};
use labtriage_rules::match_panic_rule;

use crate::resolve::resolve_range;
use crate::text::parse_numeric_value;

/// Build an observation from one row's raw cell text.
pub fn observe(test_name: &str, value_text: &str, range_text: &str) -> TestObservation {
    let value = parse_numeric_value(value_text);
    let resolved = resolve_range(test_name.trim(), range_text.trim());
    TestObservation {
        test_name: test_name.trim().to_string(),
        value_text: value_text.trim().to_string(),
        range_text: range_text.trim().to_string(),
        value,
        range: resolved.range,
        range_source: resolved.source,
        unit: resolved.unit,
    }
}

/// Classify one observation. Pure; a row the parsers could not understand
/// is `Unclassified`, never guessed at.
///
/// Panic thresholds are consulted before range bounds, so a value that is
/// both panic-level and out of range classifies as `Panic`.
pub fn classify(observation: &TestObservation) -> Verdict {
    let (Some(value), Some(range)) = (observation.value, observation.range) else {
        return Verdict::Unclassified;
    };
    let unit_hint = if observation.unit.is_empty() {
        observation.range_text.as_str()
    } else {
        observation.unit.as_str()
    };
    if let Some(rule) = match_panic_rule(&observation.test_name, unit_hint)
        && rule.is_breached(value)
    {
        return Verdict::Panic;
    }
    if range.contains(value) {
        Verdict::Normal
    } else {
        Verdict::AbnormalOutOfRange
    }
}
