//! Panic thresholds for life-threatening analytes.
//!
//! Kept separate from the fallback range table: these encode the hospital
//! critical-value policy, not expected ranges, and a row that breaches one
//! must lock the batch save action instead of being deselected. Values
//! exactly on a bound are not panic-level.

use std::sync::LazyLock;

use crate::pattern::TextPattern;

/// One panic-threshold rule.
#[derive(Debug, Clone)]
pub struct PanicRule {
    /// Pattern over the test name.
    pub test: TextPattern,
    /// Pattern over the unit hint; `None` places no constraint.
    pub unit: Option<TextPattern>,
    /// Values strictly below this bound are panic-level.
    pub low: Option<f64>,
    /// Values strictly above this bound are panic-level.
    pub high: Option<f64>,
}

impl PanicRule {
    fn new(test: &str, unit: &str, low: f64, high: f64) -> Self {
        Self {
            test: TextPattern::new(test),
            unit: Some(TextPattern::new(unit)),
            low: Some(low),
            high: Some(high),
        }
    }

    /// Whether this rule applies to the given test name and unit hint.
    ///
    /// An empty hint does not disqualify the rule; the unit pattern
    /// constrains only when there is unit evidence to test.
    pub fn applies_to(&self, test_name: &str, unit_hint: &str) -> bool {
        self.test.matches(test_name)
            && self
                .unit
                .as_ref()
                .map(|pattern| unit_hint.trim().is_empty() || pattern.matches(unit_hint))
                .unwrap_or(true)
    }

    /// Whether `value` breaches a bound. Missing bounds never trip.
    pub fn is_breached(&self, value: f64) -> bool {
        if let Some(low) = self.low
            && value < low
        {
            return true;
        }
        if let Some(high) = self.high
            && value > high
        {
            return true;
        }
        false
    }
}

/// Critical-value policy, scanned in order.
static PANIC_THRESHOLDS: LazyLock<Vec<PanicRule>> = LazyLock::new(|| {
    vec![
        PanicRule::new(r"glucose", r"mg/dl", 40.0, 500.0),
        PanicRule::new(r"sodium|na\b", r"mmol/l|meq/l", 120.0, 160.0),
        PanicRule::new(r"potassium|k\b", r"mmol/l|meq/l", 2.5, 6.5),
        PanicRule::new(r"calcium", r"mg/dl", 6.0, 13.0),
    ]
});

/// The full panic table in priority order.
pub fn panic_thresholds() -> &'static [PanicRule] {
    &PANIC_THRESHOLDS
}

/// First panic rule applying to the test name and unit hint, if any.
pub fn match_panic_rule(test_name: &str, unit_hint: &str) -> Option<&'static PanicRule> {
    panic_thresholds()
        .iter()
        .find(|rule| rule.applies_to(test_name, unit_hint))
}
