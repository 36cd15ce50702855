//! Curated fallback reference ranges.
//!
//! These apply only when a sheet's own reference-range text is missing or
//! unparseable; a parseable live range always wins. Table order is
//! significant: lookups scan top to bottom and the first match is taken, so
//! specific entries (fasting glucose, direct bilirubin) must stay above the
//! generic ones they shadow. Bounds are common adult defaults.

use std::sync::LazyLock;

use crate::pattern::TextPattern;

/// One curated fallback range.
#[derive(Debug, Clone)]
pub struct FallbackRangeRule {
    /// Pattern over the test name.
    pub test: TextPattern,
    /// Pattern over the unit context; `None` places no constraint.
    pub unit: Option<TextPattern>,
    pub min: f64,
    pub max: f64,
}

impl FallbackRangeRule {
    fn new(test: &str, unit: &str, min: f64, max: f64) -> Self {
        Self {
            test: TextPattern::new(test),
            unit: Some(TextPattern::new(unit)),
            min,
            max,
        }
    }

    /// Whether this rule applies to the given test name and unit context.
    ///
    /// The unit pattern is tried against the extracted unit token and then
    /// against the raw range text. The raw-text fallback is deliberately
    /// loose: legacy sheets often omit the unit from the range cell, and the
    /// raw text is the only place the unit still appears. A row with no unit
    /// context at all is not disqualified; there is nothing to contradict
    /// the rule.
    pub fn matches(&self, test_name: &str, unit: &str, range_text: &str) -> bool {
        if !self.test.matches(test_name) {
            return false;
        }
        match &self.unit {
            Some(pattern) => {
                (unit.is_empty() && range_text.trim().is_empty())
                    || pattern.matches(unit)
                    || pattern.matches(range_text)
            }
            None => true,
        }
    }

    /// Canonical unit spelling for display, when one can be read off the
    /// unit pattern. Multi-unit patterns yield their first alternative;
    /// patterns that are not a plain token yield `None`.
    pub fn display_unit(&self) -> Option<&str> {
        let source = self.unit.as_ref()?.as_str();
        let first = source.split('|').next().unwrap_or(source);
        let plain = !first.is_empty()
            && first
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '/' || c == '%');
        plain.then_some(first)
    }
}

/// Fallback ranges in priority order.
static REFERENCE_RANGES: LazyLock<Vec<FallbackRangeRule>> = LazyLock::new(|| {
    vec![
        // Glucose
        FallbackRangeRule::new(
            r"fasting.*glucose|fasting plasma glucose|\bfbs\b",
            r"mg/dl",
            70.0,
            110.0,
        ),
        FallbackRangeRule::new(r"random.*glucose|random plasma glucose|rbs", r"mg/dl", 70.0, 140.0),
        FallbackRangeRule::new(r"post.*prandial|postprandial|pp\b.*glucose", r"mg/dl", 70.0, 140.0),
        FallbackRangeRule::new(r"hba1c", r"%", 4.0, 5.6),
        // Electrolytes
        FallbackRangeRule::new(r"sodium|\bna\b", r"mmol/l|meq/l", 135.0, 145.0),
        FallbackRangeRule::new(r"potassium|\bk\b", r"mmol/l|meq/l", 3.5, 5.1),
        FallbackRangeRule::new(r"chloride|\bcl\b", r"mmol/l|meq/l", 98.0, 107.0),
        FallbackRangeRule::new(r"bicarbonate|hco3|total co2", r"mmol/l|meq/l", 22.0, 28.0),
        FallbackRangeRule::new(r"^calcium$|serum calcium|total calcium", r"mg/dl", 8.6, 10.2),
        FallbackRangeRule::new(r"^calcium$|serum calcium|total calcium", r"mmol/l", 2.15, 2.55),
        FallbackRangeRule::new(r"magnesium", r"mg/dl", 1.7, 2.2),
        FallbackRangeRule::new(r"phosphate|phosphorus", r"mg/dl", 2.5, 4.5),
        // Renal function
        FallbackRangeRule::new(r"urea|blood urea", r"mg/dl", 15.0, 40.0),
        FallbackRangeRule::new(r"bun", r"mg/dl", 7.0, 20.0),
        FallbackRangeRule::new(r"creatinine", r"mg/dl", 0.7, 1.3),
        FallbackRangeRule::new(r"uric acid", r"mg/dl", 3.5, 7.2),
        // Liver function
        FallbackRangeRule::new(r"bilirubin.*total|total bilirubin", r"mg/dl", 0.3, 1.2),
        FallbackRangeRule::new(r"bilirubin.*direct|direct bilirubin", r"mg/dl", 0.0, 0.3),
        FallbackRangeRule::new(r"bilirubin.*indirect|indirect bilirubin", r"mg/dl", 0.2, 0.9),
        FallbackRangeRule::new(r"\balt\b|sgpt", r"u/l|iu/l", 0.0, 40.0),
        FallbackRangeRule::new(r"\bast\b|sgot", r"u/l|iu/l", 0.0, 40.0),
        FallbackRangeRule::new(r"alkaline phosphatase|\balp\b", r"u/l|iu/l", 44.0, 147.0),
        FallbackRangeRule::new(r"gamma.*gt|ggt", r"u/l|iu/l", 0.0, 60.0),
        FallbackRangeRule::new(r"^total protein$|total proteins?", r"g/dl", 6.4, 8.3),
        FallbackRangeRule::new(r"albumin", r"g/dl", 3.5, 5.0),
        FallbackRangeRule::new(r"globulin", r"g/dl", 2.0, 3.5),
        FallbackRangeRule::new(r"a/g|albumin.*globulin", r".*", 1.0, 2.2),
        // Thyroid
        FallbackRangeRule::new(r"\btsh\b|thyroid stimulating hormone", r"u?iu/ml|miu/l", 0.4, 4.5),
        FallbackRangeRule::new(r"free t4|\bft4\b", r"ng/dl", 0.8, 1.8),
        FallbackRangeRule::new(r"free t4|\bft4\b", r"pmol/l", 10.0, 23.0),
        FallbackRangeRule::new(r"free t3|\bft3\b", r"pg/ml", 2.3, 4.2),
        FallbackRangeRule::new(r"free t3|\bft3\b", r"pmol/l", 3.5, 6.5),
        FallbackRangeRule::new(r"^t4$|total t4", r"ug/dl", 5.0, 12.0),
        FallbackRangeRule::new(r"^t3$|total t3", r"ng/dl", 80.0, 200.0),
        // Iron studies
        FallbackRangeRule::new(r"^iron$|serum iron", r"ug/dl", 60.0, 170.0),
        FallbackRangeRule::new(r"\btibc\b|total iron binding capacity", r"ug/dl", 240.0, 450.0),
        FallbackRangeRule::new(
            r"\buibc\b|unsaturated iron binding capacity",
            r"ug/dl",
            110.0,
            370.0,
        ),
        FallbackRangeRule::new(r"transferrin saturation|% ?saturation", r"%", 20.0, 50.0),
        FallbackRangeRule::new(r"transferrin", r"mg/dl", 200.0, 360.0),
        // Ferritin
        FallbackRangeRule::new(r"ferritin", r"ng/ml|ug/l", 30.0, 400.0),
        // Vitamin D
        FallbackRangeRule::new(r"vitamin d|25.*oh.*d|25-hydroxyvitamin d", r"ng/ml", 20.0, 50.0),
        // Vitamin B12
        FallbackRangeRule::new(r"vitamin b12|cobalamin", r"pg/ml", 200.0, 900.0),
    ]
});

/// The full fallback table in priority order.
pub fn reference_ranges() -> &'static [FallbackRangeRule] {
    &REFERENCE_RANGES
}

/// First fallback rule matching the test name and unit context, if any.
pub fn lookup_fallback_range(
    test_name: &str,
    unit: &str,
    range_text: &str,
) -> Option<&'static FallbackRangeRule> {
    reference_ranges()
        .iter()
        .find(|rule| rule.matches(test_name, unit, range_text))
}
