//! Reference-range resolution: live text first, curated fallback second.

use labtriage_model::{RangeSource, ReferenceRange};
use labtriage_rules::lookup_fallback_range;
use tracing::debug;

use crate::text::{extract_unit_token, parse_numeric_range};

/// Outcome of resolving the reference range for one row.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRange {
    pub range: Option<ReferenceRange>,
    pub source: RangeSource,
    /// Unit token for display and panic matching. Taken from the range text
    /// when one is present; a fallback rule's canonical unit fills in when
    /// the text had none.
    pub unit: String,
}

/// Resolve the authoritative reference range for a test.
///
/// A parseable live range always wins, even if clinically implausible; the
/// fallback table fills gaps, it does not second-guess the source.
pub fn resolve_range(test_name: &str, range_text: &str) -> ResolvedRange {
    let unit = extract_unit_token(range_text);
    if let Some((min, max)) = parse_numeric_range(range_text) {
        return ResolvedRange {
            range: Some(ReferenceRange { min, max }),
            source: RangeSource::Live,
            unit,
        };
    }
    if let Some(rule) = lookup_fallback_range(test_name, &unit, range_text) {
        debug!(test = test_name, "live range unusable, fallback rule applied");
        let unit = if unit.is_empty() {
            rule.display_unit().unwrap_or_default().to_string()
        } else {
            unit
        };
        return ResolvedRange {
            range: Some(ReferenceRange {
                min: rule.min,
                max: rule.max,
            }),
            source: RangeSource::Fallback,
            unit,
        };
    }
    ResolvedRange {
        range: None,
        source: RangeSource::None,
        unit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_range_wins_over_fallback() {
        // The sodium fallback says 135-145; the sheet says otherwise.
        let resolved = resolve_range("Serum Sodium", "130 - 150 mmol/L");
        assert_eq!(resolved.source, RangeSource::Live);
        assert_eq!(resolved.range, Some(ReferenceRange::new(130.0, 150.0)));
        assert_eq!(resolved.unit, "mmol/l");
    }

    #[test]
    fn test_fallback_fills_unparseable_range() {
        let resolved = resolve_range("Serum Sodium", "see reference, mmol/l");
        assert_eq!(resolved.source, RangeSource::Fallback);
        assert_eq!(resolved.range, Some(ReferenceRange::new(135.0, 145.0)));
        assert_eq!(resolved.unit, "mmol/l");
    }

    #[test]
    fn test_fallback_supplies_canonical_unit_for_blank_text() {
        let resolved = resolve_range("Random Glucose", "");
        assert_eq!(resolved.source, RangeSource::Fallback);
        assert_eq!(resolved.range, Some(ReferenceRange::new(70.0, 140.0)));
        assert_eq!(resolved.unit, "mg/dl");
    }

    #[test]
    fn test_unknown_test_resolves_to_none() {
        let resolved = resolve_range("Novel Biomarker X", "pending");
        assert_eq!(resolved.source, RangeSource::None);
        assert_eq!(resolved.range, None);
        assert_eq!(resolved.unit, "");
    }
}
