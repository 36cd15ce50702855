pub mod error;
pub mod observation;
pub mod options;
pub mod report;
pub mod verdict;

pub use error::OptionsError;
pub use observation::{RangeSource, ReferenceRange, ResultRow, ResultSheet, TestObservation};
pub use options::TriageOptions;
pub use report::{BatchStats, PanicHit, SheetStats};
pub use verdict::{RowInstruction, Verdict};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_stats_absorb_sheets() {
        let mut batch = BatchStats::default();
        batch.absorb(&SheetStats {
            rows_scanned: 10,
            rows_matched: 8,
            rows_deselected: 2,
            rows_panicked: 1,
        });
        batch.absorb(&SheetStats {
            rows_scanned: 4,
            rows_matched: 3,
            rows_deselected: 0,
            rows_panicked: 0,
        });
        assert_eq!(batch.tables_recognized, 2);
        assert_eq!(batch.rows_matched, 11);
        assert_eq!(batch.rows_deselected, 2);
        assert_eq!(batch.rows_panicked, 1);
        assert!(batch.has_panics());
    }

    #[test]
    fn reference_range_orders_bounds() {
        let range = ReferenceRange::new(110.0, 70.0);
        assert_eq!(range.min, 70.0);
        assert_eq!(range.max, 110.0);
        assert!(range.contains(70.0));
        assert!(range.contains(110.0));
        assert!(!range.contains(110.1));
    }

    #[test]
    fn options_profile_parses_with_defaults() {
        let options: TriageOptions =
            toml::from_str("deselect_zero = true").expect("parse options profile");
        assert!(options.auto_deselect_out_of_range);
        assert!(options.deselect_zero);
        assert!(!options.deselect_negative);
    }

    #[test]
    fn options_profile_rejects_unknown_keys() {
        let result = toml::from_str::<TriageOptions>("deselect_zeros = true");
        assert!(result.is_err());
    }

    #[test]
    fn observation_serializes() {
        let observation = TestObservation {
            test_name: "Serum Sodium".to_string(),
            value_text: "128".to_string(),
            range_text: "135 - 145 mmol/L".to_string(),
            value: Some(128.0),
            range: Some(ReferenceRange::new(135.0, 145.0)),
            range_source: RangeSource::Live,
            unit: "mmol/l".to_string(),
        };
        let json = serde_json::to_string(&observation).expect("serialize observation");
        let round: TestObservation = serde_json::from_str(&json).expect("deserialize observation");
        assert_eq!(round.test_name, "Serum Sodium");
        assert_eq!(round.range_source, RangeSource::Live);
        assert_eq!(round.range, Some(ReferenceRange::new(135.0, 145.0)));
    }

    #[test]
    fn instruction_tags_serialize() {
        let deselect = RowInstruction::Deselect {
            source: RangeSource::Fallback,
        };
        let json = serde_json::to_string(&deselect).expect("serialize instruction");
        assert_eq!(json, r#"{"action":"deselect","source":"fallback"}"#);
        assert!(deselect.is_deselect());
        assert!(!RowInstruction::HighlightPanic.is_deselect());
    }
}
