use serde::{Deserialize, Serialize};

/// Inclusive reference interval for a test result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRange {
    pub min: f64,
    pub max: f64,
}

impl ReferenceRange {
    /// Build a range from two bounds in either order.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Both endpoints count as in range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Which path produced the resolved reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeSource {
    /// Parsed from the sheet's own reference-range text.
    Live,
    /// Supplied by the curated fallback table.
    Fallback,
    /// Neither source produced a range.
    None,
}

impl RangeSource {
    pub fn label(&self) -> &'static str {
        match self {
            RangeSource::Live => "live",
            RangeSource::Fallback => "fallback",
            RangeSource::None => "none",
        }
    }
}

/// One selectable row of a results table, as ingested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub test_name: String,
    pub value_text: String,
    pub range_text: String,
    /// Unselected rows are skipped entirely during evaluation.
    pub selected: bool,
}

/// One recognized results table with its rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSheet {
    /// Display label, typically the source file stem.
    pub label: String,
    pub rows: Vec<ResultRow>,
}

/// One row after parsing and range resolution.
///
/// `range` is `Some` exactly when `range_source` is not [`RangeSource::None`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestObservation {
    pub test_name: String,
    pub value_text: String,
    pub range_text: String,
    /// Parsed numeric value, if the value text contained one.
    pub value: Option<f64>,
    /// Resolved reference range.
    pub range: Option<ReferenceRange>,
    pub range_source: RangeSource,
    /// Best-effort unit token from the range text, or the fallback rule's
    /// canonical spelling when the text had none; empty when neither names
    /// one.
    pub unit: String,
}
