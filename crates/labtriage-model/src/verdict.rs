use serde::{Deserialize, Serialize};

use crate::observation::RangeSource;

/// Classification outcome for a single observation.
///
/// Ordering of checks is fixed: a row without a usable value or range is
/// `Unclassified`, panic thresholds are consulted before range bounds, and
/// only then is the value compared against the reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Value or range could not be determined; the row is left untouched.
    Unclassified,
    /// A panic threshold was breached; requires human acknowledgment.
    Panic,
    /// Outside the reference range but below panic level.
    AbnormalOutOfRange,
    /// Inside the reference range.
    Normal,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Unclassified => "unclassified",
            Verdict::Panic => "panic",
            Verdict::AbnormalOutOfRange => "abnormal",
            Verdict::Normal => "normal",
        }
    }
}

/// Side-effect instruction issued to the hosting system for one row.
///
/// Panic rows are never deselected; they are highlighted and the batch save
/// action is locked instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum RowInstruction {
    /// Leave the row as it is.
    Keep,
    /// Remove the row from the selection and highlight it as abnormal,
    /// tagged with the range source that justified the call.
    Deselect { source: RangeSource },
    /// Highlight the row as panic-level; selection must not change.
    HighlightPanic,
}

impl RowInstruction {
    pub fn is_deselect(&self) -> bool {
        matches!(self, RowInstruction::Deselect { .. })
    }
}
