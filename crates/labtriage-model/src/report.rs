use serde::{Deserialize, Serialize};

/// One panic-level result, recorded in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanicHit {
    pub test_name: String,
    pub value: f64,
    /// Unit token from the range text, or the fallback rule's canonical
    /// spelling when the text had none; empty when neither names one.
    pub unit: String,
}

/// Per-sheet row counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetStats {
    /// Selected rows that were examined.
    pub rows_scanned: usize,
    /// Rows with both a parsed value and a resolved range.
    pub rows_matched: usize,
    pub rows_deselected: usize,
    pub rows_panicked: usize,
}

impl SheetStats {
    pub fn record_scanned(&mut self) {
        self.rows_scanned += 1;
    }
}

/// Aggregate counters for one evaluation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    /// Sheets whose header row yielded a column mapping.
    pub tables_recognized: usize,
    /// Rows with both a parsed value and a resolved range.
    pub rows_matched: usize,
    pub rows_deselected: usize,
    pub rows_panicked: usize,
}

impl BatchStats {
    /// Fold one sheet's counters into the batch totals.
    pub fn absorb(&mut self, sheet: &SheetStats) {
        self.tables_recognized += 1;
        self.rows_matched += sheet.rows_matched;
        self.rows_deselected += sheet.rows_deselected;
        self.rows_panicked += sheet.rows_panicked;
    }

    pub fn has_panics(&self) -> bool {
        self.rows_panicked > 0
    }
}
