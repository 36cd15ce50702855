//! Classification engine for laboratory result triage.
//!
//! The pipeline per row is fixed: parse the value text, resolve a reference
//! range (live text first, curated fallback second), consult the panic
//! thresholds, then compare against range bounds. [`TriageSession`] drives
//! that pipeline across whole sheets and owns the panic lock lifecycle.

pub mod classify;
pub mod report;
pub mod resolve;
pub mod session;
pub mod text;

pub use classify::{classify, observe};
pub use report::{SheetReportSummary, TriageReportPayload, write_triage_report_json};
pub use resolve::{ResolvedRange, resolve_range};
pub use session::{BatchOutcome, RowOutcome, SheetOutcome, TriageSession};
pub use text::{extract_unit_token, parse_numeric_range, parse_numeric_value};
