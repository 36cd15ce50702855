//! Curated rule tables for laboratory result triage.
//!
//! Two structurally distinct tables live here: fallback reference ranges
//! (expected intervals, used only when the sheet's own range is unusable)
//! and panic thresholds (critical-value bounds that lock the batch save
//! action). Both match tests by name and unit pattern, first hit wins.

pub mod digest;
pub mod panic;
pub mod pattern;
pub mod reference;

pub use digest::rules_digest;
pub use panic::{PanicRule, match_panic_rule, panic_thresholds};
pub use pattern::TextPattern;
pub use reference::{FallbackRangeRule, lookup_fallback_range, reference_ranges};
