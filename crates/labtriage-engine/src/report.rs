//! Versioned JSON report for one evaluation run.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use labtriage_model::{BatchStats, PanicHit, TriageOptions};
use labtriage_rules::rules_digest;
use serde::Serialize;

use crate::session::BatchOutcome;

const REPORT_SCHEMA: &str = "labtriage.triage-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct TriageReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    /// Digest of the rule tables that produced these verdicts.
    pub rules_digest: String,
    pub options: TriageOptions,
    pub stats: BatchStats,
    pub lock_required: bool,
    pub panic_hits: Vec<PanicHit>,
    pub sheets: Vec<SheetReportSummary>,
}

#[derive(Debug, Serialize)]
pub struct SheetReportSummary {
    pub label: String,
    pub rows_scanned: usize,
    pub rows_matched: usize,
    pub rows_deselected: usize,
    pub rows_panicked: usize,
}

impl TriageReportPayload {
    pub fn new(outcome: &BatchOutcome, options: TriageOptions) -> Self {
        Self {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            rules_digest: rules_digest(),
            options,
            stats: outcome.stats,
            lock_required: outcome.lock_required,
            panic_hits: outcome.panic_hits.clone(),
            sheets: outcome
                .sheets
                .iter()
                .map(|sheet| SheetReportSummary {
                    label: sheet.label.clone(),
                    rows_scanned: sheet.stats.rows_scanned,
                    rows_matched: sheet.stats.rows_matched,
                    rows_deselected: sheet.stats.rows_deselected,
                    rows_panicked: sheet.stats.rows_panicked,
                })
                .collect(),
        }
    }
}

/// Write `triage_report.json` into `output_dir`, creating it if needed.
pub fn write_triage_report_json(
    output_dir: &Path,
    payload: &TriageReportPayload,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("triage_report.json");
    let json = serde_json::to_string_pretty(payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
