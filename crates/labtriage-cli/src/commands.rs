use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{debug, info, info_span};

use labtriage_engine::{BatchOutcome, TriageReportPayload, TriageSession, write_triage_report_json};
use labtriage_ingest::load_sheets;
use labtriage_model::{ResultSheet, RowInstruction, TriageOptions};
use labtriage_rules::{TextPattern, panic_thresholds, reference_ranges, rules_digest};

use crate::cli::CheckArgs;
use labtriage_cli::logging::redact_value;
use crate::summary::apply_table_style;
use crate::types::CheckResult;

/// Fixed readiness-poll interval for `--wait-ms`.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    if args.wait_ms > 0 {
        wait_for_inputs(&args.inputs, Duration::from_millis(args.wait_ms))?;
    }

    let options = resolve_options(args)?;

    let ingest_span = info_span!("ingest");
    let ingest_start = Instant::now();
    let sheets = ingest_span.in_scope(|| load_inputs(&args.inputs))?;
    info!(
        sheets = sheets.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let mut session = TriageSession::new(options);
    let outcome = session.evaluate(&sheets);
    log_row_actions(&outcome);

    let report_path = match &args.report_dir {
        Some(dir) => {
            let payload = TriageReportPayload::new(&outcome, options);
            let path = write_triage_report_json(dir, &payload)
                .with_context(|| format!("write triage report to {}", dir.display()))?;
            info!(path = %path.display(), "triage report written");
            Some(path)
        }
        None => None,
    };

    Ok(CheckResult {
        outcome,
        report_path,
    })
}

/// Profile file first, then command-line overrides.
fn resolve_options(args: &CheckArgs) -> Result<TriageOptions> {
    let mut options = match &args.config {
        Some(path) => TriageOptions::from_toml_file(path)
            .with_context(|| format!("load options profile {}", path.display()))?,
        None => TriageOptions::default(),
    };
    if args.no_auto_deselect {
        options.auto_deselect_out_of_range = false;
    }
    if args.deselect_zero {
        options.deselect_zero = true;
    }
    if args.deselect_negative {
        options.deselect_negative = true;
    }
    debug!(?options, "options resolved");
    Ok(options)
}

fn load_inputs(inputs: &[PathBuf]) -> Result<Vec<ResultSheet>> {
    let mut sheets = Vec::new();
    for input in inputs {
        let mut loaded = load_sheets(input)
            .with_context(|| format!("load result sheets from {}", input.display()))?;
        sheets.append(&mut loaded);
    }
    Ok(sheets)
}

/// Poll at a fixed interval until every input path exists or the deadline
/// passes. The classifier never runs after a timed-out wait.
fn wait_for_inputs(inputs: &[PathBuf], timeout: Duration) -> Result<()> {
    let deadline = Instant::now() + timeout;
    loop {
        if inputs.iter().all(|path| path.exists()) {
            return Ok(());
        }
        if Instant::now() >= deadline {
            let missing: Vec<String> = inputs
                .iter()
                .filter(|path| !path.exists())
                .map(|path| path.display().to_string())
                .collect();
            bail!(
                "inputs not found after {} ms: {}",
                timeout.as_millis(),
                missing.join(", ")
            );
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Row-level log trail for the actions issued this run. Raw values pass
/// through the PHI redaction gate.
fn log_row_actions(outcome: &BatchOutcome) {
    for sheet in &outcome.sheets {
        for row in &sheet.rows {
            let action = match &row.instruction {
                RowInstruction::Keep => continue,
                RowInstruction::Deselect { .. } => "deselect",
                RowInstruction::HighlightPanic => "highlight-panic",
            };
            debug!(
                sheet = %sheet.label,
                test = %row.observation.test_name,
                value = redact_value(&row.observation.value_text),
                range_source = row.observation.range_source.label(),
                action,
                "row action issued"
            );
        }
    }
}

pub fn run_rules() -> Result<()> {
    let ranges = reference_ranges();
    println!("Fallback reference ranges ({} rules, first match wins):", ranges.len());
    let mut table = Table::new();
    table.set_header(vec!["Test pattern", "Unit pattern", "Min", "Max"]);
    apply_table_style(&mut table);
    for rule in ranges {
        table.add_row(vec![
            rule.test.as_str().to_string(),
            unit_pattern_text(rule.unit.as_ref()),
            rule.min.to_string(),
            rule.max.to_string(),
        ]);
    }
    println!("{table}");

    let thresholds = panic_thresholds();
    println!();
    println!("Panic thresholds ({} rules):", thresholds.len());
    let mut table = Table::new();
    table.set_header(vec!["Test pattern", "Unit pattern", "Low", "High"]);
    apply_table_style(&mut table);
    for rule in thresholds {
        table.add_row(vec![
            rule.test.as_str().to_string(),
            unit_pattern_text(rule.unit.as_ref()),
            bound_text(rule.low),
            bound_text(rule.high),
        ]);
    }
    println!("{table}");

    println!();
    println!("Rules digest: {}", rules_digest());
    Ok(())
}

fn unit_pattern_text(unit: Option<&TextPattern>) -> String {
    match unit {
        Some(pattern) => pattern.as_str().to_string(),
        None => "-".to_string(),
    }
}

fn bound_text(bound: Option<f64>) -> String {
    match bound {
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}
