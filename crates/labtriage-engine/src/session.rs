//! Batch evaluation with an explicit lock/acknowledge lifecycle.
//!
//! A [`TriageSession`] owns the panic-hit list and the lock state for one
//! review session. `evaluate` clears accumulated hits before each run, so
//! rerunning on unchanged input yields identical output; the lock set by a
//! panic finding stays until [`TriageSession::acknowledge`] is called, even
//! if a later run is clean.

use labtriage_model::{
    BatchStats, PanicHit, ResultSheet, RowInstruction, SheetStats, TestObservation, TriageOptions,
    Verdict,
};
use tracing::{debug, info, warn};

use crate::classify::{classify, observe};

/// One classified row with the instruction issued for it.
#[derive(Debug, Clone)]
pub struct RowOutcome {
    pub observation: TestObservation,
    pub verdict: Verdict,
    pub instruction: RowInstruction,
}

/// One sheet's classified rows and counters.
#[derive(Debug, Clone)]
pub struct SheetOutcome {
    pub label: String,
    pub rows: Vec<RowOutcome>,
    pub stats: SheetStats,
}

/// Everything one evaluation run produced.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub sheets: Vec<SheetOutcome>,
    pub stats: BatchStats,
    /// Panic hits in evaluation order, as recorded this run.
    pub panic_hits: Vec<PanicHit>,
    /// True while the downstream save action must stay locked.
    pub lock_required: bool,
}

/// Owns panic hits and the save lock across evaluation runs.
#[derive(Debug, Default)]
pub struct TriageSession {
    options: TriageOptions,
    panic_hits: Vec<PanicHit>,
    locked: bool,
}

impl TriageSession {
    pub fn new(options: TriageOptions) -> Self {
        Self {
            options,
            panic_hits: Vec::new(),
            locked: false,
        }
    }

    pub fn options(&self) -> &TriageOptions {
        &self.options
    }

    /// Panic hits recorded by the most recent run, in evaluation order.
    pub fn panic_hits(&self) -> &[PanicHit] {
        &self.panic_hits
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Classify every selected row of every sheet and issue instructions.
    ///
    /// The hit list is cleared at the start of each run; the lock is not,
    /// it persists until acknowledged.
    pub fn evaluate(&mut self, sheets: &[ResultSheet]) -> BatchOutcome {
        self.panic_hits.clear();

        let mut batch = BatchStats::default();
        let mut outcomes = Vec::with_capacity(sheets.len());
        for sheet in sheets {
            let outcome = self.evaluate_sheet(sheet);
            batch.absorb(&outcome.stats);
            outcomes.push(outcome);
        }

        if batch.has_panics() {
            self.locked = true;
            warn!(
                hits = self.panic_hits.len(),
                "panic values detected, save action locked"
            );
        }

        info!(
            tables = batch.tables_recognized,
            matched = batch.rows_matched,
            deselected = batch.rows_deselected,
            panic = batch.rows_panicked,
            "triage run complete"
        );

        BatchOutcome {
            sheets: outcomes,
            stats: batch,
            panic_hits: self.panic_hits.clone(),
            lock_required: self.locked,
        }
    }

    /// Human sign-off on the surfaced panic list. Releases the lock and
    /// clears the accumulated hits.
    pub fn acknowledge(&mut self) {
        info!(cleared = self.panic_hits.len(), "panic list acknowledged, save unlocked");
        self.panic_hits.clear();
        self.locked = false;
    }

    /// Return the session to its initial state, keeping the options.
    pub fn reset(&mut self) {
        self.panic_hits.clear();
        self.locked = false;
    }

    fn evaluate_sheet(&mut self, sheet: &ResultSheet) -> SheetOutcome {
        let mut stats = SheetStats::default();
        let mut rows = Vec::new();
        for row in &sheet.rows {
            // Classification only runs on selected rows.
            if !row.selected {
                continue;
            }
            stats.record_scanned();

            let observation = observe(&row.test_name, &row.value_text, &row.range_text);
            let verdict = classify(&observation);
            if verdict != Verdict::Unclassified {
                stats.rows_matched += 1;
            }

            let instruction = self.instruction_for(&observation, verdict);
            match instruction {
                RowInstruction::HighlightPanic => {
                    stats.rows_panicked += 1;
                    if let Some(value) = observation.value {
                        self.panic_hits.push(PanicHit {
                            test_name: observation.test_name.clone(),
                            value,
                            unit: observation.unit.clone(),
                        });
                    }
                }
                RowInstruction::Deselect { .. } => stats.rows_deselected += 1,
                RowInstruction::Keep => {}
            }

            debug!(
                sheet = %sheet.label,
                test = %observation.test_name,
                verdict = verdict.label(),
                "row classified"
            );
            rows.push(RowOutcome {
                observation,
                verdict,
                instruction,
            });
        }
        SheetOutcome {
            label: sheet.label.clone(),
            rows,
            stats,
        }
    }

    /// Map a verdict to the instruction for its row.
    ///
    /// A panic row is never deselected regardless of flags; the zero and
    /// negative triggers fire even for rows that are otherwise in range.
    fn instruction_for(&self, observation: &TestObservation, verdict: Verdict) -> RowInstruction {
        match verdict {
            Verdict::Panic => RowInstruction::HighlightPanic,
            Verdict::Unclassified => RowInstruction::Keep,
            Verdict::AbnormalOutOfRange | Verdict::Normal => {
                let Some(value) = observation.value else {
                    return RowInstruction::Keep;
                };
                let out_of_range = verdict == Verdict::AbnormalOutOfRange;
                let deselect = (self.options.auto_deselect_out_of_range && out_of_range)
                    || (self.options.deselect_zero && value == 0.0)
                    || (self.options.deselect_negative && value < 0.0);
                if deselect {
                    RowInstruction::Deselect {
                        source: observation.range_source,
                    }
                } else {
                    RowInstruction::Keep
                }
            }
        }
    }
}
