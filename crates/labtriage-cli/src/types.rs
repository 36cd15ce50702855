use std::path::PathBuf;

use labtriage_engine::BatchOutcome;

/// Everything the summary printer needs from one `check` run.
#[derive(Debug)]
pub struct CheckResult {
    pub outcome: BatchOutcome,
    pub report_path: Option<PathBuf>,
}
