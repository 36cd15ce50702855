//! CLI library components for the lab-results triage tool.

pub mod logging;
