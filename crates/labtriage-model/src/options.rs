use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Behavior switches for batch evaluation.
///
/// The deselect flags only control which rows are removed from the
/// selection; they never change a row's verdict, and panic rows are never
/// deselected regardless of flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TriageOptions {
    /// Deselect rows whose value falls outside the resolved reference range.
    pub auto_deselect_out_of_range: bool,
    /// Also deselect rows whose value is exactly zero.
    pub deselect_zero: bool,
    /// Also deselect rows whose value is negative.
    pub deselect_negative: bool,
}

impl Default for TriageOptions {
    fn default() -> Self {
        Self {
            auto_deselect_out_of_range: true,
            deselect_zero: false,
            deselect_negative: false,
        }
    }
}

impl TriageOptions {
    /// Options with every deselect trigger disabled; rows are classified and
    /// reported but the selection is left alone.
    pub fn observe_only() -> Self {
        Self {
            auto_deselect_out_of_range: false,
            deselect_zero: false,
            deselect_negative: false,
        }
    }

    /// Load options from a TOML profile. Missing keys take their defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self, OptionsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| OptionsError::io(path, source))?;
        toml::from_str(&contents).map_err(|source| OptionsError::parse(path, source))
    }
}
