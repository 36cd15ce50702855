//! CSV sheet loading.

use std::path::{Path, PathBuf};

use labtriage_model::{ResultRow, ResultSheet};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::mapping::{TableMapping, detect_table_mapping};

/// Interpret a selection-flag cell.
///
/// Only explicit negatives deselect. Unknown or empty tokens leave the row
/// selected, so a column the export fills with anything unexpected cannot
/// silently hide results from review.
pub fn parse_selected_token(text: &str) -> bool {
    !matches!(
        text.trim().to_uppercase().as_str(),
        "N" | "NO" | "FALSE" | "0"
    )
}

/// Loads a single sheet from a CSV file.
///
/// Returns `Ok(None)` when the header row does not look like a results
/// table; the caller decides whether that is worth reporting.
pub fn load_sheet(path: &Path) -> Result<Option<ResultSheet>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::sheet(path, e))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::sheet(path, e))?
        .iter()
        .map(|header| header.to_string())
        .collect();

    let Some(mapping) = detect_table_mapping(&headers) else {
        warn!(path = %path.display(), "no results-table mapping detected, skipping sheet");
        return Ok(None);
    };

    let mut rows = Vec::new();
    for record_result in reader.records() {
        let record = record_result.map_err(|e| IngestError::sheet(path, e))?;
        // Short records that never reach the mapped columns carry no result.
        if record.get(mapping.value_idx).is_none() || record.get(mapping.range_idx).is_none() {
            continue;
        }
        rows.push(row_from_record(&record, mapping));
    }

    let label = sheet_label(path);
    debug!(sheet = %label, rows = rows.len(), "sheet loaded");

    Ok(Some(ResultSheet { label, rows }))
}

fn row_from_record(record: &csv::StringRecord, mapping: TableMapping) -> ResultRow {
    let cell = |idx: usize| record.get(idx).unwrap_or("").to_string();
    let test_name = match mapping.name_idx {
        Some(idx) => cell(idx),
        // Exports without a recognizable name header keep the name first.
        None => cell(0),
    };
    let selected = match mapping.selected_idx {
        Some(idx) => parse_selected_token(record.get(idx).unwrap_or("")),
        None => true,
    };
    ResultRow {
        test_name,
        value_text: cell(mapping.value_idx),
        range_text: cell(mapping.range_idx),
        selected,
    }
}

fn sheet_label(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("sheet")
        .to_string()
}

/// Lists candidate sheet files in a directory.
///
/// Returns `.csv` files (case-insensitive) sorted by filename.
pub fn list_sheet_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::directory_read(dir, e))?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::directory_read(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Loads every recognizable sheet under a path.
///
/// A directory is scanned for CSV files; a single file is loaded directly.
/// Unrecognized sheets are logged and dropped rather than failing the run.
pub fn load_sheets(path: &Path) -> Result<Vec<ResultSheet>> {
    let files = if path.is_dir() {
        list_sheet_files(path)?
    } else {
        vec![path.to_path_buf()]
    };

    let mut sheets = Vec::new();
    for file in &files {
        if let Some(sheet) = load_sheet(file)? {
            sheets.push(sheet);
        }
    }
    Ok(sheets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_token_negatives() {
        for token in ["N", "no", "False", "0", " n "] {
            assert!(!parse_selected_token(token), "token {token:?}");
        }
    }

    #[test]
    fn test_selected_token_defaults_to_selected() {
        for token in ["Y", "yes", "TRUE", "1", "", "   ", "maybe"] {
            assert!(parse_selected_token(token), "token {token:?}");
        }
    }
}
