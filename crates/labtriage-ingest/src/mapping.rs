//! Header-based column mapping detection.
//!
//! Hospital exports name their columns loosely ("Test Param Value",
//! "Result", "Normal Range"), so detection is substring-based over
//! lower-cased headers. A sheet counts as a results table only when both a
//! value column and a range column are found.

/// Column indices detected from a sheet's header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableMapping {
    /// Test-name column; the first column stands in when absent.
    pub name_idx: Option<usize>,
    pub value_idx: usize,
    pub range_idx: usize,
    /// Selection-flag column; rows default to selected when absent.
    pub selected_idx: Option<usize>,
}

const NAME_HEADERS: &[&str] = &["test param name", "param name", "test name"];
const VALUE_HEADERS: &[&str] = &["test param value", "param value", "value", "result"];
const RANGE_HEADERS: &[&str] = &["reference range", "ref", "range", "normal"];
const SELECTED_HEADERS: &[&str] = &["sel", "checked", "include"];

/// Detect the column mapping from a header row, if the sheet looks like a
/// results table.
pub fn detect_table_mapping(headers: &[String]) -> Option<TableMapping> {
    let lowered: Vec<String> = headers
        .iter()
        .map(|header| header.trim().to_lowercase())
        .collect();
    let value_idx = find_header(&lowered, VALUE_HEADERS)?;
    let range_idx = find_header(&lowered, RANGE_HEADERS)?;
    Some(TableMapping {
        name_idx: find_header(&lowered, NAME_HEADERS),
        value_idx,
        range_idx,
        selected_idx: find_header(&lowered, SELECTED_HEADERS),
    })
}

/// First column whose header contains any of the candidate substrings.
fn find_header(lowered: &[String], candidates: &[&str]) -> Option<usize> {
    lowered
        .iter()
        .position(|header| candidates.iter().any(|candidate| header.contains(candidate)))
}
