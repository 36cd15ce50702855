//! Result-sheet ingestion.
//!
//! Turns exported CSV files into [`labtriage_model::ResultSheet`] values:
//! discover candidate files, detect the column layout from the header row,
//! and read rows with their selection flags. Files whose headers do not
//! resemble a results table are skipped, not treated as errors.

pub mod error;
pub mod mapping;
pub mod sheet;

pub use error::{IngestError, Result};
pub use mapping::{TableMapping, detect_table_mapping};
pub use sheet::{list_sheet_files, load_sheet, load_sheets, parse_selected_token};
