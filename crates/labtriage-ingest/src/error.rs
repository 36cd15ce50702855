use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IngestError>;

/// Errors raised while discovering or loading result sheets.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("sheet directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to read sheet directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read sheet {path}: {source}")]
    Sheet {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl IngestError {
    pub(crate) fn directory_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryRead {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn sheet(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Sheet {
            path: path.into(),
            source,
        }
    }
}
