//! Loader error types.

use std::path::PathBuf;

use casegen_core::ErrorKind;
use thiserror::Error;

/// Errors raised while turning a source document into a `Specification`.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The source file could not be read.
    #[error("failed to read spec {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The YAML document is malformed or has the wrong shape.
    #[error("invalid YAML spec: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The workbook could not be opened or its first sheet read.
    #[error("failed to read workbook {}: {message}", path.display())]
    Workbook { path: PathBuf, message: String },

    /// The sheet has a header row but no data rows.
    #[error("spreadsheet spec has no data rows")]
    EmptySheet,

    /// A cell that must hold JSON does not.
    #[error("row {row}, column '{column}': invalid JSON: {source}")]
    CellJson {
        row: usize,
        column: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoaderError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Read { .. } | Self::Workbook { .. } => ErrorKind::Io,
            Self::Yaml(_) | Self::EmptySheet | Self::CellJson { .. } => ErrorKind::Data,
        }
    }
}
