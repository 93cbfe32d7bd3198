//! Render error types.

use std::path::PathBuf;

use casegen_core::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// Only `pytest` output exists.
    #[error("Format {0} not implemented")]
    UnsupportedFormat(String),

    /// The artifact could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedFormat(_) => ErrorKind::Configuration,
            Self::Write { .. } => ErrorKind::Io,
        }
    }
}
