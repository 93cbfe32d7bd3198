//! Cross-cutting error kinds for casegen.
//!
//! Each crate defines its own error enum (`ConfigError`, `LoaderError`,
//! `ProviderError`, `RenderError`, `PipelineError`). They all classify
//! themselves into one of the [`ErrorKind`]s below so callers can react to
//! the category without matching on every crate's variants.

use std::fmt;

use thiserror::Error;

/// Category of a failure anywhere in the generation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unsupported output format, unknown provider, or a remote provider
    /// without a client or credential.
    Configuration,
    /// Structural defects in generated test cases.
    Validation,
    /// Malformed input or remote response data.
    Data,
    /// Unreadable source, unwritable destination, or transport failure.
    Io,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Validation => "validation",
            Self::Data => "data",
            Self::Io => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every structural defect found in a batch of generated test cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation errors: {}", .errors.join("; "))]
pub struct ValidationError {
    pub errors: Vec<String>,
}
