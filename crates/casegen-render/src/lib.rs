//! # casegen-render
//!
//! Serializes validated test cases into a test-file skeleton. Every step
//! becomes annotated comments plus a placeholder `assert True`; nothing in
//! the output calls the system under test.

pub mod pytest;

mod error;

pub use error::RenderError;
pub use pytest::{render_pytest, render_pytest_file};

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use casegen_core::{GeneratedTestCase, Specification};

/// Supported artifact formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Pytest,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pytest => "pytest",
        }
    }

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Pytest => "py",
        }
    }

    /// Artifact file name for a spec slug, e.g. `test_login_api.py`.
    #[must_use]
    pub fn file_name(self, slug: &str) -> String {
        format!("test_{slug}.{}", self.extension())
    }

    /// Write `cases` to `path` in this format.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Write`] if `path` is not writable.
    pub fn render_to(
        self,
        path: &Path,
        cases: &[GeneratedTestCase],
        spec: &Specification,
    ) -> Result<(), RenderError> {
        match self {
            Self::Pytest => render_pytest_file(path, cases, spec),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pytest" => Ok(Self::Pytest),
            _ => Err(RenderError::UnsupportedFormat(value.to_string())),
        }
    }
}
