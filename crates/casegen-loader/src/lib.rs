//! # casegen-loader
//!
//! Turns specification documents into a normalized
//! [`Specification`](casegen_core::Specification):
//! - YAML documents with `title`, `description`, `target`, `subject`,
//!   `inputs`, `edge_cases` and `metadata` keys
//! - spreadsheets (`.xlsx`, `.xls`, `.ods`) with one case per row

pub mod excel;
pub mod yaml;

mod error;

pub use error::LoaderError;
pub use excel::{load_excel_spec, spec_from_rows};
pub use yaml::{load_yaml_spec, parse_yaml_spec};

use std::path::{Path, PathBuf};

use casegen_core::Specification;

/// Where a specification comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
    Yaml(PathBuf),
    Excel(PathBuf),
}

impl SpecSource {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Yaml(path) | Self::Excel(path) => path,
        }
    }
}

/// Load and normalize the specification behind `source`.
///
/// # Errors
///
/// Returns [`LoaderError`] if the source cannot be read or parsed.
pub fn load_spec(source: &SpecSource) -> Result<Specification, LoaderError> {
    let spec = match source {
        SpecSource::Yaml(path) => load_yaml_spec(path)?,
        SpecSource::Excel(path) => load_excel_spec(path)?,
    };
    tracing::debug!(
        path = %source.path().display(),
        title = %spec.title,
        inputs = spec.inputs.len(),
        edge_cases = spec.edge_cases.len(),
        "loaded specification"
    );
    Ok(spec)
}
