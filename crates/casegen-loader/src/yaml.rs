//! YAML specification documents.

use std::path::Path;

use casegen_core::Specification;

use crate::error::LoaderError;

/// Read and parse a YAML specification file.
///
/// # Errors
///
/// Returns [`LoaderError::Read`] if the file cannot be read and
/// [`LoaderError::Yaml`] if it is not a valid specification document.
pub fn load_yaml_spec(path: &Path) -> Result<Specification, LoaderError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoaderError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_yaml_spec(&text)
}

/// Parse a YAML specification document.
///
/// Missing keys take their defaults (`title: untitled`, `target: function`,
/// empty strings, lists and metadata). An empty document is an empty spec.
///
/// # Errors
///
/// Returns [`LoaderError::Yaml`] on malformed YAML or mistyped fields.
pub fn parse_yaml_spec(text: &str) -> Result<Specification, LoaderError> {
    let spec: Option<Specification> = serde_yaml::from_str(text)?;
    Ok(spec.unwrap_or_default().normalized())
}
