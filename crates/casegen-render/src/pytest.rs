//! pytest skeleton output.

use std::path::Path;

use casegen_core::text::bounded_repr;
use casegen_core::{GeneratedTestCase, Specification};

use crate::error::RenderError;

const HEADER: &str =
    "# Auto-generated pytest file - do not edit by hand unless you intend to import pytest";

const PLACEHOLDER_NOTE: &str =
    "# TODO: replace the assertion below with a real call/assertion for your system";

const ASSERT_PLACEHOLDER: &str = "    assert True";

/// Printed in place of an expectation the step does not carry.
const MISSING: &str = "<missing>";

/// Render `cases` as the text of one pytest module.
///
/// Each case becomes `def test_{name}():` with spaces in the name replaced
/// by underscores and no other sanitization. Output depends only on the
/// arguments.
#[must_use]
pub fn render_pytest(cases: &[GeneratedTestCase], spec: &Specification) -> String {
    let mut lines = vec![
        HEADER.to_string(),
        format!(
            "# Spec: {} ({}:{})",
            one_line(&spec.title),
            one_line(&spec.target),
            one_line(&spec.subject)
        ),
    ];
    for case in cases {
        lines.extend(case_lines(case));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Two blank separator lines, then the test function.
fn case_lines(case: &GeneratedTestCase) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        String::new(),
        format!("def test_{}():", case.name.replace(' ', "_")),
        format!("    \"\"\"{}\"\"\"", docstring(&case.description)),
    ];

    if case.steps.is_empty() {
        lines.push(ASSERT_PLACEHOLDER.to_string());
    }
    for step in &case.steps {
        let expected = step
            .expected
            .as_ref()
            .map_or_else(|| MISSING.to_string(), bounded_repr);
        lines.extend([
            format!("    # Step: {}", one_line(&step.action)),
            format!("    # Input: {}", bounded_repr(&step.input)),
            format!("    # Expected: {expected}"),
            format!("    {PLACEHOLDER_NOTE}"),
            ASSERT_PLACEHOLDER.to_string(),
        ]);
    }
    lines
}

/// Render `cases` and write them to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`RenderError::Write`] if `path` cannot be written.
pub fn render_pytest_file(
    path: &Path,
    cases: &[GeneratedTestCase],
    spec: &Specification,
) -> Result<(), RenderError> {
    let content = render_pytest(cases, spec);
    std::fs::write(path, &content).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), cases = cases.len(), bytes = content.len(), "wrote test file");
    Ok(())
}

/// Comments end at the newline; keep multi-line text on one line.
fn one_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

fn docstring(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
