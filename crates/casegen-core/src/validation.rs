//! Structural validation of generated test cases.
//!
//! Checks run independently per case and per step; every defect is
//! collected so one report lists all of them.

use crate::entities::GeneratedTestCase;
use crate::errors::ValidationError;

/// Outcome of [`validate_test_cases`]. Errors follow case order, then step order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub cases_checked: usize,
    pub steps_checked: usize,
    pub errors: Vec<String>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into a `Result`, carrying every defect on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when at least one defect was found.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }
}

/// Check that every case has a name and steps, and that every step has an
/// action and an expectation. Indices in messages are 0-based.
///
/// An empty batch is valid.
#[must_use]
pub fn validate_test_cases(cases: &[GeneratedTestCase]) -> ValidationReport {
    let mut report = ValidationReport {
        cases_checked: cases.len(),
        ..ValidationReport::default()
    };

    for (idx, case) in cases.iter().enumerate() {
        if case.name.is_empty() {
            report.errors.push(format!("TestCase #{idx} missing name"));
        }
        if case.steps.is_empty() {
            let label = if case.name.is_empty() {
                idx.to_string()
            } else {
                case.name.clone()
            };
            report.errors.push(format!("TestCase {label} has no steps"));
        }
        for (step_idx, step) in case.steps.iter().enumerate() {
            report.steps_checked += 1;
            if step.action.is_empty() {
                report.errors.push(format!(
                    "TestCase {} step #{step_idx} missing action",
                    case.name
                ));
            }
            if step.expected.is_none() {
                report.errors.push(format!(
                    "TestCase {} step #{step_idx} missing expected value",
                    case.name
                ));
            }
        }
    }

    report
}
