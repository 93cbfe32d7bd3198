//! Deterministic, rule-based case generation.

use async_trait::async_trait;
use casegen_core::{GeneratedTestCase, InputCase, Specification, TestStep};
use serde_json::{Value, json};

use crate::{CaseGenerator, ProviderError};

/// Builds one single-step case per input and per edge case, without any
/// external calls.
///
/// Inputs come first, then edge cases, sharing one counter that starts at 1
/// and supplies both the case id and the numeric suffix of its name.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalGenerator;

impl LocalGenerator {
    /// Synchronous form of [`CaseGenerator::generate`].
    #[must_use]
    pub fn generate_cases(spec: &Specification) -> Vec<GeneratedTestCase> {
        let slug = spec.slug();
        let action = spec.action();
        let tags = spec.tags();

        let nominal = spec.inputs.iter().map(|case| (case, CaseRole::Nominal));
        let edge = spec.edge_cases.iter().map(|case| (case, CaseRole::Edge));

        let cases = nominal
            .chain(edge)
            .zip(1usize..)
            .map(|((case, role), idx)| GeneratedTestCase {
                id: idx.to_string(),
                name: format!("{slug}_{}_{idx}", role.suffix()),
                description: role.describe(case),
                steps: vec![TestStep {
                    action: action.clone(),
                    input: case.input().clone(),
                    expected: Some(case.expected().cloned().unwrap_or_else(|| role.default_expected())),
                }],
                tags: tags.clone(),
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            spec = %spec.title,
            inputs = spec.inputs.len(),
            edge_cases = spec.edge_cases.len(),
            generated = cases.len(),
            "local generation complete"
        );
        cases
    }
}

#[async_trait]
impl CaseGenerator for LocalGenerator {
    async fn generate(&self, spec: &Specification) -> Result<Vec<GeneratedTestCase>, ProviderError> {
        Ok(Self::generate_cases(spec))
    }
}

#[derive(Clone, Copy)]
enum CaseRole {
    Nominal,
    Edge,
}

impl CaseRole {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Nominal => "case",
            Self::Edge => "edge",
        }
    }

    fn describe(self, case: &InputCase) -> String {
        match self {
            Self::Nominal => format!("Auto-generated case for input {}", case.display_name()),
            Self::Edge => format!("Edge-case: {}", case.display_name()),
        }
    }

    fn default_expected(self) -> Value {
        match self {
            Self::Nominal => json!({"status": "success"}),
            Self::Edge => json!({"status": "error"}),
        }
    }
}
