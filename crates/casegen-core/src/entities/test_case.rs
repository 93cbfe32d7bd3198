use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::serde_ext::present;

/// A single step inside a generated test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestStep {
    pub action: String,
    pub input: Value,
    /// `None` when the step carries no expectation at all. A present `null`
    /// is `Some(Value::Null)` and counts as an expectation.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub expected: Option<Value>,
}

/// A test case produced by a case generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedTestCase {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub steps: Vec<TestStep>,
    #[serde(default)]
    pub tags: Vec<String>,
}
