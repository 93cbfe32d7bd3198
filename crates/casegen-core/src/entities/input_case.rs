use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One nominal or edge case from a [`Specification`](super::Specification).
///
/// Built from a loosely-typed record. The optional keys are resolved once,
/// at construction:
/// - `name`: string (numbers are stringified, anything else is ignored)
/// - call input: `payload`, else `input`, else the whole record
/// - `expected`: kept presence-aware, so an explicit `null` stays `Some(Null)`
///
/// A record that is not a mapping becomes the call input itself.
/// Serializes back to the original record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub struct InputCase {
    name: Option<String>,
    input: Value,
    expected: Option<Value>,
    record: Value,
}

impl InputCase {
    #[must_use]
    pub fn from_record(record: Value) -> Self {
        let (name, input, expected) = match &record {
            Value::Object(map) => (
                map.get("name").and_then(name_of),
                map.get("payload")
                    .or_else(|| map.get("input"))
                    .cloned()
                    .unwrap_or_else(|| record.clone()),
                map.get("expected").cloned(),
            ),
            other => (None, other.clone(), None),
        };

        Self {
            name,
            input,
            expected,
            record,
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name for human-readable descriptions; `unnamed` when absent.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or("unnamed")
    }

    /// The resolved call input.
    #[must_use]
    pub const fn input(&self) -> &Value {
        &self.input
    }

    /// The declared expectation, if the record had an `expected` key.
    #[must_use]
    pub const fn expected(&self) -> Option<&Value> {
        self.expected.as_ref()
    }

    #[must_use]
    pub const fn record(&self) -> &Value {
        &self.record
    }
}

fn name_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl From<Value> for InputCase {
    fn from(record: Value) -> Self {
        Self::from_record(record)
    }
}

impl From<InputCase> for Value {
    fn from(case: InputCase) -> Self {
        case.record
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn payload_wins_over_input() {
        let case = InputCase::from_record(json!({
            "name": "valid",
            "payload": {"user": "a"},
            "input": {"ignored": true}
        }));
        assert_eq!(case.name(), Some("valid"));
        assert_eq!(case.input(), &json!({"user": "a"}));
        assert!(case.expected().is_none());
    }

    #[test]
    fn input_used_when_payload_absent() {
        let case = InputCase::from_record(json!({"input": [1, 2, 3]}));
        assert_eq!(case.input(), &json!([1, 2, 3]));
        assert_eq!(case.display_name(), "unnamed");
    }

    #[test]
    fn whole_record_used_as_last_resort() {
        let record = json!({"name": "bare", "user": "a"});
        let case = InputCase::from_record(record.clone());
        assert_eq!(case.input(), &record);
    }

    #[test]
    fn explicit_null_expected_is_present() {
        let case = InputCase::from_record(json!({"payload": 1, "expected": null}));
        assert_eq!(case.expected(), Some(&Value::Null));
    }

    #[test]
    fn scalar_record_is_the_input() {
        let case = InputCase::from_record(json!("just a string"));
        assert_eq!(case.input(), &json!("just a string"));
        assert!(case.name().is_none());
    }

    #[test]
    fn numeric_names_are_stringified() {
        let case = InputCase::from_record(json!({"name": 7}));
        assert_eq!(case.name(), Some("7"));
    }

    #[test]
    fn serializes_back_to_original_record() {
        let record = json!({"name": "valid", "payload": {"user": "a"}});
        let case: InputCase = serde_json::from_value(record.clone()).unwrap();
        assert_eq!(serde_json::to_value(&case).unwrap(), record);
    }
}
