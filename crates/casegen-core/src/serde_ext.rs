//! Serde adapters shared by the entity types and the remote wire format.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a field that must distinguish "absent" from "null".
///
/// Use together with `#[serde(default)]`: an absent key yields `None` via the
/// default, while a present key (including an explicit `null`) yields
/// `Some(value)`.
pub fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Deserialize a field where an explicit `null` means the type's default.
///
/// YAML documents often carry keys with no value (`inputs:`), which parse as
/// `null` rather than an empty sequence.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "present")]
        expected: Option<Value>,
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<String>,
    }

    #[test]
    fn absent_field_is_none() {
        let probe: Probe = serde_json::from_value(json!({})).unwrap();
        assert!(probe.expected.is_none());
        assert!(probe.items.is_empty());
    }

    #[test]
    fn explicit_null_is_present() {
        let probe: Probe = serde_json::from_value(json!({"expected": null})).unwrap();
        assert_eq!(probe.expected, Some(Value::Null));
    }

    #[test]
    fn null_sequence_becomes_empty() {
        let probe: Probe = serde_json::from_value(json!({"items": null})).unwrap();
        assert!(probe.items.is_empty());
    }
}
