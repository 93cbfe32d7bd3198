use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::InputCase;
use crate::serde_ext::null_as_default;
use crate::text::slugify;

/// Title used when a source document has none.
pub const DEFAULT_TITLE: &str = "untitled";

/// Target used when a source document has none.
pub const DEFAULT_TARGET: &str = "function";

/// The normalized input to the generation pipeline, independent of whether
/// it came from YAML or a spreadsheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Category of the thing under test (e.g. `api`, `function`).
    #[serde(default = "default_target")]
    pub target: String,
    /// The callable or endpoint under test.
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inputs: Vec<InputCase>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub edge_cases: Vec<InputCase>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: BTreeMap<String, Value>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_target() -> String {
    DEFAULT_TARGET.to_string()
}

impl Default for Specification {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: String::new(),
            target: default_target(),
            subject: String::new(),
            inputs: Vec::new(),
            edge_cases: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }
}

impl Specification {
    /// Slug of the title, used for file names and case names.
    ///
    /// Falls back to [`DEFAULT_TITLE`] when the title has no slug-able
    /// characters at all.
    #[must_use]
    pub fn slug(&self) -> String {
        let slug = slugify(&self.title);
        if slug.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            slug
        }
    }

    /// The conventional step action, `Call {target}:{subject}`.
    #[must_use]
    pub fn action(&self) -> String {
        format!("Call {}:{}", self.target, self.subject)
    }

    /// String entries of `metadata.tags`, copied.
    ///
    /// Missing or non-sequence `tags` yield an empty list; non-string
    /// entries are skipped.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        self.metadata
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| {
                tags.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Fill in the defaults for fields a loader found blank.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.title.trim().is_empty() {
            self.title = default_title();
        }
        if self.target.trim().is_empty() {
            self.target = default_target();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let spec: Specification = serde_json::from_value(json!({})).unwrap();
        assert_eq!(spec, Specification::default());
        assert_eq!(spec.title, "untitled");
        assert_eq!(spec.target, "function");
    }

    #[test]
    fn null_lists_are_empty() {
        let spec: Specification =
            serde_json::from_value(json!({"title": "t", "inputs": null, "metadata": null}))
                .unwrap();
        assert!(spec.inputs.is_empty());
        assert!(spec.metadata.is_empty());
    }

    #[test]
    fn tags_keep_only_strings() {
        let spec = Specification {
            metadata: BTreeMap::from([("tags".to_string(), json!(["smoke", 3, "auth"]))]),
            ..Default::default()
        };
        assert_eq!(spec.tags(), vec!["smoke".to_string(), "auth".to_string()]);
    }

    #[test]
    fn tags_missing_or_malformed_are_empty() {
        let mut spec = Specification::default();
        assert!(spec.tags().is_empty());
        spec.metadata.insert("tags".into(), json!("not-a-list"));
        assert!(spec.tags().is_empty());
    }

    #[test]
    fn slug_falls_back_when_title_has_no_word_chars() {
        let spec = Specification {
            title: "???".into(),
            ..Default::default()
        };
        assert_eq!(spec.slug(), "untitled");
    }

    #[test]
    fn action_joins_target_and_subject() {
        let spec = Specification {
            target: "api".into(),
            subject: "login".into(),
            ..Default::default()
        };
        assert_eq!(spec.action(), "Call api:login");
    }

    #[test]
    fn normalized_replaces_blank_title_and_target() {
        let spec = Specification {
            title: "  ".into(),
            target: String::new(),
            ..Default::default()
        }
        .normalized();
        assert_eq!(spec.title, "untitled");
        assert_eq!(spec.target, "function");
    }
}
