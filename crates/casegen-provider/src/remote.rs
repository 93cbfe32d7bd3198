//! Case generation delegated to a language model.
//!
//! The model is asked for a bare JSON array of test cases. Its reply is
//! parsed once and mapped permissively: missing strings become `""`,
//! missing steps `[]`, a missing step input `null`, and a missing step
//! expectation stays absent for the validator to report. Anything that is
//! not a JSON array of objects is a [`ProviderError::MalformedOutput`].

use async_trait::async_trait;
use casegen_config::{API_KEY_ENV_VAR, OpenAiConfig};
use casegen_core::serde_ext::{null_as_default, present};
use casegen_core::{GeneratedTestCase, Specification, TestStep};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::client::{CompletionClient, OpenAiClient};
use crate::{CaseGenerator, ProviderError};

const PROMPT_PREAMBLE: &str = "You are an assistant that outputs JSON describing test cases. \
Given the following specification, output a JSON array of objects with keys: id, name, description, steps. \
Each step must be an object with keys: action, input, expected. \
Do not output any other text.";

/// Generator backed by a [`CompletionClient`].
///
/// Both a client and a non-empty API key are required; either missing fails
/// with [`ProviderError::NotConfigured`] before any request is made.
pub struct RemoteGenerator {
    client: Option<Box<dyn CompletionClient>>,
    api_key: String,
}

impl RemoteGenerator {
    #[must_use]
    pub fn new(client: Option<Box<dyn CompletionClient>>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }

    /// Wire an [`OpenAiClient`] from configuration.
    ///
    /// A blank base URL or a client that fails to build leaves the generator
    /// without a client; the failure surfaces on the first `generate` call.
    #[must_use]
    pub fn from_config(config: &OpenAiConfig) -> Self {
        let client: Option<Box<dyn CompletionClient>> = if config.base_url.trim().is_empty() {
            tracing::warn!("openai.base_url is empty; remote generation is unavailable");
            None
        } else {
            match OpenAiClient::new(config) {
                Ok(client) => Some(Box::new(client)),
                Err(error) => {
                    tracing::warn!(%error, "failed to build completion client");
                    None
                }
            }
        };
        Self::new(client, config.api_key.clone())
    }

    fn ready_client(&self) -> Result<&dyn CompletionClient, ProviderError> {
        let client = self.client.as_deref().ok_or_else(|| {
            ProviderError::NotConfigured("no completion client is available".into())
        })?;
        if self.api_key.trim().is_empty() {
            return Err(ProviderError::NotConfigured(format!(
                "{API_KEY_ENV_VAR} is not set"
            )));
        }
        Ok(client)
    }
}

#[async_trait]
impl CaseGenerator for RemoteGenerator {
    async fn generate(&self, spec: &Specification) -> Result<Vec<GeneratedTestCase>, ProviderError> {
        let client = self.ready_client()?;
        let prompt = build_prompt(spec)?;

        tracing::debug!(spec = %spec.title, prompt_chars = prompt.len(), "requesting remote generation");
        let reply = client.complete(&self.api_key, &prompt).await?;

        let cases = parse_cases(&reply, &spec.tags())?;
        tracing::debug!(spec = %spec.title, generated = cases.len(), "remote generation complete");
        Ok(cases)
    }
}

/// The single instruction sent to the model, embedding `spec` as JSON.
///
/// # Errors
///
/// Returns [`ProviderError::Prompt`] if the specification cannot be
/// serialized.
pub fn build_prompt(spec: &Specification) -> Result<String, ProviderError> {
    let spec_json = serde_json::to_string(spec).map_err(ProviderError::Prompt)?;
    Ok(format!("{PROMPT_PREAMBLE}\nSpecification: {spec_json}"))
}

/// Map the model's reply into test cases stamped with `tags`.
///
/// # Errors
///
/// Returns [`ProviderError::MalformedOutput`] if `reply` is not a JSON array
/// of case objects.
pub fn parse_cases(reply: &str, tags: &[String]) -> Result<Vec<GeneratedTestCase>, ProviderError> {
    let wire: Vec<WireCase> =
        serde_json::from_str(reply.trim()).map_err(ProviderError::MalformedOutput)?;

    Ok(wire
        .into_iter()
        .map(|case| GeneratedTestCase {
            id: case.id,
            name: case.name,
            description: case.description,
            steps: case
                .steps
                .into_iter()
                .map(|step| TestStep {
                    action: step.action,
                    input: step.input,
                    expected: step.expected,
                })
                .collect(),
            tags: tags.to_vec(),
        })
        .collect())
}

#[derive(Deserialize)]
struct WireCase {
    #[serde(default, deserialize_with = "id_text")]
    id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    steps: Vec<WireStep>,
}

#[derive(Deserialize)]
struct WireStep {
    #[serde(default, deserialize_with = "null_as_default")]
    action: String,
    #[serde(default)]
    input: Value,
    #[serde(default, deserialize_with = "present")]
    expected: Option<Value>,
}

/// Models often emit numeric ids; keep them as text.
fn id_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}
