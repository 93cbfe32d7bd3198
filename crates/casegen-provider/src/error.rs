//! Provider error types.

use casegen_core::ErrorKind;
use thiserror::Error;

/// Errors that can occur while generating test cases.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider name is not one of the known generators.
    #[error("unknown provider '{0}' (expected 'local' or 'remote')")]
    UnknownProvider(String),

    /// The remote provider is missing its client or credential.
    #[error("remote provider is not configured: {0}")]
    NotConfigured(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Completion API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The completion API returned 429 Too Many Requests. Not retried.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the API asked us to wait.
        retry_after_secs: u64,
    },

    /// The completion response carried no message text.
    #[error("completion response has no message content")]
    EmptyCompletion,

    /// The specification could not be serialized into the prompt.
    #[error("failed to serialize specification: {0}")]
    Prompt(#[source] serde_json::Error),

    /// The model output is not a JSON array of test cases.
    #[error("model output is not valid test case JSON: {0}")]
    MalformedOutput(#[source] serde_json::Error),
}

impl ProviderError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownProvider(_) | Self::NotConfigured(_) => ErrorKind::Configuration,
            Self::Http(error) if error.is_decode() => ErrorKind::Data,
            Self::Http(_) => ErrorKind::Io,
            Self::Api { .. }
            | Self::RateLimited { .. }
            | Self::EmptyCompletion
            | Self::Prompt(_)
            | Self::MalformedOutput(_) => ErrorKind::Data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_are_classified() {
        assert_eq!(
            ProviderError::NotConfigured("missing key".into()).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            ProviderError::UnknownProvider("gemini".into()).kind(),
            ErrorKind::Configuration
        );
    }

    #[test]
    fn malformed_output_is_data_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ProviderError::MalformedOutput(source);
        assert_eq!(err.kind(), ErrorKind::Data);
        assert!(err.to_string().starts_with("model output is not valid test case JSON"));
    }
}
