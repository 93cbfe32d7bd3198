//! # casegen-provider
//!
//! Test case generators behind one [`CaseGenerator`] contract:
//! - [`LocalGenerator`]: deterministic, rule-based, no I/O
//! - [`RemoteGenerator`]: one request to an OpenAI-compatible chat
//!   completion endpoint, whose JSON reply is mapped into test cases
//!
//! The generator is chosen up front from a [`ProviderKind`] and used through
//! a `Box<dyn CaseGenerator>`.

pub mod client;
pub mod local;
pub mod remote;

mod error;
mod http;

pub use client::{CompletionClient, OpenAiClient};
pub use error::ProviderError;
pub use local::LocalGenerator;
pub use remote::RemoteGenerator;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use casegen_config::OpenAiConfig;
use casegen_core::{GeneratedTestCase, Specification};

/// Turns a specification into an ordered list of test cases.
#[async_trait]
pub trait CaseGenerator: Send + Sync {
    /// Generate test cases for `spec`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the generator is misconfigured or its
    /// backend fails. The local generator never fails.
    async fn generate(&self, spec: &Specification) -> Result<Vec<GeneratedTestCase>, ProviderError>;
}

/// Which generator a pipeline run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProviderKind {
    #[default]
    Local,
    Remote,
}

impl ProviderKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = ProviderError;

    /// Accepts `local`, `remote` and `openai` (an alias of `remote`),
    /// case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" | "openai" => Ok(Self::Remote),
            _ => Err(ProviderError::UnknownProvider(value.to_string())),
        }
    }
}

/// Build the generator for `kind`. The remote generator is wired to an
/// [`OpenAiClient`] built from `openai`.
#[must_use]
pub fn build_generator(kind: ProviderKind, openai: &OpenAiConfig) -> Box<dyn CaseGenerator> {
    match kind {
        ProviderKind::Local => Box::new(LocalGenerator),
        ProviderKind::Remote => Box::new(RemoteGenerator::from_config(openai)),
    }
}
