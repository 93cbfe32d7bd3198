//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_provider() -> String {
    String::from("local")
}

fn default_output_dir() -> String {
    String::from("generated")
}

fn default_format() -> String {
    String::from("pytest")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Case generator used when `--provider` is not given (`local` or `remote`).
    #[serde(default = "default_provider")]
    pub default_provider: String,

    /// Directory generated test files are written to when `--out` is not given.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Output format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            output_dir: default_output_dir(),
            default_format: default_format(),
        }
    }
}

impl GeneralConfig {
    /// Whether the default provider calls out to a language model.
    #[must_use]
    pub fn defaults_to_remote(&self) -> bool {
        matches!(
            self.default_provider.trim().to_ascii_lowercase().as_str(),
            "remote" | "openai"
        )
    }
}
