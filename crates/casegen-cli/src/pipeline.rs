//! Generation pipeline: load -> generate -> validate -> render.
//!
//! The output format is checked before any other work; a bad `--format`
//! leaves the output directory untouched.
//! Validation failures abort the run before anything is written.

use std::path::{Path, PathBuf};

use casegen_config::{CaseGenConfig, OpenAiConfig};
use casegen_core::{ErrorKind, Specification, ValidationError, validate_test_cases};
use casegen_loader::{LoaderError, SpecSource, load_spec};
use casegen_provider::{CaseGenerator, ProviderError, ProviderKind, build_generator};
use casegen_render::{OutputFormat, RenderError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Loader(#[from] LoaderError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unsupported format or unwritable artifact.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Loader(error) => error.kind(),
            Self::Provider(error) => error.kind(),
            Self::Validation(_) => ErrorKind::Validation,
            Self::CreateDir { .. } => ErrorKind::Io,
            Self::Render(error) => error.kind(),
        }
    }
}

/// Turns specifications into test files.
///
/// The default provider is fixed at construction; nothing reads the
/// environment after that.
pub struct Pipeline {
    default_provider: String,
    openai: OpenAiConfig,
}

impl Pipeline {
    pub fn new(default_provider: impl Into<String>, openai: OpenAiConfig) -> Self {
        Self {
            default_provider: default_provider.into(),
            openai,
        }
    }

    pub fn from_config(config: &CaseGenConfig) -> Self {
        Self::new(config.general.default_provider.clone(), config.openai.clone())
    }

    /// Load `source`, generate with `provider` (or the default provider) and
    /// write `{out_dir}/test_{slug}.py`. Returns the written path.
    pub async fn run(
        &self,
        source: &SpecSource,
        provider: Option<&str>,
        out_dir: &Path,
        format: &str,
    ) -> Result<PathBuf, PipelineError> {
        let format = format.parse::<OutputFormat>()?;
        let spec = load_spec(source)?;

        let kind = provider
            .unwrap_or(self.default_provider.as_str())
            .parse::<ProviderKind>()?;
        tracing::debug!(provider = %kind, spec = %spec.title, "selected generator");
        let generator = build_generator(kind, &self.openai);

        Self::run_spec(&spec, generator.as_ref(), out_dir, format).await
    }

    /// Run an already-loaded specification through `generator`.
    pub async fn run_spec(
        spec: &Specification,
        generator: &dyn CaseGenerator,
        out_dir: &Path,
        format: OutputFormat,
    ) -> Result<PathBuf, PipelineError> {
        let cases = generator.generate(spec).await?;

        let report = validate_test_cases(&cases);
        tracing::debug!(
            cases = report.cases_checked,
            steps = report.steps_checked,
            errors = report.errors.len(),
            "validated generated cases"
        );
        report.into_result()?;

        std::fs::create_dir_all(out_dir).map_err(|source| PipelineError::CreateDir {
            path: out_dir.to_path_buf(),
            source,
        })?;

        let path = out_dir.join(format.file_name(&spec.slug()));
        format.render_to(&path, &cases, spec)?;
        Ok(path)
    }
}
