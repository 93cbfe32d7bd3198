use std::path::PathBuf;

use anyhow::Context;
use casegen_config::CaseGenConfig;
use casegen_loader::SpecSource;

use crate::cli::GenerateArgs;
use crate::pipeline::Pipeline;

/// Handle `casegen generate`.
pub async fn handle(args: &GenerateArgs, config: &CaseGenConfig) -> anyhow::Result<()> {
    let source = spec_source(args)?;
    let out_dir = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.general.output_dir));
    let format = args
        .format
        .as_deref()
        .unwrap_or(config.general.default_format.as_str());

    let pipeline = Pipeline::from_config(config);
    let path = pipeline
        .run(&source, args.provider.as_deref(), &out_dir, format)
        .await
        .inspect_err(|error| tracing::debug!(kind = %error.kind(), "generation failed"))
        .with_context(|| format!("failed to generate tests from {}", source.path().display()))?;

    println!("Generated: {}", path.display());
    Ok(())
}

fn spec_source(args: &GenerateArgs) -> anyhow::Result<SpecSource> {
    match (&args.spec, &args.spec_excel) {
        (_, Some(path)) => Ok(SpecSource::Excel(path.clone())),
        (Some(path), None) => Ok(SpecSource::Yaml(path.clone())),
        (None, None) => anyhow::bail!("either --spec or --spec-excel is required"),
    }
}
