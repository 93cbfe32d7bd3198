use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a test file from a YAML or Excel specification.
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
#[command(group(
    clap::ArgGroup::new("source")
        .required(true)
        .args(["spec", "spec_excel"]),
))]
pub struct GenerateArgs {
    /// Path to a YAML specification
    #[arg(short, long)]
    pub spec: Option<PathBuf>,

    /// Path to an Excel specification (first worksheet is read)
    #[arg(long)]
    pub spec_excel: Option<PathBuf>,

    /// Generator: local or remote [default: general.default_provider]
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Output directory [default: general.output_dir]
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output format [default: general.default_format]
    #[arg(short, long)]
    pub format: Option<String>,
}
