use clap::Parser;

pub mod root_commands;

pub use root_commands::{Commands, GenerateArgs};

/// Top-level CLI parser for the `casegen` binary.
#[derive(Debug, Parser)]
#[command(name = "casegen", version, about = "Generate test skeletons from specifications")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}
