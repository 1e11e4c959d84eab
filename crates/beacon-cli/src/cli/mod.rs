use beacon_config::GeneralConfig;
use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `bcn` binary.
#[derive(Debug, Parser)]
#[command(name = "bcn", version, about = "Beacon - company directory client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL, overriding configuration
    #[arg(short, long, global = true)]
    pub backend: Option<String>,
}

impl Cli {
    /// Resolve global flags, taking the output format from config when absent.
    #[must_use]
    pub fn global_flags(&self, general: &GeneralConfig) -> GlobalFlags {
        GlobalFlags {
            format: self
                .format
                .unwrap_or_else(|| OutputFormat::from_config(&general.default_format)),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
