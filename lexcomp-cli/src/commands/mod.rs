//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod build;
pub mod generate_config;
pub mod list_sources;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compile the lexicon sources of a directory into both datasets
    Build(build::BuildArgs),

    /// Show which files would be compiled
    ListSources(list_sources::ListSourcesArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// Write a configuration template with the default values
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Build(args) => args.execute(),
            Commands::ListSources(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level.
///
/// `RUST_LOG` overrides the level derived from `-v`.
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A logger may already be installed when commands run inside tests
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}
