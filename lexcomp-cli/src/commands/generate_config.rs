//! Generate config command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use lexcomp_core::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TOML};
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = CONFIG_FILE_NAME)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, DEFAULT_CONFIG_TOML)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!("Validate your changes with:");
        println!("   lexcomp validate --config {}", self.output.display());
        Ok(())
    }
}
