//! Validate command implementation

use anyhow::Result;
use clap::Args;
use lexcomp_core::config::CompileConfig;
use lexcomp_core::SourceCategory;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CompileConfig::from_file(&self.config) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                for category in SourceCategory::ALL {
                    println!(
                        "  {}: {}*.{}",
                        category,
                        config.sources.prefix(category),
                        config.sources.extension
                    );
                }
                println!("  strict output: {}", config.output.strict_dir.display());
                println!(
                    "  nodiacritics output: {}",
                    config.output.nodiacritics_dir.display()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
