//! List-sources command implementation

use crate::input::{discover_sources, load_config};
use anyhow::Result;
use clap::Args;
use lexcomp_core::{SourceCategory, SourceManifest};
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the list-sources command
#[derive(Debug, Args)]
pub struct ListSourcesArgs {
    /// Working directory holding the lexicon sources
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Configuration file (default: lexcomp.toml in the working directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ListSourcesArgs {
    /// Execute the list-sources command
    pub fn execute(&self) -> Result<()> {
        let config = load_config(&self.dir, self.config.as_deref())?;
        let manifest = discover_sources(&self.dir, &config)?;
        write_manifest(&mut io::stdout().lock(), &manifest)
    }
}

fn write_manifest<W: Write>(w: &mut W, manifest: &SourceManifest) -> Result<()> {
    for category in SourceCategory::ALL {
        let paths = manifest.paths(category);
        writeln!(w, "{} ({}):", category, paths.len())?;
        for path in paths {
            writeln!(w, "  {}", path.display())?;
        }
    }
    writeln!(w, "auxiliary ({}):", manifest.auxiliary.len())?;
    for path in &manifest.auxiliary {
        writeln!(w, "  {}", path.display())?;
    }
    Ok(())
}
