//! Build command implementation

use crate::error::CliError;
use crate::input::{discover_sources, load_config};
use crate::output::{JsonFormatter, ReportFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use lexcomp_core::{Compiler, DatasetWriter, DiacriticTable, SourceCorpus};
use std::io;
use std::path::PathBuf;

/// Arguments for the build command
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Working directory holding the lexicon sources
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Configuration file (default: lexcomp.toml in the working directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Summary format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: SummaryFormat,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported summary formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SummaryFormat {
    /// One statistic per line
    Text,
    /// JSON object
    Json,
}

impl BuildArgs {
    /// Execute the build command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting lexicon compile in {}", self.dir.display());
        log::debug!("Arguments: {:?}", self);

        let config = load_config(&self.dir, self.config.as_deref())?;
        let manifest = discover_sources(&self.dir, &config)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(manifest.source_count() as u64);
        let corpus = SourceCorpus::load_with(&manifest, |path| progress.file_read(path))
            .map_err(CliError::from)?;
        progress.finish();

        let compiled = Compiler::new(DiacriticTable::urmi()).compile(&corpus);
        let writer = DatasetWriter::new(config.output.layout().resolve(&self.dir));
        let report = compiled
            .write(&writer, &manifest.auxiliary)
            .map_err(CliError::from)?;

        match self.format {
            SummaryFormat::Text => TextFormatter::stdout().write_report(&report),
            SummaryFormat::Json => JsonFormatter::new(io::stdout()).write_report(&report),
        }
    }
}
