use clap::Parser;
use lexcomp_cli::commands::Commands;
use std::process::ExitCode;

/// Compile uniparser lexicon sources into strict and diacritic-free datasets
#[derive(Debug, Parser)]
#[command(name = "lexcomp", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
