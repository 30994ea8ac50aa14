//! Compile summary output

use anyhow::Result;
use lexcomp_core::CompileReport;

/// Trait for summary formatters
pub trait ReportFormatter {
    /// Format and output the summary of a compile run
    fn write_report(&mut self, report: &CompileReport) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
