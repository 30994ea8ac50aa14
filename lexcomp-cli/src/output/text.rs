//! Plain text summary formatter

use super::ReportFormatter;
use anyhow::Result;
use lexcomp_core::CompileReport;
use std::io::{self, Write};

/// Plain text formatter - one statistic per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn write_report(&mut self, report: &CompileReport) -> Result<()> {
        let w = &mut self.writer;
        writeln!(
            w,
            "Sources: {} lexeme, {} lexical rule, {} paradigm files",
            report.sources.lexemes, report.sources.lex_rules, report.sources.paradigms
        )?;
        writeln!(
            w,
            "Lemmata: {} unique ({} scanned, {} duplicates dropped)",
            report.unique_blocks, report.blocks_scanned, report.duplicates_dropped
        )?;
        writeln!(
            w,
            "Alternates added: {} in lemmata, {} in paradigms",
            report.lexeme_tokens_expanded, report.paradigm_tokens_expanded
        )?;
        if report.lex_rules_diacritics > 0 {
            writeln!(
                w,
                "Warning: lexical rules contain {} diacritic letters without alternates",
                report.lex_rules_diacritics
            )?;
        }
        for path in &report.files_written {
            writeln!(w, "Wrote {}", path.display())?;
        }
        for path in &report.auxiliary_copied {
            writeln!(w, "Copied {}", path.display())?;
        }
        w.flush()?;
        Ok(())
    }
}
