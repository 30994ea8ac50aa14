//! Compile pipeline
//!
//! corpus -> deduplicated lemmata -> strict dataset (verbatim) and
//! nodiacritics dataset (expanded once) -> writer.

use crate::dataset::{Dataset, DatasetVariant, DatasetWriter};
use crate::diacritics::DiacriticTable;
use crate::error::Result;
use crate::expand::VariantExpander;
use crate::lemma::LemmaSet;
use crate::source::{SourceCorpus, SourceCounts, SourceManifest};
use serde::Serialize;
use std::path::PathBuf;

/// Statistics of a compile run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompileReport {
    pub sources: SourceCounts,
    /// Lemma blocks found, duplicates included
    pub blocks_scanned: usize,
    pub unique_blocks: usize,
    pub duplicates_dropped: usize,
    /// Tokens given a diacritic-free alternate in the lemmata
    pub lexeme_tokens_expanded: usize,
    /// Tokens given a diacritic-free alternate in the paradigms
    pub paradigm_tokens_expanded: usize,
    pub lex_rules_present: bool,
    /// Diacritic letters found in lexical rules, which are never expanded
    pub lex_rules_diacritics: usize,
    pub files_written: Vec<PathBuf>,
    pub auxiliary_copied: Vec<PathBuf>,
}

/// The two datasets of a compile run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledDatasets {
    pub strict: Dataset,
    pub nodiacritics: Dataset,
    pub report: CompileReport,
}

impl CompiledDatasets {
    pub fn dataset(&self, variant: DatasetVariant) -> &Dataset {
        match variant {
            DatasetVariant::Strict => &self.strict,
            DatasetVariant::Nodiacritics => &self.nodiacritics,
        }
    }

    /// Write both datasets and copy the auxiliary files; returns the
    /// completed report
    pub fn write(&self, writer: &DatasetWriter, auxiliary: &[PathBuf]) -> Result<CompileReport> {
        let mut report = self.report.clone();
        for variant in DatasetVariant::ALL {
            report.files_written.extend(writer.write(self.dataset(variant))?);
        }
        report.auxiliary_copied = writer.copy_auxiliary(auxiliary)?;
        Ok(report)
    }
}

/// Builds strict and nodiacritics datasets from a source corpus
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    expander: VariantExpander,
}

impl Compiler {
    pub fn new(table: DiacriticTable) -> Self {
        Self {
            expander: VariantExpander::new(table),
        }
    }

    pub fn compile(&self, corpus: &SourceCorpus) -> CompiledDatasets {
        if corpus.lexemes.is_empty() {
            log::warn!("no lemma definitions found");
        }
        if corpus.paradigms.is_empty() {
            log::warn!("no paradigm tables found");
        }

        let lemmata = LemmaSet::from_text(&corpus.lexemes);
        log::info!(
            "{} lemma blocks, {} unique, {} duplicates dropped",
            lemmata.scanned(),
            lemmata.len(),
            lemmata.duplicates()
        );
        let lexemes = lemmata.to_text();

        let lexemes_expanded = self.expander.expand(&lexemes);
        let paradigms_expanded = self.expander.expand(&corpus.paradigms);
        log::info!(
            "expanded {} lemma tokens and {} paradigm tokens",
            lexemes_expanded.tokens_expanded,
            paradigms_expanded.tokens_expanded
        );

        let lex_rules_diacritics = corpus
            .lex_rules
            .as_deref()
            .map_or(0, |text| self.expander.table().count(text));
        if lex_rules_diacritics > 0 {
            log::warn!(
                "lexical rules contain {lex_rules_diacritics} diacritic letters; \
                 they are copied to both datasets without alternates"
            );
        }

        let report = CompileReport {
            sources: corpus.counts,
            blocks_scanned: lemmata.scanned(),
            unique_blocks: lemmata.len(),
            duplicates_dropped: lemmata.duplicates(),
            lexeme_tokens_expanded: lexemes_expanded.tokens_expanded,
            paradigm_tokens_expanded: paradigms_expanded.tokens_expanded,
            lex_rules_present: corpus.lex_rules.is_some(),
            lex_rules_diacritics,
            ..CompileReport::default()
        };

        CompiledDatasets {
            nodiacritics: Dataset {
                variant: DatasetVariant::Nodiacritics,
                lexemes: lexemes_expanded.text,
                lex_rules: corpus.lex_rules.clone(),
                paradigms: paradigms_expanded.text,
            },
            strict: Dataset {
                variant: DatasetVariant::Strict,
                lexemes,
                lex_rules: corpus.lex_rules.clone(),
                paradigms: corpus.paradigms.clone(),
            },
            report,
        }
    }
}

/// Read the manifest, compile with the Urmi table and write both datasets
pub fn compile_and_write(manifest: &SourceManifest, writer: &DatasetWriter) -> Result<CompileReport> {
    let corpus = SourceCorpus::load(manifest)?;
    Compiler::new(DiacriticTable::urmi())
        .compile(&corpus)
        .write(writer, &manifest.auxiliary)
}
