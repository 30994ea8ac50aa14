//! Output datasets and the writer that persists them
//!
//! Both output roots must already exist; the writer never creates
//! directories.

use crate::error::{CompileError, Result};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the lemmata dataset file
pub const LEXEMES_FILE: &str = "lexemes.txt";
/// File name of the lexical rules dataset file
pub const LEX_RULES_FILE: &str = "lex_rules.txt";
/// File name of the paradigms dataset file
pub const PARADIGMS_FILE: &str = "paradigms.txt";

/// Which of the two parallel datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetVariant {
    /// Diacritics preserved exactly as authored
    Strict,
    /// Diacritic-bearing tokens carry a plain `//` alternate
    Nodiacritics,
}

impl DatasetVariant {
    pub const ALL: [DatasetVariant; 2] = [DatasetVariant::Strict, DatasetVariant::Nodiacritics];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetVariant::Strict => "strict",
            DatasetVariant::Nodiacritics => "nodiacritics",
        }
    }
}

impl fmt::Display for DatasetVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Texts of one output dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub variant: DatasetVariant,
    pub lexemes: String,
    /// Written only when present
    pub lex_rules: Option<String>,
    pub paradigms: String,
}

/// Output roots of the two datasets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub strict: PathBuf,
    pub nodiacritics: PathBuf,
}

impl OutputLayout {
    pub fn new(strict: impl Into<PathBuf>, nodiacritics: impl Into<PathBuf>) -> Self {
        Self {
            strict: strict.into(),
            nodiacritics: nodiacritics.into(),
        }
    }

    pub fn root(&self, variant: DatasetVariant) -> &Path {
        match variant {
            DatasetVariant::Strict => &self.strict,
            DatasetVariant::Nodiacritics => &self.nodiacritics,
        }
    }

    /// Resolve relative roots against `base`
    pub fn resolve(&self, base: &Path) -> Self {
        Self {
            strict: base.join(&self.strict),
            nodiacritics: base.join(&self.nodiacritics),
        }
    }
}

/// Writes datasets and auxiliary resources into the output roots
#[derive(Debug, Clone)]
pub struct DatasetWriter {
    layout: OutputLayout,
}

impl DatasetWriter {
    pub fn new(layout: OutputLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Write one dataset into its root; returns the files written
    pub fn write(&self, dataset: &Dataset) -> Result<Vec<PathBuf>> {
        let root = self.existing_root(dataset.variant)?;
        let mut written = Vec::with_capacity(3);

        written.push(write_file(root.join(LEXEMES_FILE), &dataset.lexemes)?);
        if let Some(lex_rules) = &dataset.lex_rules {
            written.push(write_file(root.join(LEX_RULES_FILE), lex_rules)?);
        }
        written.push(write_file(root.join(PARADIGMS_FILE), &dataset.paradigms)?);

        log::info!("wrote {} dataset to {}", dataset.variant, root.display());
        Ok(written)
    }

    /// Copy auxiliary files unchanged into both roots.
    ///
    /// Files that do not exist are skipped. Returns the destinations written.
    pub fn copy_auxiliary(&self, files: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut copied = Vec::new();

        for from in files {
            let Some(name) = from.file_name().filter(|_| from.is_file()) else {
                log::debug!("auxiliary file {} not present, skipping", from.display());
                continue;
            };
            for variant in DatasetVariant::ALL {
                let to = self.existing_root(variant)?.join(name);
                fs::copy(from, &to).map_err(|source| CompileError::CopyAuxiliary {
                    from: from.clone(),
                    to: to.clone(),
                    source,
                })?;
                log::debug!("copied {} to {}", from.display(), to.display());
                copied.push(to);
            }
        }

        Ok(copied)
    }

    fn existing_root(&self, variant: DatasetVariant) -> Result<&Path> {
        let root = self.layout.root(variant);
        if root.is_dir() {
            Ok(root)
        } else {
            Err(CompileError::MissingOutputRoot(root.to_path_buf()))
        }
    }
}

fn write_file(path: PathBuf, contents: &str) -> Result<PathBuf> {
    fs::write(&path, contents).map_err(|source| CompileError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
