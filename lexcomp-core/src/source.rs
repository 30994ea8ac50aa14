//! Source manifest and aggregation
//!
//! The core never walks directories. A [`SourceManifest`] lists the files of
//! each category; [`SourceCorpus`] reads and concatenates them. Texts can also
//! be supplied directly, which is what the unit tests do.

use crate::error::{CompileError, Result};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Kind of lexicon source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceCategory {
    /// Lemma definitions (`-lexeme` blocks)
    Lexemes,
    /// Lexical rules
    LexRules,
    /// Paradigm tables
    Paradigms,
}

impl SourceCategory {
    /// Every category, in compile order
    pub const ALL: [SourceCategory; 3] = [
        SourceCategory::Lexemes,
        SourceCategory::LexRules,
        SourceCategory::Paradigms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceCategory::Lexemes => "lexemes",
            SourceCategory::LexRules => "lexical rules",
            SourceCategory::Paradigms => "paradigms",
        }
    }
}

impl fmt::Display for SourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source files grouped by category, plus auxiliary resources to copy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceManifest {
    pub lexemes: Vec<PathBuf>,
    pub lex_rules: Vec<PathBuf>,
    pub paradigms: Vec<PathBuf>,
    /// Auxiliary files that exist in the working directory
    pub auxiliary: Vec<PathBuf>,
}

impl SourceManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files of one category, in concatenation order
    pub fn paths(&self, category: SourceCategory) -> &[PathBuf] {
        match category {
            SourceCategory::Lexemes => &self.lexemes,
            SourceCategory::LexRules => &self.lex_rules,
            SourceCategory::Paradigms => &self.paradigms,
        }
    }

    /// Append a file to a category
    pub fn push(&mut self, category: SourceCategory, path: impl Into<PathBuf>) {
        let path = path.into();
        match category {
            SourceCategory::Lexemes => self.lexemes.push(path),
            SourceCategory::LexRules => self.lex_rules.push(path),
            SourceCategory::Paradigms => self.paradigms.push(path),
        }
    }

    /// Total number of lexicon source files (auxiliary files excluded)
    pub fn source_count(&self) -> usize {
        self.lexemes.len() + self.lex_rules.len() + self.paradigms.len()
    }
}

/// Decode source bytes as UTF-8, dropping a leading byte-order mark.
///
/// Returns `None` when the bytes are not well-formed UTF-8.
pub fn decode_source(bytes: &[u8]) -> Option<String> {
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        None
    } else {
        Some(text.into_owned())
    }
}

/// Rewrite `\r\n` and lone `\r` line breaks as `\n`
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Concatenates the texts of one category
#[derive(Debug, Clone, Default)]
pub struct SourceAggregator {
    text: String,
    files: usize,
}

impl SourceAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one file's text, with line breaks normalized, followed by a
    /// single newline
    pub fn push_text(&mut self, text: &str) {
        self.text.push_str(&normalize_newlines(text));
        self.text.push('\n');
        self.files += 1;
    }

    /// Read, decode and append a file
    pub fn push_file(&mut self, path: &Path) -> Result<()> {
        let bytes = fs::read(path).map_err(|source| CompileError::ReadSource {
            path: path.to_path_buf(),
            source,
        })?;
        let text = decode_source(&bytes).ok_or_else(|| CompileError::Encoding {
            path: path.to_path_buf(),
        })?;
        log::debug!("read {} ({} bytes)", path.display(), bytes.len());
        self.push_text(&text);
        Ok(())
    }

    /// Number of files appended so far
    pub fn files(&self) -> usize {
        self.files
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Number of source files read per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SourceCounts {
    pub lexemes: usize,
    pub lex_rules: usize,
    pub paradigms: usize,
}

/// Aggregated source texts of a compile run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceCorpus {
    /// Raw lemma definitions, duplicates included
    pub lexemes: String,
    /// Lexical rules; `None` when no lexical-rule file exists
    pub lex_rules: Option<String>,
    /// Paradigm tables
    pub paradigms: String,
    pub counts: SourceCounts,
}

impl SourceCorpus {
    /// Read every file listed in the manifest
    pub fn load(manifest: &SourceManifest) -> Result<Self> {
        Self::load_with(manifest, |_| {})
    }

    /// Read every file listed in the manifest, calling `on_file` after each
    pub fn load_with<F>(manifest: &SourceManifest, mut on_file: F) -> Result<Self>
    where
        F: FnMut(&Path),
    {
        let mut lexemes = SourceAggregator::new();
        let mut lex_rules = SourceAggregator::new();
        let mut paradigms = SourceAggregator::new();

        for category in SourceCategory::ALL {
            let aggregator = match category {
                SourceCategory::Lexemes => &mut lexemes,
                SourceCategory::LexRules => &mut lex_rules,
                SourceCategory::Paradigms => &mut paradigms,
            };
            for path in manifest.paths(category) {
                aggregator.push_file(path)?;
                on_file(path);
            }
        }

        Ok(Self::from_aggregators(lexemes, lex_rules, paradigms))
    }

    /// Build a corpus from in-memory file texts
    pub fn from_texts(lexemes: &[&str], lex_rules: &[&str], paradigms: &[&str]) -> Self {
        let collect = |texts: &[&str]| {
            let mut aggregator = SourceAggregator::new();
            for text in texts {
                aggregator.push_text(text);
            }
            aggregator
        };
        Self::from_aggregators(collect(lexemes), collect(lex_rules), collect(paradigms))
    }

    fn from_aggregators(
        lexemes: SourceAggregator,
        lex_rules: SourceAggregator,
        paradigms: SourceAggregator,
    ) -> Self {
        let counts = SourceCounts {
            lexemes: lexemes.files(),
            lex_rules: lex_rules.files(),
            paradigms: paradigms.files(),
        };
        let lex_rules = if lex_rules.files() > 0 {
            Some(lex_rules.into_text())
        } else {
            None
        };

        Self {
            lexemes: lexemes.into_text(),
            lex_rules,
            paradigms: paradigms.into_text(),
            counts,
        }
    }
}
