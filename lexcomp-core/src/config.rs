//! Compiler configuration
//!
//! This module defines the TOML schema of `lexcomp.toml`. Every key has a
//! default, so an empty file (or no file at all) reproduces the standard
//! uniparser layout.

use crate::dataset::OutputLayout;
use crate::error::{CompileError, Result};
use crate::source::SourceCategory;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Commented configuration template with the default values
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../configs/lexcomp.toml");

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "lexcomp.toml";

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileConfig {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub auxiliary: AuxiliaryConfig,
}

/// Source file naming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Extension without the leading dot
    pub extension: String,
    pub lexemes_prefix: String,
    pub lex_rules_prefix: String,
    pub paradigms_prefix: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            extension: "txt".to_string(),
            lexemes_prefix: "lexemes".to_string(),
            lex_rules_prefix: "lexrules".to_string(),
            paradigms_prefix: "paradigms".to_string(),
        }
    }
}

impl SourcesConfig {
    /// File name prefix of a category
    pub fn prefix(&self, category: SourceCategory) -> &str {
        match category {
            SourceCategory::Lexemes => &self.lexemes_prefix,
            SourceCategory::LexRules => &self.lex_rules_prefix,
            SourceCategory::Paradigms => &self.paradigms_prefix,
        }
    }

    /// Category of a file name, if it names a source file
    pub fn classify(&self, file_name: &str) -> Option<SourceCategory> {
        let stem = file_name
            .strip_suffix(self.extension.as_str())?
            .strip_suffix('.')?;
        SourceCategory::ALL
            .into_iter()
            .find(|&category| stem.starts_with(self.prefix(category)))
    }

    fn validate(&self) -> Result<()> {
        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(CompileError::Config(format!(
                "source extension must be non-empty and given without a dot, got {:?}",
                self.extension
            )));
        }

        for category in SourceCategory::ALL {
            if self.prefix(category).is_empty() {
                return Err(CompileError::Config(format!(
                    "empty file prefix for {category}"
                )));
            }
        }

        for a in SourceCategory::ALL {
            for b in SourceCategory::ALL {
                if a != b && self.prefix(a).starts_with(self.prefix(b)) {
                    return Err(CompileError::Config(format!(
                        "file prefix {:?} for {a} overlaps prefix {:?} for {b}",
                        self.prefix(a),
                        self.prefix(b)
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Output roots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub strict_dir: PathBuf,
    pub nodiacritics_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            strict_dir: PathBuf::from("uniparser_urmi/data_strict"),
            nodiacritics_dir: PathBuf::from("uniparser_urmi/data_nodiacritics"),
        }
    }
}

impl OutputConfig {
    pub fn layout(&self) -> OutputLayout {
        OutputLayout::new(&self.strict_dir, &self.nodiacritics_dir)
    }
}

/// Resources copied verbatim into both datasets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuxiliaryConfig {
    /// Bare file names looked up in the working directory
    pub files: Vec<String>,
}

impl Default for AuxiliaryConfig {
    fn default() -> Self {
        Self {
            files: vec![
                "bad_analyses.txt".to_string(),
                "urmi_disambiguation.cg3".to_string(),
            ],
        }
    }
}

impl CompileConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: CompileConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CompileError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            CompileError::Config(msg) => CompileError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Check prefixes, output roots and auxiliary names
    pub fn validate(&self) -> Result<()> {
        self.sources.validate()?;

        if self.output.strict_dir == self.output.nodiacritics_dir {
            return Err(CompileError::Config(format!(
                "strict and nodiacritics output share the directory {}",
                self.output.strict_dir.display()
            )));
        }

        for name in &self.auxiliary.files {
            let path = Path::new(name);
            if name.is_empty() || path.file_name() != Some(path.as_os_str()) {
                return Err(CompileError::Config(format!(
                    "auxiliary entry {name:?} must be a bare file name"
                )));
            }
        }

        Ok(())
    }

    /// Auxiliary file paths under `dir`
    pub fn auxiliary_paths(&self, dir: &Path) -> Vec<PathBuf> {
        self.auxiliary.files.iter().map(|name| dir.join(name)).collect()
    }
}
