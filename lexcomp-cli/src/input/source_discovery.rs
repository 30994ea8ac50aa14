//! Source discovery using glob
//!
//! Resolves the working directory into a [`SourceManifest`] by file name:
//! `<prefix>*.<extension>` per category, plus the configured auxiliary files
//! that exist.

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::{glob, Pattern};
use lexcomp_core::config::CompileConfig;
use lexcomp_core::{SourceCategory, SourceManifest};
use std::path::{Path, PathBuf};

/// Build the manifest for `dir`
pub fn discover_sources(dir: &Path, config: &CompileConfig) -> Result<SourceManifest> {
    if !dir.is_dir() {
        return Err(CliError::DirectoryNotFound(dir.display().to_string()).into());
    }

    let mut manifest = SourceManifest::new();
    for category in SourceCategory::ALL {
        for path in resolve_category(dir, config, category)? {
            manifest.push(category, path);
        }
    }

    manifest.auxiliary = config
        .auxiliary_paths(dir)
        .into_iter()
        .filter(|path| path.is_file())
        .collect();

    log::info!(
        "found {} lexeme, {} lexical rule and {} paradigm files in {}",
        manifest.lexemes.len(),
        manifest.lex_rules.len(),
        manifest.paradigms.len(),
        dir.display()
    );
    Ok(manifest)
}

/// Files of one category, sorted by name
fn resolve_category(
    dir: &Path,
    config: &CompileConfig,
    category: SourceCategory,
) -> Result<Vec<PathBuf>> {
    let dir_str = dir
        .to_str()
        .ok_or_else(|| CliError::InvalidPattern(dir.display().to_string()))?;
    let pattern = format!(
        "{}/{}*.{}",
        Pattern::escape(dir_str),
        Pattern::escape(config.sources.prefix(category)),
        Pattern::escape(&config.sources.extension)
    );

    let paths = glob(&pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

    let mut files = Vec::new();
    for path_result in paths {
        let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
        let belongs = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| config.sources.classify(name))
            == Some(category);
        if belongs && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn test_discover_by_prefix() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        for name in [
            "lexemes_verbs.txt",
            "lexemes_nouns.txt",
            "lexrules.txt",
            "paradigms.txt",
            "paradigms.csv",
            "notes_lexemes.txt",
            "bad_analyses.txt",
        ] {
            touch(dir, name);
        }
        fs::create_dir(dir.join("lexemes_dir.txt")).unwrap();

        let manifest = discover_sources(dir, &CompileConfig::default()).unwrap();
        assert_eq!(
            manifest.lexemes,
            vec![dir.join("lexemes_nouns.txt"), dir.join("lexemes_verbs.txt")]
        );
        assert_eq!(manifest.lex_rules, vec![dir.join("lexrules.txt")]);
        assert_eq!(manifest.paradigms, vec![dir.join("paradigms.txt")]);
        assert_eq!(manifest.auxiliary, vec![dir.join("bad_analyses.txt")]);
    }

    #[test]
    fn test_discover_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = discover_sources(temp_dir.path(), &CompileConfig::default()).unwrap();
        assert_eq!(manifest, SourceManifest::new());
    }

    #[test]
    fn test_discover_custom_prefix() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "tables_v.txt");
        touch(temp_dir.path(), "paradigms.txt");

        let config =
            CompileConfig::from_toml_str("[sources]\nparadigms_prefix = \"tables\"\n").unwrap();
        let manifest = discover_sources(temp_dir.path(), &config).unwrap();
        assert_eq!(manifest.paradigms, vec![temp_dir.path().join("tables_v.txt")]);
    }

    #[test]
    fn test_discover_missing_directory() {
        let err = discover_sources(Path::new("/nonexistent/grammar"), &CompileConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("Directory not found"));
    }
}
