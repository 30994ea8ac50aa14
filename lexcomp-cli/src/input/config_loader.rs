//! Configuration lookup

use anyhow::{Context, Result};
use lexcomp_core::config::{CompileConfig, CONFIG_FILE_NAME};
use std::path::Path;

/// Load the configuration for a compile in `dir`.
///
/// An explicit file wins; otherwise `lexcomp.toml` in `dir` is used when it
/// exists, and the built-in defaults when it does not.
pub fn load_config(dir: &Path, explicit: Option<&Path>) -> Result<CompileConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                log::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
                return Ok(CompileConfig::default());
            }
            candidate
        }
    };

    log::info!("loading configuration from {}", path.display());
    CompileConfig::from_file(&path)
        .with_context(|| format!("Failed to load configuration: {}", path.display()))
}
