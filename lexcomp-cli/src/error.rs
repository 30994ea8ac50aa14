//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Working directory not found or not a directory
    DirectoryNotFound(String),
    /// Source file pattern could not be built from the configuration
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Compile error from core
    CompileError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::DirectoryNotFound(path) => write!(f, "Directory not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::CompileError(msg) => write!(f, "Compile error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<lexcomp_core::CompileError> for CliError {
    fn from(err: lexcomp_core::CompileError) -> Self {
        match err {
            lexcomp_core::CompileError::Config(msg) => CliError::ConfigError(msg),
            other => CliError::CompileError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_not_found_display() {
        let error = CliError::DirectoryNotFound("grammar".to_string());
        assert_eq!(error.to_string(), "Directory not found: grammar");
    }

    #[test]
    fn test_invalid_pattern_display() {
        let error = CliError::InvalidPattern("[lexemes*.txt".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [lexemes*.txt");
    }

    #[test]
    fn test_from_core_config_error() {
        let error: CliError = lexcomp_core::CompileError::Config("bad prefix".to_string()).into();
        assert_eq!(error.to_string(), "Configuration error: bad prefix");
    }

    #[test]
    fn test_from_core_compile_error() {
        let error: CliError = lexcomp_core::CompileError::Encoding {
            path: "lexemes.txt".into(),
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Compile error: source lexemes.txt is not valid UTF-8"
        );
    }

    #[test]
    fn test_cli_result_type_alias() {
        let failure: CliResult<()> = Err(CliError::ConfigError("x".to_string()).into());
        assert!(failure.unwrap_err().to_string().contains("Configuration error"));
    }
}
