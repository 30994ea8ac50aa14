//! Compiler error types
//!
//! Missing sources and malformed lemma blocks are not errors: they yield
//! empty text or are dropped during deduplication. Everything listed here
//! aborts the compile.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while compiling the lexicon datasets
#[derive(Error, Debug)]
pub enum CompileError {
    /// A source file could not be read
    #[error("failed to read source {path}: {source}")]
    ReadSource {
        /// The source file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A source file is not valid UTF-8
    #[error("source {path} is not valid UTF-8")]
    Encoding {
        /// The source file path
        path: PathBuf,
    },

    /// An output file could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        /// The output file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An auxiliary resource could not be copied into an output root
    #[error("failed to copy {from} to {to}: {source}")]
    CopyAuxiliary {
        /// The auxiliary file in the working directory
        from: PathBuf,
        /// The destination path
        to: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An output root does not exist or is not a directory
    #[error("output directory {0} does not exist")]
    MissingOutputRoot(PathBuf),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for CompileError {
    fn from(err: toml::de::Error) -> Self {
        CompileError::Config(err.to_string())
    }
}

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;
