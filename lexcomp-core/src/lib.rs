//! Lexicon compiler for uniparser grammars
//!
//! Merges hand-authored lexicon sources (lemma blocks, lexical rules,
//! paradigm tables) into two datasets consumed by the morphological
//! analyzer:
//!
//! - **strict**: deduplicated lemmata and paradigms exactly as authored;
//! - **nodiacritics**: the same texts where every stem or inflection token
//!   containing `ç`, `ţ` or `ş` gains a plain alternate (`qaţa//qata`), so
//!   text typed without diacritics still matches.
//!
//! # Example
//!
//! ```rust
//! use lexcomp_core::{Compiler, SourceCorpus};
//!
//! let block = "-lexeme\n lex: qal-\n stem: qala qaţa\n gramm: V\n";
//! let corpus = SourceCorpus::from_texts(&[block, block], &[], &[]);
//! let compiled = Compiler::default().compile(&corpus);
//!
//! assert_eq!(compiled.report.unique_blocks, 1);
//! assert!(compiled.nodiacritics.lexemes.contains(" stem: qala qaţa//qata\n"));
//! ```

pub mod compiler;
pub mod config;
pub mod dataset;
pub mod diacritics;
pub mod error;
pub mod expand;
pub mod lemma;
pub mod source;

pub use compiler::{compile_and_write, CompileReport, CompiledDatasets, Compiler};
pub use config::CompileConfig;
pub use dataset::{Dataset, DatasetVariant, DatasetWriter, OutputLayout};
pub use diacritics::DiacriticTable;
pub use error::{CompileError, Result};
pub use expand::{FieldKind, VariantExpander};
pub use lemma::{deduplicate, LemmaSet};
pub use source::{SourceCategory, SourceCorpus, SourceManifest};
