//! End-to-end compile tests against a temporary working directory

use lexcomp_core::dataset::{LEXEMES_FILE, LEX_RULES_FILE, PARADIGMS_FILE};
use lexcomp_core::{
    compile_and_write, CompileError, DatasetVariant, DatasetWriter, OutputLayout,
    SourceCategory, SourceManifest,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const QAL: &str = "-lexeme\n lex: qal-\n stem: qala qaţa\n gramm: V\n paradigm: V1\n";
const PARADIGMS: &str = "-paradigm: V1\n -flex: .a//.e\n  gramm: inf\n -flex: .ţa|.a\n  gramm: sg\n";

struct Workspace {
    dir: TempDir,
    manifest: SourceManifest,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("out/strict")).unwrap();
        fs::create_dir_all(dir.path().join("out/nodia")).unwrap();
        Self {
            dir,
            manifest: SourceManifest::new(),
        }
    }

    fn add(&mut self, category: SourceCategory, name: &str, content: &[u8]) {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        self.manifest.push(category, path);
    }

    fn writer(&self) -> DatasetWriter {
        DatasetWriter::new(OutputLayout::new("out/strict", "out/nodia").resolve(self.dir.path()))
    }

    fn root(&self, variant: DatasetVariant) -> std::path::PathBuf {
        match variant {
            DatasetVariant::Strict => self.dir.path().join("out/strict"),
            DatasetVariant::Nodiacritics => self.dir.path().join("out/nodia"),
        }
    }

    fn read(&self, variant: DatasetVariant, file: &str) -> String {
        fs::read_to_string(self.root(variant).join(file)).unwrap()
    }
}

fn count_blocks(text: &str) -> usize {
    text.lines().filter(|line| *line == "-lexeme").count()
}

#[test]
fn test_duplicate_lemma_across_files() {
    let mut ws = Workspace::new();
    ws.add(SourceCategory::Lexemes, "lexemes_verbs.txt", QAL.as_bytes());
    ws.add(SourceCategory::Lexemes, "lexemes_more.txt", QAL.as_bytes());
    ws.add(SourceCategory::Paradigms, "paradigms.txt", PARADIGMS.as_bytes());

    let report = compile_and_write(&ws.manifest, &ws.writer()).unwrap();
    assert_eq!(report.unique_blocks, 1);
    assert_eq!(report.duplicates_dropped, 1);

    let strict = ws.read(DatasetVariant::Strict, LEXEMES_FILE);
    let nodia = ws.read(DatasetVariant::Nodiacritics, LEXEMES_FILE);
    assert_eq!(count_blocks(&strict), 1);
    assert_eq!(count_blocks(&nodia), 1);
    assert!(strict.contains(" stem: qala qaţa\n"));
    assert!(nodia.contains(" stem: qala qaţa//qata\n"));
    assert!(nodia.contains(" lex: qal-\n"));
}

#[test]
fn test_paradigms_strict_verbatim_and_expanded() {
    let mut ws = Workspace::new();
    ws.add(SourceCategory::Lexemes, "lexemes.txt", QAL.as_bytes());
    ws.add(SourceCategory::Paradigms, "paradigms.txt", PARADIGMS.as_bytes());

    compile_and_write(&ws.manifest, &ws.writer()).unwrap();

    assert_eq!(
        ws.read(DatasetVariant::Strict, PARADIGMS_FILE),
        format!("{PARADIGMS}\n")
    );
    let nodia = ws.read(DatasetVariant::Nodiacritics, PARADIGMS_FILE);
    assert!(nodia.contains(" -flex: .a//.e\n"));
    assert!(nodia.contains(" -flex: .ţa|.a//.ta|.a\n"));
}

#[test]
fn test_no_lex_rules_file_without_sources() {
    let mut ws = Workspace::new();
    ws.add(SourceCategory::Lexemes, "lexemes.txt", QAL.as_bytes());
    ws.add(SourceCategory::Paradigms, "paradigms.txt", PARADIGMS.as_bytes());

    let report = compile_and_write(&ws.manifest, &ws.writer()).unwrap();
    assert!(!report.lex_rules_present);
    assert_eq!(report.files_written.len(), 4);
    for variant in DatasetVariant::ALL {
        assert!(!ws.root(variant).join(LEX_RULES_FILE).exists());
        assert!(ws.root(variant).join(LEXEMES_FILE).exists());
    }
}

#[test]
fn test_lex_rules_written_to_both_roots() {
    let mut ws = Workspace::new();
    ws.add(SourceCategory::Lexemes, "lexemes.txt", QAL.as_bytes());
    ws.add(SourceCategory::LexRules, "lexrules.txt", "-lexrule\n stem: ţ\n".as_bytes());
    ws.add(SourceCategory::Paradigms, "paradigms.txt", PARADIGMS.as_bytes());

    let report = compile_and_write(&ws.manifest, &ws.writer()).unwrap();
    assert!(report.lex_rules_present);
    assert_eq!(report.lex_rules_diacritics, 1);
    for variant in DatasetVariant::ALL {
        assert_eq!(ws.read(variant, LEX_RULES_FILE), "-lexrule\n stem: ţ\n\n");
    }
}

#[test]
fn test_bom_is_stripped() {
    let mut ws = Workspace::new();
    let mut with_bom = vec![0xEF, 0xBB, 0xBF];
    with_bom.extend_from_slice(QAL.as_bytes());
    ws.add(SourceCategory::Lexemes, "lexemes_bom.txt", &with_bom);
    ws.add(SourceCategory::Lexemes, "lexemes_plain.txt", QAL.as_bytes());
    ws.add(SourceCategory::Paradigms, "paradigms.txt", PARADIGMS.as_bytes());

    let report = compile_and_write(&ws.manifest, &ws.writer()).unwrap();
    // Without BOM removal the first header would not match and only one block would be scanned
    assert_eq!(report.blocks_scanned, 2);
    assert_eq!(report.unique_blocks, 1);
}

#[test]
fn test_crlf_copy_merges_with_lf_copy() {
    let mut ws = Workspace::new();
    ws.add(SourceCategory::Lexemes, "lexemes_unix.txt", QAL.as_bytes());
    ws.add(
        SourceCategory::Lexemes,
        "lexemes_windows.txt",
        QAL.replace('\n', "\r\n").as_bytes(),
    );
    ws.add(
        SourceCategory::Paradigms,
        "paradigms.txt",
        PARADIGMS.replace('\n', "\r\n").as_bytes(),
    );

    let report = compile_and_write(&ws.manifest, &ws.writer()).unwrap();
    assert_eq!(report.blocks_scanned, 2);
    assert_eq!(report.unique_blocks, 1);

    for variant in DatasetVariant::ALL {
        assert!(!ws.read(variant, LEXEMES_FILE).contains('\r'));
        assert!(!ws.read(variant, PARADIGMS_FILE).contains('\r'));
    }
    assert_eq!(ws.read(DatasetVariant::Strict, LEXEMES_FILE), QAL);
    assert_eq!(
        ws.read(DatasetVariant::Strict, PARADIGMS_FILE),
        format!("{PARADIGMS}\n")
    );
}

#[test]
fn test_invalid_encoding_aborts() {
    let mut ws = Workspace::new();
    ws.add(SourceCategory::Lexemes, "lexemes.txt", QAL.as_bytes());
    ws.add(SourceCategory::Paradigms, "paradigms_latin1.txt", b"-flex: \xE7a\n");

    let result = compile_and_write(&ws.manifest, &ws.writer());
    assert!(matches!(result, Err(CompileError::Encoding { .. })));
    assert!(!ws.root(DatasetVariant::Strict).join(LEXEMES_FILE).exists());
}

#[test]
fn test_missing_output_root_aborts() {
    let mut ws = Workspace::new();
    ws.add(SourceCategory::Lexemes, "lexemes.txt", QAL.as_bytes());
    fs::remove_dir(ws.root(DatasetVariant::Nodiacritics)).unwrap();

    let result = compile_and_write(&ws.manifest, &ws.writer());
    assert!(matches!(result, Err(CompileError::MissingOutputRoot(_))));
}

#[test]
fn test_auxiliary_files_copied_verbatim() {
    let mut ws = Workspace::new();
    ws.add(SourceCategory::Lexemes, "lexemes.txt", QAL.as_bytes());
    let grammar = "SELECT (V) IF (0 (\"qaţa\"));\n";
    let aux = ws.dir.path().join("urmi_disambiguation.cg3");
    fs::write(&aux, grammar).unwrap();
    ws.manifest.auxiliary.push(aux);
    ws.manifest
        .auxiliary
        .push(ws.dir.path().join("bad_analyses.txt"));

    let report = compile_and_write(&ws.manifest, &ws.writer()).unwrap();
    assert_eq!(report.auxiliary_copied.len(), 2);
    for variant in DatasetVariant::ALL {
        assert_eq!(ws.read(variant, "urmi_disambiguation.cg3"), grammar);
        assert!(!Path::new(&ws.root(variant)).join("bad_analyses.txt").exists());
    }
}

#[test]
fn test_empty_manifest_writes_empty_datasets() {
    let ws = Workspace::new();
    let report = compile_and_write(&ws.manifest, &ws.writer()).unwrap();
    assert_eq!(report.unique_blocks, 0);
    for variant in DatasetVariant::ALL {
        assert_eq!(ws.read(variant, LEXEMES_FILE), "");
        assert_eq!(ws.read(variant, PARADIGMS_FILE), "");
    }
}
