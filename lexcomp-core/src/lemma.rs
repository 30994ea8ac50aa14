//! Lemma block scanning and deduplication
//!
//! A lemma block is a `-lexeme` header line followed by one or more lines
//! that begin with a space. Blocks are compared by exact text: two blocks
//! that differ only in whitespace are both kept.

use std::collections::BTreeSet;

/// Header line that opens a lemma block
pub const LEXEME_MARKER: &str = "-lexeme";

/// Strip the line terminator (`\n` or `\r\n`)
pub(crate) fn line_content(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[derive(Debug, Clone, Copy)]
enum ScanState {
    Outside,
    /// Header seen at this byte offset, no body line yet
    Header(usize),
    /// Inside the body of a block starting at this byte offset
    Body(usize),
}

/// Find every well-formed lemma block in `text`, in input order.
///
/// Each returned slice includes its line terminators. Headers without a body
/// and stray lines are skipped.
pub fn scan_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut state = ScanState::Outside;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let indented = line.starts_with(' ');
        state = match state {
            ScanState::Header(start) | ScanState::Body(start) if indented => ScanState::Body(start),
            ScanState::Body(start) => {
                blocks.push(&text[start..offset]);
                ScanState::Outside
            }
            ScanState::Header(_) | ScanState::Outside => ScanState::Outside,
        };
        if matches!(state, ScanState::Outside) && line_content(line) == LEXEME_MARKER {
            state = ScanState::Header(offset);
        }
        offset += line.len();
    }

    if let ScanState::Body(start) = state {
        blocks.push(&text[start..]);
    }

    blocks
}

/// Value of the ` lex:` line of a block, if any
pub fn lemma_name(block: &str) -> Option<&str> {
    block
        .lines()
        .find_map(|line| line.trim_start().strip_prefix("lex:"))
        .map(str::trim)
}

/// Unique lemma blocks, ordered by block text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LemmaSet {
    blocks: BTreeSet<String>,
    scanned: usize,
}

impl LemmaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `text` and collect its blocks
    pub fn from_text(text: &str) -> Self {
        let mut set = Self::new();
        for block in scan_blocks(text) {
            set.insert(block);
        }
        set
    }

    /// Add a block; returns `false` if an identical block was already present.
    ///
    /// A block at the very end of unterminated input gets a trailing newline
    /// so that serialization keeps one block per paragraph.
    pub fn insert(&mut self, block: &str) -> bool {
        self.scanned += 1;
        let mut block = block.to_string();
        if !block.ends_with('\n') {
            block.push('\n');
        }
        if self.blocks.contains(&block) {
            log::trace!(
                "dropping duplicate lemma block {}",
                lemma_name(&block).unwrap_or("<unnamed>")
            );
            return false;
        }
        self.blocks.insert(block)
    }

    pub fn contains(&self, block: &str) -> bool {
        self.blocks.contains(block)
    }

    /// Number of unique blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks inserted, duplicates included
    pub fn scanned(&self) -> usize {
        self.scanned
    }

    /// Number of blocks dropped as exact duplicates
    pub fn duplicates(&self) -> usize {
        self.scanned - self.blocks.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(String::as_str)
    }

    /// Serialize: blocks in sorted order, separated by a blank line
    pub fn to_text(&self) -> String {
        self.iter().collect::<Vec<_>>().join("\n")
    }
}

/// Deduplicate the lemma blocks of `text` and serialize the result
pub fn deduplicate(text: &str) -> String {
    LemmaSet::from_text(text).to_text()
}
