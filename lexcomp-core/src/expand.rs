//! Diacritic-free variant expansion for stem and inflection fields
//!
//! Every token of a `stem:` or `-flex:` value that contains a diacritic
//! letter gets its plain spelling appended after `//`, the analyzer's
//! alternate-form separator:
//!
//! ```text
//!  stem: qala qaţa       ->   stem: qala qaţa//qata
//!  -flex: .ţa|.a         ->   -flex: .ţa|.a//.ta|.a
//! ```
//!
//! Delimiters and field prefixes are copied through untouched. The result is
//! not a fixed point: expanding it again would append a second alternate, so
//! the compiler runs the expander exactly once per dataset.

use crate::diacritics::DiacriticTable;
use crate::lemma::line_content;
use std::borrow::Cow;

/// Separator between a form and its diacritic-free alternate
pub const VARIANT_SEPARATOR: &str = "//";

/// Field kinds carrying morpheme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `stem:` lines; variants split on space, `|` and `/`
    Stem,
    /// `-flex:` lines; variants split on space and `/`, `|` stays inside a token
    Flex,
}

impl FieldKind {
    pub const ALL: [FieldKind; 2] = [FieldKind::Stem, FieldKind::Flex];

    /// Label-and-colon marker that opens the field
    pub fn marker(&self) -> &'static str {
        match self {
            FieldKind::Stem => "stem:",
            FieldKind::Flex => "-flex:",
        }
    }

    /// Spaces required before the marker. A stem marker must be indented,
    /// a flex marker may start the line.
    pub fn min_indent(&self) -> usize {
        match self {
            FieldKind::Stem => 1,
            FieldKind::Flex => 0,
        }
    }

    /// Whether `ch` separates two variant tokens in this field kind
    #[inline]
    pub fn is_delimiter(&self, ch: char) -> bool {
        match self {
            FieldKind::Stem => matches!(ch, ' ' | '|' | '/'),
            FieldKind::Flex => matches!(ch, ' ' | '/'),
        }
    }
}

/// A line recognized as a stem or flex field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLine<'a> {
    pub kind: FieldKind,
    /// Indentation plus marker, e.g. `" stem:"`
    pub prefix: &'a str,
    /// Everything after the marker up to the line terminator
    pub value: &'a str,
    /// `"\n"`, `"\r\n"` or `""` on the last line
    pub terminator: &'a str,
}

impl<'a> FieldLine<'a> {
    /// Recognize a field line. `line` may include its terminator.
    pub fn parse(line: &'a str) -> Option<Self> {
        let content = line_content(line);
        let terminator = &line[content.len()..];
        let body = content.trim_start_matches(' ');
        let indent = content.len() - body.len();

        FieldKind::ALL.into_iter().find_map(|kind| {
            let opens = indent >= kind.min_indent() && body.starts_with(kind.marker());
            opens.then(|| {
                let split = indent + kind.marker().len();
                FieldLine {
                    kind,
                    prefix: &content[..split],
                    value: &content[split..],
                    terminator,
                }
            })
        })
    }
}

/// Split `value` into tokens and delimiters, in order.
///
/// Tokens are maximal runs of non-delimiter characters; each delimiter is
/// yielded on its own, so `//` comes out as two one-slash pieces.
pub fn tokenize(kind: FieldKind, value: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut token_start: Option<usize> = None;

    for (i, ch) in value.char_indices() {
        if kind.is_delimiter(ch) {
            if let Some(start) = token_start.take() {
                pieces.push(Piece::Token(&value[start..i]));
            }
            pieces.push(Piece::Delimiter(&value[i..i + ch.len_utf8()]));
        } else if token_start.is_none() {
            token_start = Some(i);
        }
    }
    if let Some(start) = token_start {
        pieces.push(Piece::Token(&value[start..]));
    }

    pieces
}

/// Piece of a tokenized field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    Token(&'a str),
    Delimiter(&'a str),
}

/// Expanded text plus counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    pub text: String,
    /// Field lines recognized
    pub fields: usize,
    /// Tokens that received an alternate
    pub tokens_expanded: usize,
}

/// Appends diacritic-free alternates to stem and flex tokens
#[derive(Debug, Clone, Default)]
pub struct VariantExpander {
    table: DiacriticTable,
}

impl VariantExpander {
    pub fn new(table: DiacriticTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &DiacriticTable {
        &self.table
    }

    /// Expand a single token: `t` or `t//plain(t)`
    pub fn expand_token<'t>(&self, token: &'t str) -> Cow<'t, str> {
        if !self.table.contains_diacritic(token) {
            return Cow::Borrowed(token);
        }
        let plain = self.table.strip(token);
        let mut out = String::with_capacity(token.len() + VARIANT_SEPARATOR.len() + plain.len());
        out.push_str(token);
        out.push_str(VARIANT_SEPARATOR);
        out.push_str(&plain);
        Cow::Owned(out)
    }

    /// Expand every token of a field value; returns the new value and the
    /// number of tokens that changed
    pub fn expand_value(&self, kind: FieldKind, value: &str) -> (String, usize) {
        let mut out = String::with_capacity(value.len());
        let mut expanded = 0;

        for piece in tokenize(kind, value) {
            match piece {
                Piece::Delimiter(delimiter) => out.push_str(delimiter),
                Piece::Token(token) => {
                    let token = self.expand_token(token);
                    if matches!(token, Cow::Owned(_)) {
                        expanded += 1;
                    }
                    out.push_str(&token);
                }
            }
        }

        (out, expanded)
    }

    /// Expand the field values of a whole text; other lines pass through
    pub fn expand(&self, text: &str) -> Expansion {
        let mut expansion = Expansion {
            text: String::with_capacity(text.len()),
            ..Expansion::default()
        };

        for line in text.split_inclusive('\n') {
            let Some(field) = FieldLine::parse(line) else {
                expansion.text.push_str(line);
                continue;
            };
            expansion.fields += 1;

            let (value, expanded) = self.expand_value(field.kind, field.value);
            expansion.tokens_expanded += expanded;
            expansion.text.push_str(field.prefix);
            expansion.text.push_str(&value);
            expansion.text.push_str(field.terminator);
        }

        expansion
    }
}
