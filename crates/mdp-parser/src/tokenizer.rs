//! Line classifier producing a flat token stream.
//!
//! Each line is either folded into an open code block, classified by its
//! block marker (heading, list item, quote), or scanned for inline spans.

use std::sync::LazyLock;

use regex::Regex;

use crate::inline::InlineSpans;
use crate::token::{Token, TokenKind};

/// Prefix of an indented code line.
const INDENT: &str = "    ";

/// Opening and closing marker of a fenced code block.
const FENCE: &str = "```";

/// Block markers, longest first.
///
/// The two deepest heading markers match without a trailing space.
const BLOCK_MARKERS: [(&str, TokenKind); 8] = [
    ("######", TokenKind::Header6),
    ("#####", TokenKind::Header5),
    ("#### ", TokenKind::Header4),
    ("### ", TokenKind::Header3),
    ("## ", TokenKind::Header2),
    ("# ", TokenKind::Header1),
    ("- ", TokenKind::BulletList),
    ("> ", TokenKind::BlockQuote),
];

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\. ").expect("invalid numbered item regex"));

/// Multi-line code region currently being collected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum BlockScan {
    #[default]
    None,
    /// Between two ```` ``` ```` lines.
    Fenced,
    /// Inside a run of four-space indented lines.
    Indented,
}

/// Incremental tokenizer fed one line at a time.
///
/// Holds the token list and the open code block for a single document;
/// create one per conversion.
///
/// # Example
///
/// ```
/// use mdp_parser::{TokenKind, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new();
/// tokenizer.push_line("# Title");
/// tokenizer.push_line("    let x = 1;");
/// let tokens = tokenizer.finish();
///
/// assert_eq!(tokens[0].kind(), TokenKind::Header1);
/// assert_eq!(tokens[1].value(), "let x = 1;\n");
/// ```
#[derive(Debug, Default)]
pub struct Tokenizer {
    tokens: Vec<Token>,
    scan: BlockScan,
    code: String,
    line_no: usize,
}

impl Tokenizer {
    /// Create an empty tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one line (without its trailing `\n`).
    pub fn push_line(&mut self, line: &str) {
        self.line_no += 1;

        match self.scan {
            BlockScan::Fenced => {
                if line.starts_with(FENCE) {
                    self.close_code_block();
                } else {
                    self.push_code_line(line);
                }
                return;
            }
            BlockScan::Indented => {
                if let Some(code) = line.strip_prefix(INDENT) {
                    self.push_code_line(code);
                    return;
                }
                self.close_code_block();
            }
            BlockScan::None => {}
        }

        if let Some(code) = line.strip_prefix(INDENT) {
            self.open_code_block(BlockScan::Indented);
            self.push_code_line(code);
        } else if line.starts_with(FENCE) {
            self.open_code_block(BlockScan::Fenced);
        } else {
            self.classify(line);
        }
    }

    /// Flush any open code block and return the tokens in document order.
    #[must_use]
    pub fn finish(mut self) -> Vec<Token> {
        if self.scan != BlockScan::None {
            tracing::trace!(line = self.line_no, "Code block closed by end of input");
            self.close_code_block();
        }
        self.tokens
    }

    fn open_code_block(&mut self, scan: BlockScan) {
        tracing::trace!(line = self.line_no, ?scan, "Code block opened");
        self.scan = scan;
    }

    fn push_code_line(&mut self, line: &str) {
        self.code.push_str(line);
        self.code.push('\n');
    }

    fn close_code_block(&mut self) {
        tracing::trace!(line = self.line_no, bytes = self.code.len(), "Code block closed");
        let code = std::mem::take(&mut self.code);
        self.tokens.push(Token::new(TokenKind::CodeBlock, code));
        self.scan = BlockScan::None;
    }

    /// Classify a line outside any code block.
    fn classify(&mut self, line: &str) {
        if line.is_empty() {
            self.tokens.push(Token::new(TokenKind::Blank, ""));
        } else if let Some((kind, value)) = block_marker(line) {
            tracing::trace!(line = self.line_no, ?kind, "Block line");
            self.tokens.push(Token::new(kind, value));
        } else {
            self.tokens.extend(InlineSpans::new(line));
        }
    }
}

/// Match a block marker at the start of `line`.
///
/// Returns the kind and the remainder. Headings, bullets and quotes drop the
/// marker and any spaces after it; a numbered item drops only `N. `.
fn block_marker(line: &str) -> Option<(TokenKind, &str)> {
    BLOCK_MARKERS
        .iter()
        .find_map(|&(marker, kind)| {
            line.strip_prefix(marker)
                .map(|rest| (kind, rest.trim_start_matches(' ')))
        })
        .or_else(|| {
            NUMBERED_ITEM
                .find(line)
                .map(|m| (TokenKind::NumberedList, &line[m.end()..]))
        })
}

/// Tokenize a whole document.
///
/// The bytes are decoded as UTF-8 (invalid sequences become U+FFFD) and split
/// on `\n`. Never fails: anything that matches no rule becomes text.
pub fn tokenize(document: &[u8]) -> Vec<Token> {
    let text = String::from_utf8_lossy(document);
    let mut tokenizer = Tokenizer::new();
    for line in text.split('\n') {
        tokenizer.push_line(line);
    }
    let tokens = tokenizer.finish();
    tracing::debug!(count = tokens.len(), "Tokenized document");
    tokens
}
