//! Inline span scanning.
//!
//! Extracts bold, italic, strikethrough and inline code spans from a single
//! line. Everything outside the spans is gathered into one trailing text
//! token.

use crate::token::{Token, TokenKind};

/// Span kinds in priority order, each with the delimiters that open it.
///
/// A kind is looked for anywhere in the working line before the next kind is
/// tried, so `**` is never read as an empty italic span.
const SPAN_KINDS: [(TokenKind, &[&str]); 4] = [
    (TokenKind::Bold, &["**", "__"]),
    (TokenKind::Italic, &["*", "_"]),
    (TokenKind::Strike, &["~~"]),
    (TokenKind::CodeInline, &["`"]),
];

/// Iterator over the inline tokens of one line.
///
/// Each step takes the highest-priority span kind present in the working
/// line, opens at its earliest delimiter and closes at the next occurrence of
/// the same delimiter. The span is cut out of the working line, joining the
/// text on either side. When no delimiters are left, or the chosen delimiter
/// is never closed, the working line is yielded as a single
/// [`TokenKind::Text`] token (if non-empty).
pub(crate) struct InlineSpans {
    line: String,
    finished: bool,
}

impl InlineSpans {
    pub(crate) fn new(line: &str) -> Self {
        Self {
            line: line.to_owned(),
            finished: false,
        }
    }

    /// Emit what is left of the working line as text.
    fn finish(&mut self) -> Option<Token> {
        self.finished = true;
        if self.line.is_empty() {
            None
        } else {
            Some(Token::new(TokenKind::Text, std::mem::take(&mut self.line)))
        }
    }
}

impl Iterator for InlineSpans {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let Some((kind, start, delimiter)) = SPAN_KINDS.iter().find_map(|&(kind, delimiters)| {
            earliest(&self.line, delimiters).map(|(start, delimiter)| (kind, start, delimiter))
        }) else {
            return self.finish();
        };

        let body_start = start + delimiter.len();
        let Some(body_len) = self.line[body_start..].find(delimiter) else {
            return self.finish();
        };

        let body_end = body_start + body_len;
        let token = Token::new(kind, &self.line[body_start..body_end]);
        self.line.replace_range(start..body_end + delimiter.len(), "");
        Some(token)
    }
}

/// Earliest occurrence of any of `delimiters` in `line`.
fn earliest(line: &str, delimiters: &[&'static str]) -> Option<(usize, &'static str)> {
    delimiters
        .iter()
        .filter_map(|&delimiter| line.find(delimiter).map(|pos| (pos, delimiter)))
        .min_by_key(|&(pos, _)| pos)
}
