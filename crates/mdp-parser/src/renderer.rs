//! HTML renderer for token streams.
//!
//! Each token maps to a fixed wrapper element. The only state carried across
//! tokens is which list element is open, so consecutive items of one list
//! kind share a single `<ul>` or `<ol>`. Any other token, including a
//! [`TokenKind::Blank`] line, ends the list.

use crate::token::{Token, TokenKind};

/// List element currently open in the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Numbered,
}

impl ListKind {
    fn of(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::BulletList => Some(Self::Bullet),
            TokenKind::NumberedList => Some(Self::Numbered),
            _ => None,
        }
    }

    fn open_tag(self) -> &'static str {
        match self {
            Self::Bullet => "<ul>",
            Self::Numbered => "<ol>",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            Self::Bullet => "</ul>",
            Self::Numbered => "</ol>",
        }
    }
}

/// Streaming HTML writer for one token sequence.
///
/// Create one per conversion; the open-list state belongs to a single
/// document.
#[derive(Debug, Default)]
pub struct Renderer {
    output: String,
    open_list: Option<ListKind>,
}

impl Renderer {
    /// Create a renderer with empty output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the markup for one token.
    pub fn push(&mut self, token: &Token) {
        let list = ListKind::of(token.kind());
        if self.open_list.is_some() && self.open_list != list {
            self.close_list();
        }

        let value = token.value();
        match token.kind() {
            TokenKind::Text => {
                self.output.push_str(value);
                self.output.push('\n');
            }
            TokenKind::Header1 => self.element("h1", value),
            TokenKind::Header2 => self.element("h2", value),
            TokenKind::Header3 => self.element("h3", value),
            TokenKind::Header4 => self.element("h4", value),
            TokenKind::Header5 => self.element("h5", value),
            TokenKind::Header6 => self.element("h6", value),
            TokenKind::Italic => self.element("i", value),
            TokenKind::Bold => self.element("b", value),
            TokenKind::Strike => self.element("s", value),
            TokenKind::CodeInline => self.element("code", value),
            TokenKind::BlockQuote => self.element("blockquote", value),
            TokenKind::Blank => {}
            TokenKind::CodeBlock => {
                self.output.push_str("<pre><code>");
                self.output.push_str(value);
                self.output.push_str("</code></pre>\n");
            }
            TokenKind::BulletList | TokenKind::NumberedList => {
                if let Some(list) = list
                    && self.open_list.is_none()
                {
                    self.output.push_str(list.open_tag());
                    self.open_list = Some(list);
                }
                self.element("li", value);
            }
        }
    }

    /// Close any open list and return the HTML.
    #[must_use]
    pub fn finish(mut self) -> String {
        self.close_list();
        self.output
    }

    fn close_list(&mut self) {
        if let Some(list) = self.open_list.take() {
            self.output.push_str(list.close_tag());
        }
    }

    /// Write `<tag>value</tag>` followed by a newline.
    fn element(&mut self, tag: &str, value: &str) {
        self.output.push('<');
        self.output.push_str(tag);
        self.output.push('>');
        self.output.push_str(value);
        self.output.push_str("</");
        self.output.push_str(tag);
        self.output.push_str(">\n");
    }
}

/// Render a token sequence to an HTML fragment.
///
/// Values are written verbatim; no HTML escaping is applied.
pub fn render(tokens: &[Token]) -> String {
    let mut renderer = Renderer::new();
    for token in tokens {
        renderer.push(token);
    }
    renderer.finish()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tok(kind: TokenKind, value: &str) -> Token {
        Token::new(kind, value)
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_text_gets_newline() {
        assert_eq!(render(&[tok(TokenKind::Text, "hi")]), "hi\n");
    }

    #[test]
    fn test_wrapper_elements() {
        let cases = [
            (TokenKind::Header1, "<h1>v</h1>\n"),
            (TokenKind::Header4, "<h4>v</h4>\n"),
            (TokenKind::Header6, "<h6>v</h6>\n"),
            (TokenKind::Italic, "<i>v</i>\n"),
            (TokenKind::Bold, "<b>v</b>\n"),
            (TokenKind::Strike, "<s>v</s>\n"),
            (TokenKind::CodeInline, "<code>v</code>\n"),
            (TokenKind::CodeBlock, "<pre><code>v</code></pre>\n"),
            (TokenKind::BlockQuote, "<blockquote>v</blockquote>\n"),
        ];
        for (kind, expected) in cases {
            assert_eq!(render(&[tok(kind, "v")]), expected, "kind {kind:?}");
        }
    }

    #[test]
    fn test_bullet_run_shares_one_list() {
        let html = render(&[
            tok(TokenKind::BulletList, "a"),
            tok(TokenKind::BulletList, "b"),
            tok(TokenKind::Text, "after"),
        ]);
        assert_eq!(html, "<ul><li>a</li>\n<li>b</li>\n</ul>after\n");
    }

    #[test]
    fn test_switching_list_kind_closes_previous() {
        let html = render(&[
            tok(TokenKind::NumberedList, "one"),
            tok(TokenKind::BulletList, "dot"),
            tok(TokenKind::NumberedList, "two"),
        ]);
        assert_eq!(
            html,
            "<ol><li>one</li>\n</ol><ul><li>dot</li>\n</ul><ol><li>two</li>\n</ol>"
        );
    }

    #[test]
    fn test_blank_closes_list_and_writes_nothing() {
        let html = render(&[
            tok(TokenKind::BulletList, "a"),
            tok(TokenKind::Blank, ""),
            tok(TokenKind::BulletList, "b"),
        ]);
        assert_eq!(html, "<ul><li>a</li>\n</ul><ul><li>b</li>\n</ul>");
    }

    #[test]
    fn test_blank_outside_list_writes_nothing() {
        assert_eq!(render(&[tok(TokenKind::Blank, "")]), "");
    }

    #[test]
    fn test_open_list_closed_at_end_of_stream() {
        let html = render(&[tok(TokenKind::BulletList, "last")]);
        assert_eq!(html, "<ul><li>last</li>\n</ul>");
    }

    #[test]
    fn test_values_are_not_escaped() {
        assert_eq!(
            render(&[tok(TokenKind::Text, "<em>&amp;</em>")]),
            "<em>&amp;</em>\n"
        );
    }

    #[test]
    fn test_incremental_push_matches_render() {
        let tokens = [
            tok(TokenKind::Header2, "t"),
            tok(TokenKind::NumberedList, "x"),
        ];
        let mut renderer = Renderer::new();
        for token in &tokens {
            renderer.push(token);
        }
        assert_eq!(renderer.finish(), render(&tokens));
    }
}
