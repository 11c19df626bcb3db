//! Token types produced by the tokenizer.

/// Kind of a token.
///
/// Block kinds come from a whole line (headings, list items, quotes, code
/// blocks); inline kinds come from delimited spans inside a plain line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// Literal text left over after inline spans were extracted.
    Text,
    Header1,
    Header2,
    Header3,
    Header4,
    Header5,
    Header6,
    /// `*text*` or `_text_`.
    Italic,
    /// `**text**` or `__text__`.
    Bold,
    /// `~~text~~`.
    Strike,
    /// `- item`.
    BulletList,
    /// `1. item`.
    NumberedList,
    /// Fenced or four-space indented code.
    CodeBlock,
    /// `` `code` ``.
    CodeInline,
    /// `> quote`.
    BlockQuote,
    /// An empty line. Renders as nothing but ends an open list.
    Blank,
}

impl TokenKind {
    /// Heading kind for a level in `1..=6`.
    #[must_use]
    pub fn heading(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Header1),
            2 => Some(Self::Header2),
            3 => Some(Self::Header3),
            4 => Some(Self::Header4),
            5 => Some(Self::Header5),
            6 => Some(Self::Header6),
            _ => None,
        }
    }

    /// Heading level (1-6), or `None` for non-heading kinds.
    #[must_use]
    pub fn heading_level(self) -> Option<u8> {
        match self {
            Self::Header1 => Some(1),
            Self::Header2 => Some(2),
            Self::Header3 => Some(3),
            Self::Header4 => Some(4),
            Self::Header5 => Some(5),
            Self::Header6 => Some(6),
            _ => None,
        }
    }

    /// Whether this kind is one item of a list.
    #[must_use]
    pub fn is_list_item(self) -> bool {
        matches!(self, Self::BulletList | Self::NumberedList)
    }
}

/// A single token: a kind plus the text it carries.
///
/// The value is already stripped of the markdown marker that produced it.
/// Tokens are immutable once created.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    kind: TokenKind,
    value: String,
}

impl Token {
    /// Create a token.
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Token kind.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Token payload.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_round_trip() {
        for level in 1..=6 {
            let kind = TokenKind::heading(level).unwrap();
            assert_eq!(kind.heading_level(), Some(level));
        }
    }

    #[test]
    fn test_heading_out_of_range() {
        assert_eq!(TokenKind::heading(0), None);
        assert_eq!(TokenKind::heading(7), None);
        assert_eq!(TokenKind::Text.heading_level(), None);
    }

    #[test]
    fn test_is_list_item() {
        assert!(TokenKind::BulletList.is_list_item());
        assert!(TokenKind::NumberedList.is_list_item());
        assert!(!TokenKind::BlockQuote.is_list_item());
        assert!(!TokenKind::Blank.is_list_item());
    }

    #[test]
    fn test_token_accessors() {
        let token = Token::new(TokenKind::Bold, "strong");
        assert_eq!(token.kind(), TokenKind::Bold);
        assert_eq!(token.value(), "strong");
    }

    static_assertions::assert_impl_all!(super::Token: Send, Sync);
}
