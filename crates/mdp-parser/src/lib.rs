//! Line-oriented markdown tokenizer and HTML renderer.
//!
//! Conversion is a two-stage pipeline:
//! - [`tokenize`] scans the document line by line into a flat sequence of
//!   [`Token`]s (headings, list items, quotes, code blocks, inline spans).
//! - [`render`] walks the tokens and writes an HTML fragment, grouping
//!   consecutive list items into one `<ul>` or `<ol>`.
//!
//! Only a small markdown subset is recognized. Anything else passes through
//! as text, and values are never HTML-escaped.
//!
//! # Example
//!
//! ```
//! use mdp_parser::Parser;
//!
//! let parser = Parser::new(b"# Hello\n- one\n- two");
//! assert_eq!(
//!     parser.render(),
//!     "<h1>Hello</h1>\n<ul><li>one</li>\n<li>two</li>\n</ul>"
//! );
//! ```

mod inline;
mod renderer;
mod token;
mod tokenizer;

pub use renderer::{Renderer, render};
pub use token::{Token, TokenKind};
pub use tokenizer::{Tokenizer, tokenize};

/// A tokenized document ready to render.
///
/// Owns its token sequence. Build one per conversion (for example one per
/// HTTP request); instances are never shared between conversions.
#[derive(Clone, Debug)]
pub struct Parser {
    tokens: Vec<Token>,
}

impl Parser {
    /// Tokenize `document`.
    #[must_use]
    pub fn new(document: &[u8]) -> Self {
        Self {
            tokens: tokenize(document),
        }
    }

    /// Tokens in document order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Render the tokens to an HTML fragment.
    #[must_use]
    pub fn render(&self) -> String {
        render(&self.tokens)
    }

    /// Take ownership of the tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

/// Convert a markdown document to an HTML fragment.
#[must_use]
pub fn markdown_to_html(document: &[u8]) -> String {
    Parser::new(document).render()
}
