//! Token types shared by the lexer and the parser.

mod flags;
mod kind;
mod list;
mod tag;

pub use flags::TokenFlags;
pub use kind::TokenKind;
pub use list::TokenList;
pub use tag::TokenTag;

use std::fmt;

use super::Span;

/// A token with its span in the source.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Create a dummy token for tests.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

#[cfg(test)]
mod tests;
