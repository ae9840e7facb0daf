//! Token list with dense tag and flag arrays.

use std::fmt;

use super::{Token, TokenFlags};

/// A lexed token stream.
///
/// Keeps a parallel `tags` array of discriminant bytes and a parallel
/// `flags` array of trivia context, so the cursor can test a token's kind
/// or layout without touching the full `TokenKind`.
///
/// Always ends with an `Eof` token when produced by the lexer.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
    /// `tags[i] == tokens[i].kind.discriminant_index()` for all `i`.
    tags: Vec<u8>,
    flags: Vec<TokenFlags>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList {
            tokens: Vec::new(),
            tags: Vec::new(),
            flags: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
            tags: Vec::with_capacity(capacity),
            flags: Vec::with_capacity(capacity),
        }
    }

    /// Create from a Vec of tokens.
    ///
    /// All tokens get `TokenFlags::EMPTY` since no trivia context is available.
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        let tags = tokens.iter().map(|t| t.kind.discriminant_index()).collect();
        let flags = vec![TokenFlags::EMPTY; tokens.len()];
        TokenList {
            tokens,
            tags,
            flags,
        }
    }

    /// Push a token with default (empty) flags.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.push_with_flags(token, TokenFlags::EMPTY);
    }

    #[inline]
    pub fn push_with_flags(&mut self, token: Token, flags: TokenFlags) {
        self.tags.push(token.kind.discriminant_index());
        self.flags.push(flags);
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Tag at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn tag(&self, index: usize) -> u8 {
        self.tags[index]
    }

    #[inline]
    pub fn tags(&self) -> &[u8] {
        &self.tags
    }

    /// Flags for the token at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn flag(&self, index: usize) -> TokenFlags {
        self.flags[index]
    }

    #[inline]
    pub fn flags(&self) -> &[TokenFlags] {
        &self.flags
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
