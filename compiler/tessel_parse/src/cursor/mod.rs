//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, consumption, and the
//! balanced skipping used by both the AST builder and the prober.

use tessel_diagnostic::ErrorCode;
use tessel_ir::{Name, Span, StringInterner, Token, TokenFlags, TokenKind, TokenList, TokenTag};
use tracing::trace;

use crate::ParseError;

/// Cursor for navigating tokens.
///
/// Includes a `tags` slice for O(1) discriminant checks without touching
/// the full 16-byte `TokenKind`.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    /// Dense array of discriminant tags, parallel to `tokens`.
    tags: &'a [u8],
    /// Dense array of per-token layout flags, parallel to `tokens`.
    flags: &'a [TokenFlags],
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    ///
    /// The stream must end with `Eof`, as produced by `tessel_lexer::lex`.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        debug_assert!(
            tokens.iter().last().is_some_and(|t| t.kind == TokenKind::Eof),
            "token stream must end with Eof"
        );
        Cursor {
            tokens,
            tags: tokens.tags(),
            flags: tokens.flags(),
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Current position in the token stream.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Set the cursor position directly.
    ///
    /// Used by snapshots to roll back after speculative parsing.
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(
            pos < self.tokens.len(),
            "cursor position {} out of bounds (max {})",
            pos,
            self.tokens.len()
        );
        self.pos = pos;
    }

    /// Get the current token.
    ///
    /// Invariant: the position never moves past the trailing `Eof`.
    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the token just consumed, or `Span::DUMMY` at the start.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    /// Kind of the token just consumed; `Eof` at the start of the stream.
    #[inline]
    pub fn previous_kind(&self) -> TokenKind {
        if self.pos > 0 {
            self.tokens[self.pos - 1].kind
        } else {
            TokenKind::Eof
        }
    }

    #[inline]
    pub fn current_tag(&self) -> u8 {
        self.tags[self.pos]
    }

    #[inline]
    pub fn check_tag(&self, tag: TokenTag) -> bool {
        self.current_tag() == tag as u8
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check_tag(TokenTag::Eof)
    }

    /// Check if the current token has the same kind as `kind`, ignoring
    /// payloads.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_tag() == kind.discriminant_index()
    }

    /// Peek at the token kind `n` tokens ahead; `Eof` past the end.
    #[inline]
    pub fn peek_kind_at(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map_or(TokenKind::Eof, |token| token.kind)
    }

    #[inline]
    pub fn peek_next_kind(&self) -> TokenKind {
        self.peek_kind_at(1)
    }

    #[inline]
    pub fn peek_next_tag(&self) -> u8 {
        self.tags.get(self.pos + 1).copied().unwrap_or(TokenTag::Eof as u8)
    }

    /// Check if the next token is glued to the current one.
    #[inline]
    pub fn next_is_adjacent(&self) -> bool {
        self.flags.get(self.pos + 1).is_some_and(|f| f.is_adjacent())
    }

    /// True if the current token is the first token on its line.
    ///
    /// A `?` or `[` at line start does not attach to the type before it.
    #[inline]
    pub fn at_line_start(&self) -> bool {
        self.flags[self.pos].is_line_start()
    }

    /// True if nothing separates the current token from the previous one.
    #[inline]
    pub fn is_adjacent(&self) -> bool {
        self.flags[self.pos].is_adjacent()
    }

    /// `[` that continues the previous line, i.e. an array suffix rather
    /// than the start of something new.
    #[inline]
    pub fn is_following_lsquare(&self) -> bool {
        self.check_tag(TokenTag::LBracket) && !self.at_line_start()
    }

    /// `.` glued to a `>` that closed a generic argument list.
    #[inline]
    pub fn is_period_after_angle(&self) -> bool {
        self.check_tag(TokenTag::PeriodPrefix)
            && self.previous_kind() == TokenKind::Gt
            && self.is_adjacent()
    }

    /// Either period flavor followed by something other than `metatype`.
    #[inline]
    pub fn at_dotted_continuation(&self) -> bool {
        (self.check_tag(TokenTag::Period) || self.check_tag(TokenTag::PeriodPrefix))
            && self.peek_next_tag() != TokenTag::KwMetatype as u8
    }

    /// Either period flavor followed by `metatype`.
    #[inline]
    pub fn at_metatype_suffix(&self) -> bool {
        (self.check_tag(TokenTag::Period) || self.check_tag(TokenTag::PeriodPrefix))
            && self.peek_next_tag() == TokenTag::KwMetatype as u8
    }

    /// Token that can start a type identifier component.
    #[inline]
    pub fn at_type_name(&self) -> bool {
        self.check_tag(TokenTag::Ident) || self.check_tag(TokenTag::KwThis)
    }

    /// Identifier or `_`.
    #[inline]
    pub fn is_start_of_binding_name(&self) -> bool {
        self.check_tag(TokenTag::Ident) || self.check_tag(TokenTag::Underscore)
    }

    /// `name:` or `_:` at the head of a tuple element.
    #[inline]
    pub fn at_tuple_label(&self) -> bool {
        self.is_start_of_binding_name() && self.peek_next_tag() == TokenTag::Colon as u8
    }

    /// A declaration keyword; `protocol` only counts when it is not
    /// opening a composition.
    pub fn is_start_of_decl(&self) -> bool {
        match self.current_kind() {
            TokenKind::KwProtocol => self.peek_next_tag() != TokenTag::Lt as u8,
            kind => kind.is_decl_keyword(),
        }
    }

    /// Identifier or keyword usable as an attribute name.
    pub fn attribute_name(&self) -> Option<Name> {
        match self.current_kind() {
            TokenKind::Ident(name) => Some(name),
            kind => kind.keyword_str().map(|kw| self.interner.intern(kw)),
        }
    }

    /// Advance to the next token and return the consumed token.
    ///
    /// Never moves past `Eof`.
    #[inline]
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        let token = &self.tokens[current];
        trace!(
            pos = current,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if current + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token and return its span.
    #[inline]
    pub fn bump(&mut self) -> Span {
        self.advance().span
    }

    /// Consume the current token if it has the kind of `kind`.
    #[inline]
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect the current token to be of the given kind, advance and
    /// return it.
    #[inline]
    pub fn expect(&mut self, kind: TokenKind) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(kind))
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, kind: TokenKind) -> ParseError {
        ParseError::from_diagnostic(&tessel_diagnostic::unexpected_token(
            self.current_span(),
            kind.display_name(),
            self.current_kind().display_name(),
        ))
    }

    /// Expect and consume one component of a dotted type name: an
    /// identifier or `This`.
    #[inline]
    pub fn expect_type_name(&mut self) -> Result<(Name, Span), ParseError> {
        match self.current_kind() {
            TokenKind::Ident(name) => Ok((name, self.bump())),
            TokenKind::KwThis => {
                let name = self.interner.intern("This");
                Ok((name, self.bump()))
            }
            _ => Err(self.make_expect_ident_error("type name")),
        }
    }

    /// Expect and consume a binding name: an identifier or `_`.
    pub fn expect_binding_name(&mut self) -> Result<(Name, Span), ParseError> {
        match self.current_kind() {
            TokenKind::Ident(name) => Ok((name, self.bump())),
            TokenKind::Underscore => {
                let name = self.interner.intern("_");
                Ok((name, self.bump()))
            }
            _ => Err(self.make_expect_ident_error("name")),
        }
    }

    /// Expect and consume a member name after `.`.
    ///
    /// Integer literals and keywords are allowed; declaration keywords are
    /// not, since they end a skipped tuple default.
    pub fn expect_member_name(&mut self) -> Result<Name, ParseError> {
        let name = match self.current_kind() {
            TokenKind::Ident(name) => name,
            TokenKind::Int(value) => self.interner.intern(&value.to_string()),
            kind if kind.is_decl_keyword() => {
                return Err(self.make_expect_ident_error("member name"));
            }
            kind => match kind.keyword_str() {
                Some(kw) => self.interner.intern(kw),
                None => return Err(self.make_expect_ident_error("member name")),
            },
        };
        self.advance();
        Ok(name)
    }

    #[cold]
    #[inline(never)]
    fn make_expect_ident_error(&self, what: &str) -> ParseError {
        ParseError::new(
            ErrorCode::E1004,
            format!(
                "expected identifier for {what}, found {}",
                self.current_kind().display_name()
            ),
            self.current_span(),
        )
        .with_context("expected identifier")
    }

    /// Skip one token, or one whole balanced `(...)`, `[...]` or `{...}`
    /// group.
    ///
    /// An unclosed group is skipped to `Eof`.
    pub fn skip_single(&mut self) {
        let close = match self.current_kind() {
            TokenKind::LParen => TokenKind::RParen,
            TokenKind::LBracket => TokenKind::RBracket,
            TokenKind::LBrace => TokenKind::RBrace,
            TokenKind::Eof => return,
            _ => {
                self.advance();
                return;
            }
        };
        self.advance();
        tessel_stack::ensure_sufficient_stack(|| self.skip_until(close));
        self.eat(close);
    }

    /// Skip balanced groups until `kind` or `Eof`, leaving the cursor on it.
    pub fn skip_until(&mut self, kind: TokenKind) {
        while !self.is_at_end() && !self.check(kind) {
            self.skip_single();
        }
    }

    /// Skip balanced groups until any operator (`<`, `>`, or an operator
    /// run) or `Eof`.
    pub fn skip_until_any_operator(&mut self) {
        while !self.is_at_end() && !self.current_kind().is_any_operator() {
            self.skip_single();
        }
    }
}
