//! Recursive-descent parser for tessel type expressions.
//!
//! Two parsers share one grammar:
//!
//! - The **AST builder** ([`Parser`]) allocates [`TypeRepr`](tessel_ir::TypeRepr)
//!   nodes into a [`TypeArena`], records [`ParseError`]s, and resolves the
//!   leading name of each type identifier through a [`ScopeLookup`].
//! - The **prober** ([`Prober`]) answers "could a type start here?" without
//!   building anything or reporting anything. It is what decides whether
//!   `<` opens a generic argument list or is a less-than operator.
//!
//! Anything the builder accepts, the prober accepts.
//!
//! Types may embed expressions (tuple defaults, fixed array sizes) and
//! attribute lists; both have small collaborating parsers in
//! [`grammar`].

mod config;
mod cursor;
mod error;
pub mod grammar;
mod recovery;
mod scope;
mod snapshot;

pub use config::{ParserConfig, DEFAULT_MAX_NESTING_DEPTH};
pub use cursor::Cursor;
pub use error::{ExprMessage, ParseError, TypeMessage};
pub use grammar::{GenericArgs, Prober};
pub use recovery::{synchronize, TokenSet};
pub use scope::{NoScope, ScopeChain, ScopeLookup};
pub use snapshot::{Backtrack, CursorSnapshot, ParserSnapshot};

use tessel_diagnostic::ErrorCode;
use tessel_ir::{
    ExprArena, Span, StringInterner, Token, TokenKind, TokenList, TypeArena, TypeReprId,
};
use tracing::{debug, instrument};

/// Parser state for the AST builder.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    types: TypeArena,
    exprs: ExprArena,
    errors: Vec<ParseError>,
    scope: &'a dyn ScopeLookup,
    config: ParserConfig,
    /// Nesting of the productions currently being parsed.
    depth: u32,
}

impl<'a> Parser<'a> {
    /// Create a parser with an empty scope and the default configuration.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            types: TypeArena::new(),
            exprs: ExprArena::new(),
            errors: Vec::new(),
            scope: &NoScope,
            config: ParserConfig::default(),
            depth: 0,
        }
    }

    #[must_use]
    pub fn with_scope(mut self, scope: &'a dyn ScopeLookup) -> Self {
        self.scope = scope;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> ParserConfig {
        self.config
    }

    /// Current token position.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    pub fn current(&self) -> &Token {
        self.cursor.current()
    }

    pub fn types(&self) -> &TypeArena {
        &self.types
    }

    pub fn exprs(&self) -> &ExprArena {
        &self.exprs
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Hand over everything built so far.
    pub fn finish(self) -> ParseOutput {
        ParseOutput {
            types: self.types,
            exprs: self.exprs,
            errors: self.errors,
        }
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn bump(&mut self) -> Span {
        self.cursor.bump()
    }

    #[cold]
    fn error(&mut self, error: ParseError) {
        debug!(code = %error.code, span = ?error.span, message = %error.message, "parse error");
        self.errors.push(error);
    }

    /// Run one nested production under the depth limit, growing the stack
    /// if needed.
    ///
    /// Past the limit, reports `E1011` once and fails.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        if self.depth >= self.config.max_nesting_depth {
            self.report_too_deep();
            return None;
        }
        self.depth += 1;
        let result = tessel_stack::ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }

    #[cold]
    fn report_too_deep(&mut self) {
        if self.errors.iter().any(|e| e.code == ErrorCode::E1011) {
            return;
        }
        let limit = self.config.max_nesting_depth;
        self.error(
            ParseError::new(
                ErrorCode::E1011,
                format!("type is nested too deeply (limit is {limit})"),
                self.current_span(),
            )
            .with_context("nesting limit reached here"),
        );
    }

    /// Depth budget left for a prober started from here.
    fn remaining_depth(&self) -> u32 {
        self.config.max_nesting_depth.saturating_sub(self.depth)
    }
}

/// Everything a [`Parser`] produced.
#[derive(Debug)]
pub struct ParseOutput {
    pub types: TypeArena,
    pub exprs: ExprArena,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Result of parsing one complete type annotation from source.
#[derive(Debug)]
pub struct TypeParseResult {
    /// `None` if the annotation failed to parse or input remained after it.
    pub root: Option<TypeReprId>,
    pub arena: TypeArena,
    pub errors: Vec<ParseError>,
}

impl TypeParseResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Render the root back to source form.
    pub fn display(&self, interner: &StringInterner) -> Option<String> {
        self.root.map(|root| self.arena.display(root, interner))
    }
}

/// Lex `source` and parse it as a single type annotation.
///
/// Tokens left over after the annotation are reported as `E1001` and make
/// the result rootless.
#[instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse_type_source(
    source: &str,
    interner: &StringInterner,
    scope: &dyn ScopeLookup,
    config: ParserConfig,
) -> TypeParseResult {
    let tokens = tessel_lexer::lex(source, interner);
    let mut parser = Parser::new(&tokens, interner)
        .with_scope(scope)
        .with_config(config);

    let mut root = parser.parse_type_annotation(TypeMessage::ExpectedType);
    if root.is_some() && !parser.is_at_end() {
        let trailing = ParseError::from_diagnostic(&tessel_diagnostic::unexpected_token(
            parser.current_span(),
            "end of type",
            parser.current_kind().display_name(),
        ));
        parser.error(trailing);
        root = None;
    }

    let output = parser.finish();
    TypeParseResult {
        root,
        arena: output.types,
        errors: output.errors,
    }
}

/// Lex `source` and ask the prober whether all of it is one type
/// annotation. Builds nothing and reports nothing.
#[instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn probe_type_source(source: &str, interner: &StringInterner, config: ParserConfig) -> bool {
    let tokens = tessel_lexer::lex(source, interner);
    let mut cursor = Cursor::new(&tokens, interner);
    let mut prober = Prober::new(&mut cursor, config.max_nesting_depth);
    prober.can_parse_type_annotation() && prober.is_at_end()
}
