//! Lexer for tessel using logos with string interning.
//!
//! Produces a [`TokenList`] whose per-token [`TokenFlags`] record the
//! trivia before each token. Newlines and comments are not emitted as
//! tokens; the parser sees them only through `NEWLINE_BEFORE`,
//! `LINE_START` and `ADJACENT`.

mod raw_token;

use logos::Logos;
use tessel_ir::{Span, StringInterner, Token, TokenFlags, TokenKind, TokenList};

use raw_token::RawToken;

/// Lex source code into a `TokenList` terminated by `Eof`.
///
/// # Panics
///
/// Panics if `source` is longer than `u32::MAX` bytes.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    let mut result = TokenList::with_capacity(source.len() / 3 + 1);
    let mut logos = RawToken::lexer(source);
    let mut trivia = TriviaState::new();

    while let Some(token_result) = logos.next() {
        let span = to_span(logos.span());
        let slice = logos.slice();

        match token_result {
            Ok(raw) if raw.is_trivia() => trivia.record(raw, slice),
            Ok(raw) => {
                let flags = trivia.take_flags(!result.is_empty());
                let kind = convert_token(raw, slice, interner, &result, flags);
                result.push_with_flags(Token::new(kind, span), flags);
            }
            Err(()) => {
                let flags = trivia.take_flags(!result.is_empty());
                result.push_with_flags(Token::new(TokenKind::Error, span), flags);
            }
        }
    }

    let eof_pos = u32::try_from(source.len())
        .unwrap_or_else(|_| panic!("source file exceeds {} bytes", u32::MAX));
    let flags = trivia.take_flags(!result.is_empty());
    result.push_with_flags(Token::new(TokenKind::Eof, Span::point(eof_pos)), flags);

    result
}

fn to_span(range: std::ops::Range<usize>) -> Span {
    Span::try_from_range(range).unwrap_or_else(|e| panic!("{e}"))
}

/// Trivia seen since the last emitted token.
struct TriviaState {
    pending: u8,
    /// No token has been emitted on the current line yet.
    line_start: bool,
}

impl TriviaState {
    fn new() -> Self {
        TriviaState {
            pending: 0,
            line_start: true,
        }
    }

    fn record(&mut self, raw: RawToken, slice: &str) {
        match raw {
            RawToken::Whitespace => self.pending |= TokenFlags::SPACE_BEFORE,
            RawToken::Newline => self.newline(),
            RawToken::LineComment => self.pending |= TokenFlags::TRIVIA_BEFORE,
            RawToken::BlockComment => {
                self.pending |= TokenFlags::TRIVIA_BEFORE;
                if slice.contains('\n') {
                    self.newline();
                }
            }
            _ => {}
        }
    }

    fn newline(&mut self) {
        self.pending |= TokenFlags::NEWLINE_BEFORE;
        self.line_start = true;
    }

    /// Flags for the token about to be emitted; resets the state.
    fn take_flags(&mut self, has_previous: bool) -> TokenFlags {
        let mut flags = TokenFlags::from_bits(self.pending);
        if self.line_start {
            flags.set(TokenFlags::LINE_START);
        }
        if self.pending == 0 && has_previous {
            flags.set(TokenFlags::ADJACENT);
        }
        self.pending = 0;
        self.line_start = false;
        flags
    }
}

/// Whether a `.` glued to a token of this kind binds to it.
///
/// Opening delimiters, separators and operator characters leave the dot
/// unbound on the left.
fn binds_following_period(kind: TokenKind) -> bool {
    !matches!(
        kind,
        TokenKind::LParen
            | TokenKind::LBracket
            | TokenKind::LBrace
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::Colon
            | TokenKind::Eq
            | TokenKind::Arrow
            | TokenKind::Ellipsis
            | TokenKind::Period
            | TokenKind::PeriodPrefix
            | TokenKind::At
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::Operator(_)
            | TokenKind::Error
    )
}

fn classify_period(previous: &TokenList, flags: TokenFlags) -> TokenKind {
    let left_bound = flags.is_adjacent()
        && previous
            .as_slice()
            .last()
            .is_some_and(|prev| binds_following_period(prev.kind));
    if left_bound {
        TokenKind::Period
    } else {
        TokenKind::PeriodPrefix
    }
}

/// Convert a raw token to a `TokenKind`, interning strings.
fn convert_token(
    raw: RawToken,
    slice: &str,
    interner: &StringInterner,
    previous: &TokenList,
    flags: TokenFlags,
) -> TokenKind {
    match raw {
        // Literals
        RawToken::Int(n) | RawToken::HexInt(n) | RawToken::BinInt(n) => TokenKind::Int(n),
        RawToken::Float(f) => TokenKind::Float(f.to_bits()),
        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            TokenKind::String(interner.intern(&unescape_string(content)))
        }
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        // Keywords
        RawToken::This => TokenKind::KwThis,
        RawToken::Protocol => TokenKind::KwProtocol,
        RawToken::Metatype => TokenKind::KwMetatype,
        RawToken::Var => TokenKind::KwVar,
        RawToken::Let => TokenKind::KwLet,
        RawToken::Func => TokenKind::KwFunc,
        RawToken::Class => TokenKind::KwClass,
        RawToken::Struct => TokenKind::KwStruct,
        RawToken::Enum => TokenKind::KwEnum,
        RawToken::Extension => TokenKind::KwExtension,
        RawToken::Import => TokenKind::KwImport,
        RawToken::Typealias => TokenKind::KwTypealias,
        RawToken::Subscript => TokenKind::KwSubscript,
        RawToken::Init => TokenKind::KwInit,
        RawToken::True => TokenKind::KwTrue,
        RawToken::False => TokenKind::KwFalse,

        // Punctuation
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::Ellipsis => TokenKind::Ellipsis,
        RawToken::Dot => classify_period(previous, flags),
        RawToken::Question => TokenKind::Question,
        RawToken::Underscore => TokenKind::Underscore,
        RawToken::At => TokenKind::At,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::OperatorRun => TokenKind::Operator(interner.intern(slice)),

        // Handled by the caller
        RawToken::Whitespace
        | RawToken::Newline
        | RawToken::LineComment
        | RawToken::BlockComment => TokenKind::Error,
    }
}

/// Process string escape sequences.
fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('r') => result.push('\r'),
                Some('t') => result.push('\t'),
                Some('\\') | None => result.push('\\'),
                Some('"') => result.push('"'),
                Some('0') => result.push('\0'),
                Some(c) => {
                    result.push('\\');
                    result.push(c);
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests;
