//! Raw tokens recognized by logos, before interning and flag computation.

use logos::{Lexer, Logos};

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub(crate) enum RawToken {
    // Trivia
    #[regex(r"[ \t\r]+")]
    Whitespace,
    #[token("\n")]
    Newline,
    #[regex(r"//[^\n]*")]
    LineComment,
    #[token("/*", block_comment)]
    BlockComment,

    // Keywords
    #[token("This")]
    This,
    #[token("protocol")]
    Protocol,
    #[token("metatype")]
    Metatype,
    #[token("var")]
    Var,
    #[token("let")]
    Let,
    #[token("func")]
    Func,
    #[token("class")]
    Class,
    #[token("struct")]
    Struct,
    #[token("enum")]
    Enum,
    #[token("extension")]
    Extension,
    #[token("import")]
    Import,
    #[token("typealias")]
    Typealias,
    #[token("subscript")]
    Subscript,
    #[token("init")]
    Init,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("=", priority = 5)]
    Eq,
    #[token("->")]
    Arrow,
    #[token("...")]
    Ellipsis,
    #[token(".")]
    Dot,
    #[token("?")]
    Question,
    #[token("_", priority = 3)]
    Underscore,
    #[token("@")]
    At,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // A run of operator characters. `<`, `>` and `?` never join a run;
    // a run starting with `/` cannot continue with `/` or `*` so comments
    // always win.
    #[regex(r"[=\-+!*%&|^~]+|/[=\-+!%&|^~]*")]
    OperatorRun,

    // Hex integer
    #[regex(r"0x[0-9a-fA-F][0-9a-fA-F_]*", |lex| {
        let s = lex.slice();
        u64::from_str_radix(&s[2..].replace('_', ""), 16).ok()
    })]
    HexInt(u64),

    // Binary integer
    #[regex(r"0b[01][01_]*", |lex| {
        let s = lex.slice();
        u64::from_str_radix(&s[2..].replace('_', ""), 2).ok()
    })]
    BinInt(u64),

    #[regex(r"[0-9][0-9_]*", |lex| {
        lex.slice().replace('_', "").parse::<u64>().ok()
    })]
    Int(u64),

    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?", |lex| {
        lex.slice().replace('_', "").parse::<f64>().ok()
    })]
    Float(f64),

    // String literal (no unescaped newlines allowed)
    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    String,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Consume a block comment body. An unterminated comment is an error.
fn block_comment(lex: &mut Lexer<RawToken>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => {
            lex.bump(lex.remainder().len());
            false
        }
    }
}

impl RawToken {
    pub(crate) fn is_trivia(self) -> bool {
        matches!(
            self,
            RawToken::Whitespace | RawToken::Newline | RawToken::LineComment | RawToken::BlockComment
        )
    }
}
