//! Token kinds.

use std::fmt;

use super::tag::TokenTag;
use crate::Name;

/// Classified token.
///
/// Literal payloads are interned or stored as raw bits so the kind stays
/// `Copy` and hashable.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Identifier (interned)
    Ident(Name),
    /// Integer literal: 42, `1_000`
    Int(u64),
    /// Float literal (stored as bits for Eq/Hash)
    Float(u64),
    /// String literal contents (interned)
    String(Name),

    KwThis,      // This
    KwProtocol,  // protocol
    KwMetatype,  // metatype
    KwVar,       // var
    KwLet,       // let
    KwFunc,      // func
    KwClass,     // class
    KwStruct,    // struct
    KwEnum,      // enum
    KwExtension, // extension
    KwImport,    // import
    KwTypealias, // typealias
    KwSubscript, // subscript
    KwInit,      // init
    KwTrue,      // true
    KwFalse,     // false

    LParen,       // (
    RParen,       // )
    LBracket,     // [
    RBracket,     // ]
    LBrace,       // {
    RBrace,       // }
    Comma,        // ,
    Semicolon,    // ;
    Colon,        // :
    Eq,           // =
    Arrow,        // ->
    Ellipsis,     // ...
    Period,       // `.` bound to the token on its left
    PeriodPrefix, // `.` with nothing bound on its left
    Question,     // ?
    Underscore,   // _
    At,           // @

    /// `<`, always lexed alone so generic lists can be opened inside
    /// operator runs.
    Lt,
    /// `>`, always lexed alone so `>>` closes two generic lists.
    Gt,
    /// Any other run of operator characters.
    Operator(Name),

    /// Unrecognized input.
    Error,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Compact discriminant of this kind.
    #[inline]
    pub const fn tag(&self) -> TokenTag {
        match self {
            TokenKind::Ident(_) => TokenTag::Ident,
            TokenKind::Int(_) => TokenTag::Int,
            TokenKind::Float(_) => TokenTag::Float,
            TokenKind::String(_) => TokenTag::String,
            TokenKind::KwThis => TokenTag::KwThis,
            TokenKind::KwProtocol => TokenTag::KwProtocol,
            TokenKind::KwMetatype => TokenTag::KwMetatype,
            TokenKind::KwVar => TokenTag::KwVar,
            TokenKind::KwLet => TokenTag::KwLet,
            TokenKind::KwFunc => TokenTag::KwFunc,
            TokenKind::KwClass => TokenTag::KwClass,
            TokenKind::KwStruct => TokenTag::KwStruct,
            TokenKind::KwEnum => TokenTag::KwEnum,
            TokenKind::KwExtension => TokenTag::KwExtension,
            TokenKind::KwImport => TokenTag::KwImport,
            TokenKind::KwTypealias => TokenTag::KwTypealias,
            TokenKind::KwSubscript => TokenTag::KwSubscript,
            TokenKind::KwInit => TokenTag::KwInit,
            TokenKind::KwTrue => TokenTag::KwTrue,
            TokenKind::KwFalse => TokenTag::KwFalse,
            TokenKind::LParen => TokenTag::LParen,
            TokenKind::RParen => TokenTag::RParen,
            TokenKind::LBracket => TokenTag::LBracket,
            TokenKind::RBracket => TokenTag::RBracket,
            TokenKind::LBrace => TokenTag::LBrace,
            TokenKind::RBrace => TokenTag::RBrace,
            TokenKind::Comma => TokenTag::Comma,
            TokenKind::Semicolon => TokenTag::Semicolon,
            TokenKind::Colon => TokenTag::Colon,
            TokenKind::Eq => TokenTag::Eq,
            TokenKind::Arrow => TokenTag::Arrow,
            TokenKind::Ellipsis => TokenTag::Ellipsis,
            TokenKind::Period => TokenTag::Period,
            TokenKind::PeriodPrefix => TokenTag::PeriodPrefix,
            TokenKind::Question => TokenTag::Question,
            TokenKind::Underscore => TokenTag::Underscore,
            TokenKind::At => TokenTag::At,
            TokenKind::Lt => TokenTag::Lt,
            TokenKind::Gt => TokenTag::Gt,
            TokenKind::Operator(_) => TokenTag::Operator,
            TokenKind::Error => TokenTag::Error,
            TokenKind::Eof => TokenTag::Eof,
        }
    }

    /// Discriminant as a raw index, for bitsets.
    #[inline]
    pub const fn discriminant_index(&self) -> u8 {
        self.tag() as u8
    }

    /// Keyword spelling, if this is a keyword.
    pub fn keyword_str(&self) -> Option<&'static str> {
        match self {
            TokenKind::KwThis => Some("This"),
            TokenKind::KwProtocol => Some("protocol"),
            TokenKind::KwMetatype => Some("metatype"),
            TokenKind::KwVar => Some("var"),
            TokenKind::KwLet => Some("let"),
            TokenKind::KwFunc => Some("func"),
            TokenKind::KwClass => Some("class"),
            TokenKind::KwStruct => Some("struct"),
            TokenKind::KwEnum => Some("enum"),
            TokenKind::KwExtension => Some("extension"),
            TokenKind::KwImport => Some("import"),
            TokenKind::KwTypealias => Some("typealias"),
            TokenKind::KwSubscript => Some("subscript"),
            TokenKind::KwInit => Some("init"),
            TokenKind::KwTrue => Some("true"),
            TokenKind::KwFalse => Some("false"),
            _ => None,
        }
    }

    /// Whether this token is any kind of operator (`<`, `>`, or a custom
    /// operator run). Used as a resynchronization point after a broken
    /// angle-bracket list.
    #[inline]
    pub const fn is_any_operator(&self) -> bool {
        matches!(self, TokenKind::Lt | TokenKind::Gt | TokenKind::Operator(_))
    }

    /// Declaration-introducing keyword (independent of lookahead).
    #[inline]
    pub const fn is_decl_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::KwVar
                | TokenKind::KwLet
                | TokenKind::KwFunc
                | TokenKind::KwClass
                | TokenKind::KwStruct
                | TokenKind::KwEnum
                | TokenKind::KwExtension
                | TokenKind::KwImport
                | TokenKind::KwTypealias
                | TokenKind::KwSubscript
                | TokenKind::KwInit
                | TokenKind::KwProtocol
        )
    }

    /// Human-readable name for error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Ident(_) => "identifier",
            TokenKind::Int(_) => "integer",
            TokenKind::Float(_) => "float",
            TokenKind::String(_) => "string",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Colon => "`:`",
            TokenKind::Eq => "`=`",
            TokenKind::Arrow => "`->`",
            TokenKind::Ellipsis => "`...`",
            TokenKind::Period | TokenKind::PeriodPrefix => "`.`",
            TokenKind::Question => "`?`",
            TokenKind::Underscore => "`_`",
            TokenKind::At => "`@`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::Operator(_) => "operator",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of file",
            TokenKind::KwThis
            | TokenKind::KwProtocol
            | TokenKind::KwMetatype
            | TokenKind::KwVar
            | TokenKind::KwLet
            | TokenKind::KwFunc
            | TokenKind::KwClass
            | TokenKind::KwStruct
            | TokenKind::KwEnum
            | TokenKind::KwExtension
            | TokenKind::KwImport
            | TokenKind::KwTypealias
            | TokenKind::KwSubscript
            | TokenKind::KwInit
            | TokenKind::KwTrue
            | TokenKind::KwFalse => "keyword",
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => write!(f, "Ident({})", name.raw()),
            TokenKind::Int(v) => write!(f, "Int({v})"),
            TokenKind::Float(bits) => write!(f, "Float({})", f64::from_bits(*bits)),
            TokenKind::String(name) => write!(f, "String({})", name.raw()),
            TokenKind::Operator(name) => write!(f, "Operator({})", name.raw()),
            other => write!(f, "{:?}", other.tag()),
        }
    }
}
