//! Compact discriminant tag for `TokenKind`.

/// Payload-free discriminant of a [`TokenKind`](super::TokenKind).
///
/// Stored densely next to the token list so the cursor can dispatch on a
/// single byte. Values stay below 64 so a `u64` bitset covers every tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenTag {
    Ident = 0,
    Int = 1,
    Float = 2,
    String = 3,

    KwThis = 8,
    KwProtocol = 9,
    KwMetatype = 10,
    KwVar = 11,
    KwLet = 12,
    KwFunc = 13,
    KwClass = 14,
    KwStruct = 15,
    KwEnum = 16,
    KwExtension = 17,
    KwImport = 18,
    KwTypealias = 19,
    KwSubscript = 20,
    KwInit = 21,
    KwTrue = 22,
    KwFalse = 23,

    LParen = 32,
    RParen = 33,
    LBracket = 34,
    RBracket = 35,
    LBrace = 36,
    RBrace = 37,
    Comma = 38,
    Semicolon = 39,
    Colon = 40,
    Eq = 41,
    Arrow = 42,
    Ellipsis = 43,
    Period = 44,
    PeriodPrefix = 45,
    Question = 46,
    Underscore = 47,
    At = 48,

    Lt = 52,
    Gt = 53,
    Operator = 54,

    Error = 62,
    Eof = 63,
}

impl TokenTag {
    /// Largest discriminant value.
    pub const MAX_DISCRIMINANT: u8 = 63;
}
