//! Error codes for front-end diagnostics.
//!
//! The first digit indicates the phase: `E0xxx` lexer, `E1xxx` parser.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Invalid character in source
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Expected type
    E1005,
    /// Expected `<` after `protocol`
    E1006,
    /// Default value on a tuple type element
    E1007,
    /// `...` not at the end of a tuple type
    E1008,
    /// `...` on an empty tuple type
    E1009,
    /// Fixed-length array type
    E1010,
    /// Nesting too deep
    E1011,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E1010,
        ErrorCode::E1011,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
        }
    }

    /// One-line description for `--explain` style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0002 => "invalid character in source",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "expected identifier",
            ErrorCode::E1005 => "expected type",
            ErrorCode::E1006 => "expected `<` after `protocol`",
            ErrorCode::E1007 => "default values are not allowed in tuple types",
            ErrorCode::E1008 => "unexpected `...` in tuple type",
            ErrorCode::E1009 => "`...` requires at least one tuple element",
            ErrorCode::E1010 => "fixed-length array types are not supported",
            ErrorCode::E1011 => "type or expression nested too deeply",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1005"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == upper)
            .ok_or(())
    }
}
