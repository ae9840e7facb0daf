//! Token sets and resynchronization after errors.
//!
//! Uses bitset-based O(1) membership over [`TokenTag`] discriminants.

use tessel_ir::TokenTag;

use crate::cursor::Cursor;

// TokenSet uses a u64 bitset, so every discriminant must be below 64.
const _: () = assert!(
    TokenTag::MAX_DISCRIMINANT < 64,
    "TokenSet uses u64 bitset; all discriminant indices must be < 64"
);

/// A set of token kinds, one bit per [`TokenTag`].
///
/// ```ignore
/// const CLOSERS: TokenSet = TokenSet::new()
///     .with(TokenTag::RParen)
///     .with(TokenTag::RBrace);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn single(tag: TokenTag) -> Self {
        Self(1u64 << tag as u8)
    }

    #[inline]
    #[must_use]
    pub const fn with(self, tag: TokenTag) -> Self {
        Self(self.0 | (1u64 << tag as u8))
    }

    /// Check membership of a raw tag, as stored in the cursor's tag array.
    #[inline]
    pub const fn contains_tag(&self, tag: u8) -> bool {
        tag < 64 && (self.0 & (1u64 << tag)) != 0
    }

    #[inline]
    pub const fn contains(&self, tag: TokenTag) -> bool {
        self.contains_tag(tag as u8)
    }
}

/// Tokens after `>` that confirm a `<...>` run is a generic argument list.
///
/// `(`, `[` and a glued `.` are context dependent and checked separately.
pub const GENERIC_FOLLOW: TokenSet = TokenSet::new()
    .with(TokenTag::RParen)
    .with(TokenTag::RBracket)
    .with(TokenTag::LBrace)
    .with(TokenTag::RBrace)
    .with(TokenTag::Period)
    .with(TokenTag::Comma)
    .with(TokenTag::Semicolon)
    .with(TokenTag::Eof);

/// Where an unparsed tuple-element default ends.
pub const TUPLE_DEFAULT_END: TokenSet = TokenSet::new()
    .with(TokenTag::RParen)
    .with(TokenTag::RBrace)
    .with(TokenTag::Ellipsis)
    .with(TokenTag::Comma)
    .with(TokenTag::Eof);

/// Closing parenthesis of a broken tuple body.
pub const TUPLE_CLOSE: TokenSet = TokenSet::single(TokenTag::RParen);

/// Skip balanced groups until the current token is in `recovery`.
///
/// Returns `true` if such a token was found, `false` at `Eof` (unless
/// `Eof` is itself in the set).
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> bool {
    loop {
        if recovery.contains_tag(cursor.current_tag()) {
            return true;
        }
        if cursor.is_at_end() {
            return false;
        }
        cursor.skip_single();
    }
}
