//! Per-token whitespace and layout flags.

/// Per-token metadata flags packed into a single byte.
///
/// These capture the trivia context preceding each token. The type
/// grammar depends on two of them: `LINE_START` (a `?` or `[` that starts
/// a line does not attach to the previous type) and `ADJACENT` (a `.`
/// glued to a closing `>`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TokenFlags(u8);

impl TokenFlags {
    /// Whitespace preceded this token (spaces or tabs).
    pub const SPACE_BEFORE: u8 = 1 << 0;
    /// A newline preceded this token.
    pub const NEWLINE_BEFORE: u8 = 1 << 1;
    /// A comment preceded this token.
    pub const TRIVIA_BEFORE: u8 = 1 << 2;
    /// Token is the first non-trivia token on its line.
    pub const LINE_START: u8 = 1 << 3;
    /// No whitespace, newline, or trivia preceded this token.
    pub const ADJACENT: u8 = 1 << 4;

    pub const EMPTY: Self = TokenFlags(0);

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        TokenFlags(bits)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn contains(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    #[inline]
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    #[inline]
    pub const fn has_space_before(self) -> bool {
        self.contains(Self::SPACE_BEFORE)
    }

    #[inline]
    pub const fn has_newline_before(self) -> bool {
        self.contains(Self::NEWLINE_BEFORE)
    }

    #[inline]
    pub const fn has_trivia_before(self) -> bool {
        self.contains(Self::TRIVIA_BEFORE)
    }

    #[inline]
    pub const fn is_line_start(self) -> bool {
        self.contains(Self::LINE_START)
    }

    #[inline]
    pub const fn is_adjacent(self) -> bool {
        self.contains(Self::ADJACENT)
    }
}

const _: () = assert!(size_of::<TokenFlags>() == 1);
