//! Parser configuration.

/// Default bound on nested type and expression productions.
pub const DEFAULT_MAX_NESTING_DEPTH: u32 = 256;

/// Knobs shared by the AST builder and the prober.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum number of nested productions (generic argument lists,
    /// tuple bodies, arrow results, array suffixes, sub-expressions).
    ///
    /// The builder reports `E1011` past this depth; the prober answers
    /// `false`.
    pub max_nesting_depth: u32,
}

impl ParserConfig {
    pub const fn new() -> Self {
        ParserConfig {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }

    #[must_use]
    pub const fn with_max_nesting_depth(mut self, depth: u32) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}
