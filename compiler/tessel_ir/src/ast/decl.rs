//! References to declarations found by scope lookup.

use std::fmt;

/// Opaque handle to a declaration owned by whoever maintains the scope.
///
/// The parser never dereferences it; it only records the result of a
/// best-effort lookup on the leading component of a type name.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct DeclRef(u32);

impl DeclRef {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        DeclRef(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for DeclRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeclRef({})", self.0)
    }
}
