//! String interner for identifiers, operator spellings and literals.
//!
//! Interning goes through `&self` so the lexer, the parser and test
//! helpers can all share one interner by reference.

use crate::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    #[error("interner exceeded capacity: {0} strings")]
    Overflow(usize),
}

struct InternerInner {
    map: FxHashMap<&'static str, Name>,
    strings: Vec<&'static str>,
}

/// Interner mapping strings to [`Name`]s.
///
/// Strings are leaked to obtain `'static` lifetimes; an interner lives as
/// long as the compilation session that owns it.
pub struct StringInterner {
    inner: RwLock<InternerInner>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned as
    /// [`Name::EMPTY`].
    pub fn new() -> Self {
        let mut map = FxHashMap::default();
        map.insert("", Name::EMPTY);
        StringInterner {
            inner: RwLock::new(InternerInner {
                map,
                strings: vec![""],
            }),
        }
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.inner.read().map.get(s) {
            return Ok(name);
        }

        let mut guard = self.inner.write();
        // Another writer may have won the race.
        if let Some(&name) = guard.map.get(s) {
            return Ok(name);
        }

        let raw = u32::try_from(guard.strings.len())
            .map_err(|_| InternError::Overflow(guard.strings.len()))?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let name = Name::from_raw(raw);
        guard.strings.push(leaked);
        guard.map.insert(leaked, name);
        Ok(name)
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` strings are interned.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up an already interned string without inserting it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.inner.read().map.get(s).copied()
    }

    /// Resolve a name back to its string.
    ///
    /// Names from a different interner resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.inner
            .read()
            .strings
            .get(name.index())
            .copied()
            .unwrap_or("")
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.inner.read().strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
