//! Snapshots and backtracking for speculative parsing.
//!
//! # When to Use Each Approach
//!
//! ## Simple Lookahead
//!
//! Direct token checks when the decision rests on one or two token kinds:
//!
//! ```ignore
//! if self.cursor.at_tuple_label() { /* `name:` */ }
//! ```
//!
//! ## `Backtrack`
//!
//! A guard over the cursor that restores the position when dropped unless
//! committed. The prober runs under one, so a probe never moves the
//! caller's cursor:
//!
//! ```ignore
//! let mut backtrack = Backtrack::new(&mut self.cursor);
//! let ok = Prober::new(&mut backtrack, depth).can_parse_type();
//! // dropped here: position restored
//! ```
//!
//! ## `look_ahead()` / `try_parse()`
//!
//! Parser-level wrappers. `look_ahead` always restores. `try_parse` keeps
//! a successful parse and, on failure, restores the position and discards
//! the errors recorded since the snapshot.
//!
//! # Design Notes
//!
//! Snapshots capture the cursor position and the error count only.
//! **Arena state is NOT captured**: nodes allocated by an abandoned
//! `try_parse` stay in the arena, unreferenced.

use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::cursor::Cursor;
use crate::Parser;

/// Saved cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    pos: usize,
}

impl Cursor<'_> {
    #[inline]
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            pos: self.position(),
        }
    }

    #[inline]
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.set_position(snapshot.pos);
    }
}

/// Restores the cursor on drop unless [`commit`](Backtrack::commit)ted.
///
/// Derefs to the cursor, so grammar code reads the same inside and outside
/// a speculative region.
pub struct Backtrack<'c, 'a> {
    cursor: &'c mut Cursor<'a>,
    snapshot: CursorSnapshot,
    committed: bool,
}

impl<'c, 'a> Backtrack<'c, 'a> {
    pub fn new(cursor: &'c mut Cursor<'a>) -> Self {
        let snapshot = cursor.snapshot();
        Backtrack {
            cursor,
            snapshot,
            committed: false,
        }
    }

    /// Keep everything consumed since the guard was created.
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl<'a> Deref for Backtrack<'_, 'a> {
    type Target = Cursor<'a>;

    fn deref(&self) -> &Self::Target {
        self.cursor
    }
}

impl DerefMut for Backtrack<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.cursor
    }
}

impl Drop for Backtrack<'_, '_> {
    fn drop(&mut self) {
        if !self.committed {
            debug!(
                from = self.cursor.position(),
                to = self.snapshot.pos,
                "backtrack"
            );
            self.cursor.restore(self.snapshot);
        }
    }
}

/// Saved parser state: cursor position plus the number of recorded errors.
#[derive(Clone, Copy, Debug)]
pub struct ParserSnapshot {
    pub(crate) cursor: CursorSnapshot,
    pub(crate) errors_len: usize,
}

impl Parser<'_> {
    #[inline]
    pub fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot {
            cursor: self.cursor.snapshot(),
            errors_len: self.errors.len(),
        }
    }

    /// Roll back to `snapshot`, dropping errors recorded after it.
    pub fn restore(&mut self, snapshot: ParserSnapshot) {
        debug!(
            from = self.cursor.position(),
            to = snapshot.cursor.pos,
            dropped_errors = self.errors.len().saturating_sub(snapshot.errors_len),
            "restore"
        );
        self.cursor.restore(snapshot.cursor);
        self.errors.truncate(snapshot.errors_len);
    }

    /// Run `f` and restore the parser afterwards, whatever it returned.
    pub fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.snapshot();
        let result = f(self);
        self.restore(snapshot);
        result
    }

    /// Run `f`; on `None`, restore the parser as if `f` never ran.
    pub fn try_parse<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let snapshot = self.snapshot();
        let result = f(self);
        if result.is_none() {
            self.restore(snapshot);
        }
        result
    }
}

#[cfg(test)]
mod tests;
