//! Name lookup for the leading component of a type identifier.
//!
//! The parser asks once per type identifier and records whatever comes
//! back; a miss is not an error.

use rustc_hash::FxHashMap;
use tessel_ir::{DeclRef, Name};

/// Resolves a name to a declaration visible at the parse point.
pub trait ScopeLookup {
    fn lookup(&self, name: Name) -> Option<DeclRef>;
}

/// Scope with nothing in it.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoScope;

impl ScopeLookup for NoScope {
    fn lookup(&self, _name: Name) -> Option<DeclRef> {
        None
    }
}

/// Stack of lexical frames; inner frames shadow outer ones.
#[derive(Clone, Debug)]
pub struct ScopeChain {
    frames: Vec<FxHashMap<Name, DeclRef>>,
}

impl ScopeChain {
    /// A chain holding one empty frame.
    pub fn new() -> Self {
        ScopeChain {
            frames: vec![FxHashMap::default()],
        }
    }

    pub fn push_frame(&mut self) {
        self.frames.push(FxHashMap::default());
    }

    /// Pop the innermost frame. The outermost frame is never popped;
    /// returns `false` when asked to.
    pub fn pop_frame(&mut self) -> bool {
        if self.frames.len() > 1 {
            self.frames.pop();
            true
        } else {
            false
        }
    }

    /// Bind `name` in the innermost frame, returning any binding it
    /// replaced in that frame.
    pub fn declare(&mut self, name: Name, decl: DeclRef) -> Option<DeclRef> {
        self.frames.last_mut().and_then(|frame| frame.insert(name, decl))
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

impl Default for ScopeChain {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeLookup for ScopeChain {
    fn lookup(&self, name: Name) -> Option<DeclRef> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(&name).copied())
    }
}
