//! Index-addressed storage for type and expression nodes.

use super::{Expr, ExprId, TypeRepr, TypeReprId};
use crate::Span;

/// Arena of type nodes. Children are always allocated before parents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeArena {
    types: Vec<TypeRepr>,
}

impl TypeArena {
    pub fn new() -> Self {
        TypeArena { types: Vec::new() }
    }

    /// Allocate a node.
    ///
    /// # Panics
    ///
    /// Panics if the arena exceeds `u32::MAX` nodes.
    pub fn alloc(&mut self, ty: TypeRepr) -> TypeReprId {
        let index = u32::try_from(self.types.len())
            .unwrap_or_else(|_| panic!("type arena exceeded u32::MAX nodes"));
        self.types.push(ty);
        TypeReprId::new(index)
    }

    /// # Panics
    ///
    /// Panics if `id` did not come from this arena.
    #[inline]
    pub fn get(&self, id: TypeReprId) -> &TypeRepr {
        &self.types[id.index()]
    }

    #[inline]
    pub fn span(&self, id: TypeReprId) -> Span {
        self.get(id).span
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Arena of expression nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        ExprArena { exprs: Vec::new() }
    }

    /// Allocate a node.
    ///
    /// # Panics
    ///
    /// Panics if the arena exceeds `u32::MAX` nodes.
    pub fn alloc(&mut self, expr: Expr) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded u32::MAX nodes"));
        self.exprs.push(expr);
        ExprId::new(index)
    }

    /// # Panics
    ///
    /// Panics if `id` did not come from this arena.
    #[inline]
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.get(id).span
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}
