//! AST for type expressions and the expressions embedded in them.
//!
//! Nodes are flattened into arenas and addressed by `u32` indices; a
//! parent is always allocated after its children.

mod arena;
mod attr;
mod decl;
mod display;
mod expr;
mod ids;
mod ty;

pub use arena::{ExprArena, TypeArena};
pub use attr::{Attribute, AttributeList};
pub use decl::DeclRef;
pub use expr::{BinaryOp, Expr, ExprKind, UnaryOp};
pub use ids::{ExprId, TypeReprId};
pub use ty::{IdentComponent, IdentTypeRepr, TupleElement, TupleTypeRepr, TypeRepr, TypeReprKind};
