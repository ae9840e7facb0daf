//! Tessel IR: the data shared by the lexer and the type parser.
//!
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - The type-expression AST, its embedded expressions and attributes
//!
//! # Design
//!
//! - **Intern everything**: strings become `Name(u32)`
//! - **Flatten everything**: nodes refer to children by `TypeReprId` /
//!   `ExprId` indices into arenas, never by `Box`
//!
//! Types that contain floats store them as `u64` bits so they stay `Eq`.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use ast::{
    Attribute, AttributeList, BinaryOp, DeclRef, Expr, ExprArena, ExprId, ExprKind,
    IdentComponent, IdentTypeRepr, TupleElement, TupleTypeRepr, TypeArena, TypeRepr,
    TypeReprId, TypeReprKind, UnaryOp,
};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenFlags, TokenKind, TokenList, TokenTag};

static_assert_size!(Span, 8);
static_assert_size!(Name, 4);
static_assert_size!(TokenKind, 16);
