//! Expression nodes.
//!
//! Expressions appear inside types only as array sizes and tuple element
//! defaults, both of which are rejected after parsing. The expression
//! forms here are the ones needed to parse those operands and to exercise
//! generic-argument disambiguation in expression position.

use std::fmt;

use super::{ExprId, TypeReprId};
use crate::{Name, Span};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ExprKind {
    Int(u64),
    /// Stored as bits for Eq.
    Float(u64),
    Bool(bool),
    String(Name),
    Ident(Name),
    /// `.name` with no base.
    ImplicitMember(Name),
    Paren(ExprId),
    /// `()` or `(a, b, ...)`
    Tuple(Vec<ExprId>),
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    Member {
        base: ExprId,
        name: Name,
    },
    Call {
        func: ExprId,
        args: Vec<ExprId>,
    },
    Subscript {
        base: ExprId,
        args: Vec<ExprId>,
    },
    /// `Foo<T, U>` in expression position.
    Specialize {
        base: ExprId,
        args: Vec<TypeReprId>,
    },
    Error,
}

impl fmt::Debug for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprKind::Int(n) => write!(f, "Int({n})"),
            ExprKind::Float(bits) => write!(f, "Float({})", f64::from_bits(*bits)),
            ExprKind::Bool(b) => write!(f, "Bool({b})"),
            ExprKind::String(name) => write!(f, "String({name:?})"),
            ExprKind::Ident(name) => write!(f, "Ident({name:?})"),
            ExprKind::ImplicitMember(name) => write!(f, "ImplicitMember({name:?})"),
            ExprKind::Paren(inner) => write!(f, "Paren({inner:?})"),
            ExprKind::Tuple(items) => write!(f, "Tuple({items:?})"),
            ExprKind::Unary { op, operand } => write!(f, "Unary({op:?}, {operand:?})"),
            ExprKind::Binary { op, left, right } => {
                write!(f, "Binary({op:?}, {left:?}, {right:?})")
            }
            ExprKind::Member { base, name } => write!(f, "Member({base:?}, {name:?})"),
            ExprKind::Call { func, args } => write!(f, "Call({func:?}, {args:?})"),
            ExprKind::Subscript { base, args } => write!(f, "Subscript({base:?}, {args:?})"),
            ExprKind::Specialize { base, args } => write!(f, "Specialize({base:?}, {args:?})"),
            ExprKind::Error => write!(f, "Error"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `-`
    Neg,
    /// `!`
    Not,
    /// `~`
    BitNot,
    /// Any other prefix operator spelling.
    Custom(Name),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Mul,
    Div,
    Rem,
    Add,
    Sub,
    Shl,
    Shr,
    Lt,
    Gt,
    LtEq,
    GtEq,
    EqEq,
    NotEq,
    And,
    Or,
    BitAnd,
    BitOr,
    BitXor,
    /// Any other infix operator spelling; binds like `+`.
    Custom(Name),
}

impl BinaryOp {
    /// Map a built-in spelling to its operator.
    pub fn from_spelling(spelling: &str) -> Option<Self> {
        Some(match spelling {
            "*" => BinaryOp::Mul,
            "/" => BinaryOp::Div,
            "%" => BinaryOp::Rem,
            "+" => BinaryOp::Add,
            "-" => BinaryOp::Sub,
            "<<" => BinaryOp::Shl,
            ">>" => BinaryOp::Shr,
            "<" => BinaryOp::Lt,
            ">" => BinaryOp::Gt,
            "<=" => BinaryOp::LtEq,
            ">=" => BinaryOp::GtEq,
            "==" => BinaryOp::EqEq,
            "!=" => BinaryOp::NotEq,
            "&&" => BinaryOp::And,
            "||" => BinaryOp::Or,
            "&" => BinaryOp::BitAnd,
            "|" => BinaryOp::BitOr,
            "^" => BinaryOp::BitXor,
            _ => return None,
        })
    }

    /// Binding power; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => 7,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Custom(_) => 6,
            BinaryOp::Shl | BinaryOp::Shr => 5,
            BinaryOp::BitAnd | BinaryOp::BitOr | BinaryOp::BitXor => 4,
            BinaryOp::Lt
            | BinaryOp::Gt
            | BinaryOp::LtEq
            | BinaryOp::GtEq
            | BinaryOp::EqEq
            | BinaryOp::NotEq => 3,
            BinaryOp::And => 2,
            BinaryOp::Or => 1,
        }
    }
}
