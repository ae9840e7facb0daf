//! Attribute lists: `[name, name(args...)]`.

use crate::{Name, Span};

/// A single attribute. Arguments are kept as a raw token range; their
/// meaning belongs to whoever consumes the attribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub name: Name,
    pub span: Span,
    /// Span of the parenthesized argument group, parentheses included.
    pub args: Option<Span>,
}

/// A bracketed attribute list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AttributeList {
    pub attrs: Vec<Attribute>,
    /// Span from `[` to `]`, or `Span::DUMMY` when no list was written.
    pub span: Span,
}

impl AttributeList {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn contains(&self, name: Name) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }
}
