//! Type representations as written in source.

use smallvec::SmallVec;

use super::{AttributeList, DeclRef, ExprId, TypeReprId};
use crate::{Name, Span};

/// A type expression node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeRepr {
    pub kind: TypeReprKind,
    pub span: Span,
}

impl TypeRepr {
    #[inline]
    pub fn new(kind: TypeReprKind, span: Span) -> Self {
        TypeRepr { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeReprKind {
    /// `Foo`, `Foo.Bar`, `Foo<T>.Bar<U>`
    Ident(IdentTypeRepr),

    /// `(Int, label: String...)`
    Tuple(TupleTypeRepr),

    /// `input -> output`
    Function {
        input: TypeReprId,
        output: TypeReprId,
    },

    /// `base[]`
    ///
    /// `size` is reserved for `base[N]`, which is recognized but rejected,
    /// so built trees always hold `None`.
    Array {
        base: TypeReprId,
        size: Option<ExprId>,
        brackets: Span,
    },

    /// `base?`
    Optional { base: TypeReprId, question: Span },

    /// `protocol<A, B>`; may be empty.
    ProtocolComposition {
        protocols: Vec<TypeReprId>,
        protocol_span: Span,
        angles: Span,
    },

    /// `base.metatype`
    MetaType {
        base: TypeReprId,
        metatype_span: Span,
    },

    /// `[attrs] base`
    Attributed {
        attrs: AttributeList,
        base: TypeReprId,
    },
}

/// One `Name<Args>` segment of a dotted type name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentComponent {
    pub name: Name,
    /// Span of the name token alone.
    pub span: Span,
    pub generic_args: Vec<TypeReprId>,
    /// Span from `<` to `>` when generic arguments were written.
    pub angles: Option<Span>,
    pub decl: Option<DeclRef>,
}

impl IdentComponent {
    pub fn new(name: Name, span: Span) -> Self {
        IdentComponent {
            name,
            span,
            generic_args: Vec::new(),
            angles: None,
            decl: None,
        }
    }

    /// Span including the generic argument list, if any.
    pub fn full_span(&self) -> Span {
        match self.angles {
            Some(angles) => self.span.merge(angles),
            None => self.span,
        }
    }
}

/// Non-empty dotted chain of components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentTypeRepr {
    components: SmallVec<[IdentComponent; 4]>,
}

impl IdentTypeRepr {
    /// Returns `None` for an empty component list.
    pub fn new(components: SmallVec<[IdentComponent; 4]>) -> Option<Self> {
        if components.is_empty() {
            None
        } else {
            Some(IdentTypeRepr { components })
        }
    }

    #[inline]
    pub fn components(&self) -> &[IdentComponent] {
        &self.components
    }

    #[inline]
    pub fn first(&self) -> &IdentComponent {
        &self.components[0]
    }

    /// Record the scope lookup result for the leading component.
    ///
    /// Only the leading component is ever resolved.
    pub fn resolve_leading(&mut self, decl: Option<DeclRef>) {
        self.components[0].decl = decl;
    }

    pub fn span(&self) -> Span {
        let first = self.components[0].span;
        let last = self.components[self.components.len() - 1].full_span();
        first.merge(last)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TupleElement {
    pub label: Option<(Name, Span)>,
    pub ty: TypeReprId,
}

/// Elements of a parenthesized type list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TupleTypeRepr {
    elements: Vec<TupleElement>,
    ellipsis: Option<Span>,
    pub parens: Span,
}

impl TupleTypeRepr {
    /// Returns `None` when an ellipsis is given with no elements.
    pub fn new(elements: Vec<TupleElement>, ellipsis: Option<Span>, parens: Span) -> Option<Self> {
        if ellipsis.is_some() && elements.is_empty() {
            return None;
        }
        Some(TupleTypeRepr {
            elements,
            ellipsis,
            parens,
        })
    }

    #[inline]
    pub fn elements(&self) -> &[TupleElement] {
        &self.elements
    }

    #[inline]
    pub fn ellipsis(&self) -> Option<Span> {
        self.ellipsis
    }

    /// Whether the last element is variadic.
    #[inline]
    pub fn has_ellipsis(&self) -> bool {
        self.ellipsis.is_some()
    }
}
