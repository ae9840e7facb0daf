//! Type parsing: the AST builder.
//!
//! Every production returns `Option`: `Some` with the allocated node, or
//! `None` after recording at least one error. Callers stop on `None`; only
//! generic argument lists, compositions and tuple bodies resynchronize
//! before failing.

use smallvec::SmallVec;
use tessel_diagnostic::ErrorCode;
use tessel_ir::{
    IdentComponent, IdentTypeRepr, Span, TokenKind, TupleElement, TupleTypeRepr, TypeRepr,
    TypeReprId, TypeReprKind,
};
use tracing::trace;

use crate::recovery::{synchronize, TUPLE_CLOSE};
use crate::{ExprMessage, ParseError, Parser, TypeMessage};

/// A parsed `<...>` list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericArgs {
    pub args: Vec<TypeReprId>,
    /// From `<` through `>`.
    pub angles: Span,
}

impl Parser<'_> {
    /// Parse an optional attribute list followed by a type.
    ///
    /// An empty attribute list (`[]`) leaves the type unwrapped.
    pub fn parse_type_annotation(&mut self, message: TypeMessage) -> Option<TypeReprId> {
        let attrs = self.parse_attribute_list()?;
        let base = self.parse_type_with(message)?;
        if attrs.is_empty() {
            return Some(base);
        }
        let span = attrs.span.merge(self.types.span(base));
        Some(self.alloc_type(TypeReprKind::Attributed { attrs, base }, span))
    }

    /// Parse a type, reporting "expected type" if none starts here.
    pub fn parse_type(&mut self) -> Option<TypeReprId> {
        self.parse_type_with(TypeMessage::ExpectedType)
    }

    /// Parse a type, reporting `message` if none starts here.
    pub fn parse_type_with(&mut self, message: TypeMessage) -> Option<TypeReprId> {
        self.nested(|p| p.parse_type_inner(message))
    }

    fn parse_type_inner(&mut self, message: TypeMessage) -> Option<TypeReprId> {
        let mut ty = match self.current_kind() {
            TokenKind::Ident(_) | TokenKind::KwThis => self.parse_type_identifier()?,
            TokenKind::KwProtocol => self.parse_type_composition()?,
            TokenKind::LParen => self.parse_type_tuple()?,
            TokenKind::Error => {
                self.error(
                    ParseError::new(ErrorCode::E0002, "invalid character", self.current_span())
                        .with_context(message.as_str()),
                );
                return None;
            }
            found => {
                self.error(
                    ParseError::new(
                        ErrorCode::E1005,
                        format!("{}, found {}", message.as_str(), found.display_name()),
                        self.current_span(),
                    )
                    .with_context(message.as_str()),
                );
                return None;
            }
        };

        while self.cursor.at_metatype_suffix() {
            self.bump();
            let metatype_span = self.bump();
            let span = self.types.span(ty).merge(metatype_span);
            ty = self.alloc_type(
                TypeReprKind::MetaType {
                    base: ty,
                    metatype_span,
                },
                span,
            );
        }

        while self.check(TokenKind::Question) && !self.cursor.at_line_start() {
            let question = self.bump();
            let span = self.types.span(ty).merge(question);
            ty = self.alloc_type(TypeReprKind::Optional { base: ty, question }, span);
        }

        if self.cursor.is_following_lsquare() {
            ty = self.parse_type_array(ty)?;
        }

        if self.check(TokenKind::Arrow) {
            self.bump();
            let output = self.parse_type_with(TypeMessage::ExpectedFunctionResult)?;
            let span = self.types.span(ty).merge(self.types.span(output));
            ty = self.alloc_type(TypeReprKind::Function { input: ty, output }, span);
        }

        Some(ty)
    }

    /// Parse `A.B<C>.D`, then look up `A` in scope.
    fn parse_type_identifier(&mut self) -> Option<TypeReprId> {
        let mut components: SmallVec<[IdentComponent; 4]> = SmallVec::new();
        loop {
            let (name, span) = match self.cursor.expect_type_name() {
                Ok(found) => found,
                Err(err) => {
                    self.error(err);
                    return None;
                }
            };
            let mut component = IdentComponent::new(name, span);
            if self.check(TokenKind::Lt) {
                let generics = self.parse_generic_arguments()?;
                component.generic_args = generics.args;
                component.angles = Some(generics.angles);
            }
            components.push(component);

            if !self.cursor.at_dotted_continuation() {
                break;
            }
            self.bump();
        }

        let mut ident = IdentTypeRepr::new(components)?;
        let leading = ident.first().name;
        let decl = self.scope.lookup(leading);
        trace!(
            name = self.cursor.interner().lookup(leading),
            resolved = decl.is_some(),
            "type name lookup"
        );
        ident.resolve_leading(decl);
        let span = ident.span();
        Some(self.alloc_type(TypeReprKind::Ident(ident), span))
    }

    /// Parse `<T, U>`. The cursor must be on `<`.
    ///
    /// On any failure the list is skipped up to the next operator token,
    /// a `>` there is consumed, and `None` is returned.
    pub fn parse_generic_arguments(&mut self) -> Option<GenericArgs> {
        let open = match self.cursor.expect(TokenKind::Lt).map(|token| token.span) {
            Ok(span) => span,
            Err(err) => {
                self.error(err);
                return None;
            }
        };
        self.nested(|p| p.parse_generic_arguments_body(open))
    }

    fn parse_generic_arguments_body(&mut self, open: Span) -> Option<GenericArgs> {
        let mut args = Vec::new();
        loop {
            let Some(arg) = self.parse_type_with(TypeMessage::ExpectedGenericArgument) else {
                self.recover_angle_list();
                return None;
            };
            args.push(arg);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }

        if !self.check(TokenKind::Gt) {
            self.error(ParseError::unclosed(open, self.current_span(), '<'));
            self.recover_angle_list();
            return None;
        }
        let close = self.bump();
        Some(GenericArgs {
            args,
            angles: open.merge(close),
        })
    }

    /// Skip to the next operator and swallow a `>` found there.
    fn recover_angle_list(&mut self) {
        self.cursor.skip_until_any_operator();
        self.cursor.eat(TokenKind::Gt);
    }

    /// Parse `protocol<A, B.C>`.
    fn parse_type_composition(&mut self) -> Option<TypeReprId> {
        let protocol_span = self.bump();
        if !self.check(TokenKind::Lt) {
            self.error(
                ParseError::new(
                    ErrorCode::E1006,
                    format!(
                        "expected `<` after `protocol`, found {}",
                        self.current_kind().display_name()
                    ),
                    self.current_span(),
                )
                .with_label(protocol_span, "protocol composition starts here"),
            );
            return None;
        }
        let open = self.bump();

        let mut protocols = Vec::new();
        let mut invalid = false;
        if !self.check(TokenKind::Gt) {
            loop {
                match self.parse_type_identifier() {
                    Some(protocol) => protocols.push(protocol),
                    None => {
                        invalid = true;
                        break;
                    }
                }
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }

        if !self.check(TokenKind::Gt) {
            if !invalid {
                self.error(ParseError::unclosed(open, self.current_span(), '<'));
            }
            self.recover_angle_list();
            return None;
        }
        let close = self.bump();
        if invalid {
            return None;
        }

        let angles = open.merge(close);
        Some(self.alloc_type(
            TypeReprKind::ProtocolComposition {
                protocols,
                protocol_span,
                angles,
            },
            protocol_span.merge(close),
        ))
    }

    /// Parse `( ... )`.
    fn parse_type_tuple(&mut self) -> Option<TypeReprId> {
        let open = self.bump();
        self.nested(|p| p.parse_type_tuple_body(open))
    }

    fn parse_type_tuple_body(&mut self, open: Span) -> Option<TypeReprId> {
        if self.check(TokenKind::Ellipsis) {
            let ellipsis = self.bump();
            self.error(
                ParseError::new(
                    ErrorCode::E1009,
                    "`...` requires at least one tuple element",
                    ellipsis,
                )
                .with_context("nothing to make variadic"),
            );
            self.cursor.eat(TokenKind::RParen);
            return None;
        }

        let mut elements = Vec::new();
        let mut ellipsis = None;
        let mut invalid = false;
        if !self.check(TokenKind::RParen) {
            loop {
                let Some(element) = self.parse_tuple_element() else {
                    invalid = true;
                    break;
                };
                elements.push(element);

                if self.check(TokenKind::Eq) {
                    self.reject_tuple_default();
                }

                if self.check(TokenKind::Ellipsis) {
                    let span = self.bump();
                    if self.check(TokenKind::RParen) {
                        ellipsis = Some(span);
                    } else {
                        self.error(
                            ParseError::new(
                                ErrorCode::E1008,
                                "`...` must be at the end of a tuple type",
                                span,
                            )
                            .with_context("only the last element can be variadic"),
                        );
                        invalid = true;
                    }
                    break;
                }

                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }

        if invalid {
            synchronize(&mut self.cursor, TUPLE_CLOSE);
            self.cursor.eat(TokenKind::RParen);
            return None;
        }

        if !self.check(TokenKind::RParen) {
            self.error(ParseError::unclosed(open, self.current_span(), '('));
            synchronize(&mut self.cursor, TUPLE_CLOSE);
            self.cursor.eat(TokenKind::RParen);
            return None;
        }
        let close = self.bump();
        let parens = open.merge(close);
        let tuple = TupleTypeRepr::new(elements, ellipsis, parens)?;
        Some(self.alloc_type(TypeReprKind::Tuple(tuple), parens))
    }

    /// `label: [attrs] T` or `[attrs] T`.
    fn parse_tuple_element(&mut self) -> Option<TupleElement> {
        if self.cursor.at_tuple_label() {
            let label = match self.cursor.expect_binding_name() {
                Ok(label) => label,
                Err(err) => {
                    self.error(err);
                    return None;
                }
            };
            self.bump();
            let ty = self.parse_type_annotation(TypeMessage::ExpectedType)?;
            Some(TupleElement {
                label: Some(label),
                ty,
            })
        } else {
            let ty = self.parse_type_annotation(TypeMessage::ExpectedTupleElement)?;
            Some(TupleElement { label: None, ty })
        }
    }

    /// Parse `= expr` after a tuple element and report it as not allowed,
    /// with a fix that deletes it. Parsing continues either way.
    fn reject_tuple_default(&mut self) {
        let type_end = self.previous_span().end;
        let eq = self.bump();
        let mut err = ParseError::new(
            ErrorCode::E1007,
            "default argument values are not allowed in tuple types",
            eq,
        )
        .with_context("remove the default value");
        if let Some(init) = self.parse_expr_with(ExprMessage::Initializer) {
            let end = self.exprs.span(init).end;
            err = err
                .with_highlight(eq.merge(self.exprs.span(init)))
                .with_removal(Span::new(type_end, end));
        }
        self.error(err);
    }

    /// Parse `[]` suffixes after `base`. The cursor must be on `[`.
    ///
    /// The first bracket pair is the outermost array: `T[][]` is an array
    /// of `T[]`. `[expr]` is parsed so the size can be pointed at, then
    /// rejected.
    fn parse_type_array(&mut self, base: TypeReprId) -> Option<TypeReprId> {
        self.nested(|p| p.parse_type_array_inner(base))
    }

    fn parse_type_array_inner(&mut self, base: TypeReprId) -> Option<TypeReprId> {
        let open = self.bump();

        if self.check(TokenKind::RBracket) {
            let close = self.bump();
            let mut element = base;
            if self.cursor.is_following_lsquare() {
                element = self.parse_type_array(element)?;
            }
            let brackets = open.merge(close);
            let span = self.types.span(element).merge(brackets);
            return Some(self.alloc_type(
                TypeReprKind::Array {
                    base: element,
                    size: None,
                    brackets,
                },
                span,
            ));
        }

        let size = self.parse_expr_with(ExprMessage::ArraySize)?;
        if !self.check(TokenKind::RBracket) {
            self.error(ParseError::unclosed(open, self.current_span(), '['));
            return None;
        }
        self.bump();
        if self.cursor.is_following_lsquare() {
            self.parse_type_array(base)?;
        }
        self.error(
            ParseError::new(
                ErrorCode::E1010,
                "fixed-length arrays are not supported",
                open,
            )
            .with_highlight(self.exprs.span(size))
            .with_context("array sizes cannot be written in types"),
        );
        None
    }

    fn alloc_type(&mut self, kind: TypeReprKind, span: Span) -> TypeReprId {
        self.types.alloc(TypeRepr::new(kind, span))
    }
}

#[cfg(test)]
mod tests;
