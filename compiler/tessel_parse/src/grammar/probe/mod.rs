//! The prober: can a type be parsed here?
//!
//! Walks the same grammar as the AST builder but allocates nothing and
//! reports nothing. It is strictly more permissive: tuple defaults are
//! skipped as balanced tokens instead of parsed, and any attribute name
//! with any balanced argument group is accepted. Fixed-size arrays and
//! `(...)` are rejected by both.
//!
//! The prober moves the cursor it is given. Callers that must not move
//! run it under a [`Backtrack`] guard, as
//! [`Prober::can_parse_as_generic_argument_list`] does.

use tessel_ir::{TokenKind, TokenTag};
use tracing::trace;

use crate::cursor::Cursor;
use crate::recovery::{GENERIC_FOLLOW, TUPLE_DEFAULT_END};
use crate::snapshot::Backtrack;
use crate::Parser;

/// Speculative recognizer for the type grammar.
pub struct Prober<'p, 'a> {
    cursor: &'p mut Cursor<'a>,
    depth: u32,
    max_depth: u32,
}

impl<'p, 'a> Prober<'p, 'a> {
    /// A prober allowed `max_depth` nested productions.
    pub fn new(cursor: &'p mut Cursor<'a>, max_depth: u32) -> Self {
        Prober {
            cursor,
            depth: 0,
            max_depth,
        }
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self) -> bool) -> bool {
        if self.depth >= self.max_depth {
            trace!(depth = self.depth, "probe nesting limit");
            return false;
        }
        self.depth += 1;
        let result = tessel_stack::ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }

    /// Attribute list (if any) followed by a type.
    pub fn can_parse_type_annotation(&mut self) -> bool {
        self.can_parse_attribute_list() && self.can_parse_type()
    }

    pub fn can_parse_type(&mut self) -> bool {
        self.nested(Self::can_parse_type_inner)
    }

    fn can_parse_type_inner(&mut self) -> bool {
        let simple = match self.cursor.current_kind() {
            TokenKind::Ident(_) | TokenKind::KwThis => self.can_parse_type_identifier(),
            TokenKind::KwProtocol => self.can_parse_type_composition(),
            TokenKind::LParen => {
                self.cursor.advance();
                self.nested(Self::can_parse_type_tuple_body)
            }
            _ => false,
        };
        if !simple {
            return false;
        }

        while self.cursor.at_metatype_suffix() {
            self.cursor.advance();
            self.cursor.advance();
        }

        while self.cursor.check(TokenKind::Question) && !self.cursor.at_line_start() {
            self.cursor.advance();
        }

        if self.cursor.is_following_lsquare() && !self.can_parse_type_array() {
            return false;
        }

        if self.cursor.eat(TokenKind::Arrow) {
            return self.can_parse_type();
        }
        true
    }

    /// `A<B>.C`: identifier or `This` components joined by either period.
    pub fn can_parse_type_identifier(&mut self) -> bool {
        loop {
            if !self.cursor.at_type_name() {
                return false;
            }
            self.cursor.advance();

            if self.cursor.check(TokenKind::Lt) && !self.can_parse_generic_arguments() {
                return false;
            }

            if !self.cursor.at_dotted_continuation() {
                return true;
            }
            self.cursor.advance();
        }
    }

    /// `<T, U>` with the cursor on `<`.
    pub fn can_parse_generic_arguments(&mut self) -> bool {
        if !self.cursor.eat(TokenKind::Lt) {
            return false;
        }
        self.nested(|p| {
            loop {
                if !p.can_parse_type() {
                    return false;
                }
                if !p.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
            p.cursor.eat(TokenKind::Gt)
        })
    }

    /// Whether the `<` at the cursor opens a generic argument list: the
    /// list must parse and be followed by a token that cannot continue an
    /// expression. Never moves the cursor.
    pub fn can_parse_as_generic_argument_list(&mut self) -> bool {
        if !self.cursor.check(TokenKind::Lt) {
            return false;
        }
        let (depth, max_depth) = (self.depth, self.max_depth);
        let mut backtrack = Backtrack::new(&mut *self.cursor);
        let mut inner = Prober {
            cursor: &mut *backtrack,
            depth,
            max_depth,
        };
        inner.can_parse_generic_arguments() && inner.at_generic_follow()
    }

    /// Token after `>` that settles it as a generic argument list.
    ///
    /// `(` and `[` count unless they start a new line; `.` counts when it
    /// is glued to the `>`.
    fn at_generic_follow(&self) -> bool {
        GENERIC_FOLLOW.contains_tag(self.cursor.current_tag())
            || ((self.cursor.check_tag(TokenTag::LParen)
                || self.cursor.check_tag(TokenTag::LBracket))
                && !self.cursor.at_line_start())
            || self.cursor.is_period_after_angle()
    }

    /// `protocol<...>`, possibly empty.
    fn can_parse_type_composition(&mut self) -> bool {
        self.cursor.advance();
        if !self.cursor.eat(TokenKind::Lt) {
            return false;
        }
        if self.cursor.eat(TokenKind::Gt) {
            return true;
        }
        loop {
            if !self.can_parse_type_identifier() {
                return false;
            }
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.eat(TokenKind::Gt)
    }

    /// Tuple body after `(`, through `)`.
    fn can_parse_type_tuple_body(&mut self) -> bool {
        if self.cursor.check(TokenKind::Ellipsis) {
            return false;
        }

        if !self.cursor.check(TokenKind::RParen)
            && !self.cursor.check(TokenKind::RBrace)
            && !self.cursor.is_start_of_decl()
        {
            loop {
                if self.cursor.at_tuple_label() {
                    self.cursor.advance();
                    self.cursor.advance();
                }

                if !self.can_parse_type_annotation() {
                    return false;
                }

                if self.cursor.eat(TokenKind::Eq) {
                    self.skip_tuple_default();
                }

                if self.cursor.eat(TokenKind::Ellipsis) {
                    return self.cursor.eat(TokenKind::RParen);
                }

                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.cursor.eat(TokenKind::RParen)
    }

    fn skip_tuple_default(&mut self) {
        while !TUPLE_DEFAULT_END.contains_tag(self.cursor.current_tag())
            && !self.cursor.is_start_of_decl()
        {
            self.cursor.skip_single();
        }
    }

    /// `[]` suffixes. `[expr]` is never a type.
    fn can_parse_type_array(&mut self) -> bool {
        self.nested(|p| {
            p.cursor.advance();
            if !p.cursor.eat(TokenKind::RBracket) {
                return false;
            }
            if p.cursor.is_following_lsquare() {
                return p.can_parse_type_array();
            }
            true
        })
    }

    /// `[name, name(balanced...)]`, or nothing.
    pub fn can_parse_attribute_list(&mut self) -> bool {
        if !self.cursor.eat(TokenKind::LBracket) {
            return true;
        }
        if self.cursor.eat(TokenKind::RBracket) {
            return true;
        }
        loop {
            if self.cursor.attribute_name().is_none() {
                return false;
            }
            self.cursor.advance();
            if self.cursor.check(TokenKind::LParen) {
                self.cursor.skip_single();
                if self.cursor.previous_kind() != TokenKind::RParen {
                    return false;
                }
            }
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.eat(TokenKind::RBracket)
    }
}

impl Parser<'_> {
    /// Whether a type starts at the cursor. Never moves the cursor and
    /// never records errors.
    pub fn can_parse_type(&mut self) -> bool {
        let depth = self.remaining_depth();
        let mut backtrack = Backtrack::new(&mut self.cursor);
        let mut prober = Prober::new(&mut backtrack, depth);
        prober.can_parse_type()
    }

    /// Whether the `<` at the cursor opens a generic argument list.
    /// Never moves the cursor.
    pub fn can_parse_as_generic_argument_list(&mut self) -> bool {
        let depth = self.remaining_depth();
        let result = Prober::new(&mut self.cursor, depth).can_parse_as_generic_argument_list();
        tracing::debug!(result, "generic argument list disambiguation");
        result
    }
}
