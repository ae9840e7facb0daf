//! Attribute lists: `[name, name(args...)]` in front of a type.
//!
//! Argument groups are kept as raw spans; nothing inside them is parsed.

use tessel_diagnostic::ErrorCode;
use tessel_ir::{Attribute, AttributeList, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an attribute list if the cursor is on `[`; otherwise return an
    /// empty list without consuming anything.
    pub fn parse_attribute_list(&mut self) -> Option<AttributeList> {
        if !self.check(TokenKind::LBracket) {
            return Some(AttributeList::default());
        }
        let open = self.bump();

        let mut attrs = Vec::new();
        if !self.check(TokenKind::RBracket) {
            loop {
                attrs.push(self.parse_attribute()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }

        if !self.check(TokenKind::RBracket) {
            self.error(ParseError::unclosed(open, self.current_span(), '['));
            return None;
        }
        let close = self.bump();
        Some(AttributeList {
            attrs,
            span: open.merge(close),
        })
    }

    fn parse_attribute(&mut self) -> Option<Attribute> {
        let Some(name) = self.cursor.attribute_name() else {
            self.error(
                ParseError::new(
                    ErrorCode::E1004,
                    format!(
                        "expected attribute name, found {}",
                        self.current_kind().display_name()
                    ),
                    self.current_span(),
                )
                .with_context("expected identifier"),
            );
            return None;
        };
        let span = self.bump();

        let mut args = None;
        if self.check(TokenKind::LParen) {
            let open = self.current_span();
            self.cursor.skip_single();
            if self.cursor.previous_kind() != TokenKind::RParen {
                self.error(ParseError::unclosed(open, self.current_span(), '('));
                return None;
            }
            args = Some(open.merge(self.previous_span()));
        }

        Some(Attribute { name, span, args })
    }
}

#[cfg(test)]
mod tests;
