#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;
use tessel_diagnostic::ErrorCode;
use tessel_ir::{Span, StringInterner, TokenKind};

use crate::Parser;

fn with_parser<T>(source: &str, f: impl FnOnce(&mut Parser<'_>, &StringInterner) -> T) -> T {
    let interner = StringInterner::new();
    let tokens = tessel_lexer::lex(source, &interner);
    let mut parser = Parser::new(&tokens, &interner);
    f(&mut parser, &interner)
}

#[test]
fn test_no_bracket_is_empty_list() {
    with_parser("Int", |p, _| {
        let attrs = p.parse_attribute_list().unwrap();
        assert!(attrs.is_empty());
        assert_eq!(p.position(), 0);
    });
}

#[test]
fn test_names_and_argument_groups() {
    with_parser("[noreturn, cc(cdecl, (x)), init] Int", |p, interner| {
        let attrs = p.parse_attribute_list().unwrap();
        assert_eq!(attrs.len(), 3);
        assert_eq!(attrs.span, Span::new(0, 32));
        assert!(attrs.contains(interner.intern("noreturn")));
        assert!(attrs.contains(interner.intern("init")));

        let cc = &attrs.attrs[1];
        assert_eq!(interner.lookup(cc.name), "cc");
        assert_eq!(cc.args, Some(Span::new(13, 25)));
        assert_eq!(attrs.attrs[0].args, None);

        assert!(p.current().kind != TokenKind::RBracket);
        assert!(p.errors().is_empty());
    });
}

#[test]
fn test_missing_name() {
    with_parser("[, a] Int", |p, _| {
        assert!(p.parse_attribute_list().is_none());
        assert_eq!(p.errors()[0].code, ErrorCode::E1004);
    });
}

#[test]
fn test_unclosed_list() {
    with_parser("[a Int", |p, _| {
        assert!(p.parse_attribute_list().is_none());
        let err = &p.errors()[0];
        assert_eq!(err.code, ErrorCode::E1003);
        assert_eq!(err.labels[0].0, Span::new(0, 1));
    });
}

#[test]
fn test_unclosed_argument_group() {
    with_parser("[a(b] Int", |p, _| {
        assert!(p.parse_attribute_list().is_none());
        assert_eq!(p.errors()[0].code, ErrorCode::E1003);
    });
}
