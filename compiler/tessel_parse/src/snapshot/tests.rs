use pretty_assertions::assert_eq;
use tessel_ir::{StringInterner, TokenKind};

use super::*;
use crate::TypeMessage;

#[test]
fn test_snapshot_size() {
    assert!(
        std::mem::size_of::<ParserSnapshot>() <= 16,
        "ParserSnapshot should be small (got {} bytes)",
        std::mem::size_of::<ParserSnapshot>()
    );
}

#[test]
fn test_backtrack_restores_on_drop() {
    let interner = StringInterner::new();
    let tokens = tessel_lexer::lex("A.B.C", &interner);
    let mut cursor = Cursor::new(&tokens, &interner);

    {
        let mut backtrack = Backtrack::new(&mut cursor);
        backtrack.advance();
        backtrack.advance();
        assert_eq!(backtrack.position(), 2);
    }
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_backtrack_commit_keeps_position() {
    let interner = StringInterner::new();
    let tokens = tessel_lexer::lex("A.B", &interner);
    let mut cursor = Cursor::new(&tokens, &interner);

    let mut backtrack = Backtrack::new(&mut cursor);
    backtrack.advance();
    backtrack.commit();
    assert_eq!(cursor.position(), 1);
}

#[test]
fn test_nested_backtracks_restore_independently() {
    let interner = StringInterner::new();
    let tokens = tessel_lexer::lex("a b c d", &interner);
    let mut cursor = Cursor::new(&tokens, &interner);

    let mut outer = Backtrack::new(&mut cursor);
    outer.advance();
    {
        let mut inner = Backtrack::new(&mut outer);
        inner.advance();
        inner.advance();
    }
    assert_eq!(outer.position(), 1);
    drop(outer);
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_look_ahead_always_restores() {
    let interner = StringInterner::new();
    let tokens = tessel_lexer::lex("Int?", &interner);
    let mut parser = Parser::new(&tokens, &interner);

    let parsed = parser.look_ahead(|p| p.parse_type().is_some());
    assert!(parsed);
    assert_eq!(parser.cursor.position(), 0);
}

#[test]
fn test_try_parse_discards_errors_on_failure() {
    let interner = StringInterner::new();
    let tokens = tessel_lexer::lex("-> Int", &interner);
    let mut parser = Parser::new(&tokens, &interner);

    let result = parser.try_parse(|p| p.parse_type_with(TypeMessage::ExpectedType));
    assert!(result.is_none());
    assert!(parser.errors.is_empty());
    assert!(parser.cursor.check(TokenKind::Arrow));
}

#[test]
fn test_try_parse_keeps_success() {
    let interner = StringInterner::new();
    let tokens = tessel_lexer::lex("Int, String", &interner);
    let mut parser = Parser::new(&tokens, &interner);

    let result = parser.try_parse(|p| p.parse_type());
    assert!(result.is_some());
    assert!(parser.cursor.check(TokenKind::Comma));
}
