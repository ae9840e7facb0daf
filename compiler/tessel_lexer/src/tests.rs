use pretty_assertions::assert_eq;

use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    let interner = StringInterner::new();
    lex(source, &interner).iter().map(|t| t.kind).collect()
}

#[test]
fn test_lex_generic_type() {
    let interner = StringInterner::new();
    let tokens = lex("Dictionary<Key, Value>", &interner);

    assert_eq!(tokens.len(), 7);
    assert_eq!(
        tokens[0].kind,
        TokenKind::Ident(interner.intern("Dictionary"))
    );
    assert_eq!(tokens[1].kind, TokenKind::Lt);
    assert_eq!(tokens[3].kind, TokenKind::Comma);
    assert_eq!(tokens[5].kind, TokenKind::Gt);
    assert_eq!(tokens[6].kind, TokenKind::Eof);
    assert_eq!(tokens[1].span, Span::new(10, 11));
}

#[test]
fn test_angle_brackets_never_join() {
    assert_eq!(
        kinds("A<B<C>>"),
        vec![
            TokenKind::Ident(tessel_ir::Name::from_raw(1)),
            TokenKind::Lt,
            TokenKind::Ident(tessel_ir::Name::from_raw(2)),
            TokenKind::Lt,
            TokenKind::Ident(tessel_ir::Name::from_raw(3)),
            TokenKind::Gt,
            TokenKind::Gt,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_punctuation() {
    let got = kinds("( ) [ ] { } , ; : = -> ... ? _ @");
    assert_eq!(
        got,
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::Eq,
            TokenKind::Arrow,
            TokenKind::Ellipsis,
            TokenKind::Question,
            TokenKind::Underscore,
            TokenKind::At,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keywords() {
    let got = kinds("This protocol metatype var func init");
    assert_eq!(
        got,
        vec![
            TokenKind::KwThis,
            TokenKind::KwProtocol,
            TokenKind::KwMetatype,
            TokenKind::KwVar,
            TokenKind::KwFunc,
            TokenKind::KwInit,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_operator_runs() {
    let interner = StringInterner::new();
    let tokens = lex("a == b && !c", &interner);
    assert_eq!(tokens[1].kind, TokenKind::Operator(interner.intern("==")));
    assert_eq!(tokens[3].kind, TokenKind::Operator(interner.intern("&&")));
    assert_eq!(tokens[4].kind, TokenKind::Operator(interner.intern("!")));
}

#[test]
fn test_lone_equals_is_eq() {
    let interner = StringInterner::new();
    let lexed = |source: &str| -> Vec<TokenKind> {
        lex(source, &interner).iter().map(|t| t.kind).collect()
    };

    assert_eq!(lexed("="), vec![TokenKind::Eq, TokenKind::Eof]);
    assert_eq!(
        lexed("=="),
        vec![TokenKind::Operator(interner.intern("==")), TokenKind::Eof]
    );
    assert_eq!(
        lexed("= -1"),
        vec![
            TokenKind::Eq,
            TokenKind::Operator(interner.intern("-")),
            TokenKind::Int(1),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_period_classification() {
    // Bound to an identifier on the left.
    assert_eq!(kinds("Foo.Bar")[1], TokenKind::Period);
    // Whitespace before.
    assert_eq!(kinds("Foo .Bar")[1], TokenKind::PeriodPrefix);
    // Start of input.
    assert_eq!(kinds(".Bar")[0], TokenKind::PeriodPrefix);
    // After an operator character, including a closing angle.
    assert_eq!(kinds("Foo<Bar>.Baz")[4], TokenKind::PeriodPrefix);
    // After a closing delimiter.
    assert_eq!(kinds("(Int).metatype")[3], TokenKind::Period);
    assert_eq!(kinds("f(.a)")[2], TokenKind::PeriodPrefix);
}

#[test]
fn test_line_start_and_adjacency_flags() {
    let interner = StringInterner::new();
    let tokens = lex("Int\n?x y", &interner);

    assert!(tokens.flag(0).is_line_start());
    assert!(!tokens.flag(0).is_adjacent());

    assert!(tokens.flag(1).is_line_start());
    assert!(tokens.flag(1).has_newline_before());
    assert!(!tokens.flag(1).is_adjacent());

    assert!(tokens.flag(2).is_adjacent());
    assert!(!tokens.flag(2).is_line_start());

    assert!(tokens.flag(3).has_space_before());
    assert!(!tokens.flag(3).is_adjacent());
}

#[test]
fn test_comments_are_trivia() {
    let interner = StringInterner::new();
    let tokens = lex("Int // trailing\n/* block\n */ ?", &interner);

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind, TokenKind::Question);
    assert!(tokens.flag(1).has_trivia_before());
    assert!(tokens.flag(1).is_line_start());
}

#[test]
fn test_unterminated_block_comment_is_error() {
    assert_eq!(kinds("Int /* never closed"), vec![
        TokenKind::Ident(tessel_ir::Name::from_raw(1)),
        TokenKind::Error,
        TokenKind::Eof,
    ]);
}

#[test]
fn test_literals() {
    let interner = StringInterner::new();
    let tokens = lex(r#"42 0x1F 2.5 "hi\n""#, &interner);

    assert_eq!(tokens[0].kind, TokenKind::Int(42));
    assert_eq!(tokens[1].kind, TokenKind::Int(31));
    assert_eq!(tokens[2].kind, TokenKind::Float(2.5f64.to_bits()));
    if let TokenKind::String(name) = tokens[3].kind {
        assert_eq!(interner.lookup(name), "hi\n");
    } else {
        panic!("expected string token, got {:?}", tokens[3].kind);
    }
}

#[test]
fn test_invalid_character() {
    let got = kinds("Int $ Foo");
    assert_eq!(got[1], TokenKind::Error);
    assert_eq!(got.len(), 4);
}

#[test]
fn test_eof_span_at_end() {
    let interner = StringInterner::new();
    let tokens = lex("Int ", &interner);
    assert_eq!(tokens[1].kind, TokenKind::Eof);
    assert_eq!(tokens[1].span, Span::point(4));
}
