use super::*;
use crate::Name;

#[test]
fn test_discriminant_index_uniqueness() {
    let mut seen = [false; 64];

    let tokens = [
        TokenKind::Ident(Name::EMPTY),
        TokenKind::Int(0),
        TokenKind::Float(0),
        TokenKind::String(Name::EMPTY),
        TokenKind::KwThis,
        TokenKind::KwProtocol,
        TokenKind::KwMetatype,
        TokenKind::KwVar,
        TokenKind::KwLet,
        TokenKind::KwFunc,
        TokenKind::KwClass,
        TokenKind::KwStruct,
        TokenKind::KwEnum,
        TokenKind::KwExtension,
        TokenKind::KwImport,
        TokenKind::KwTypealias,
        TokenKind::KwSubscript,
        TokenKind::KwInit,
        TokenKind::KwTrue,
        TokenKind::KwFalse,
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
        TokenKind::Period,
        TokenKind::PeriodPrefix,
        TokenKind::Question,
        TokenKind::Underscore,
        TokenKind::At,
        TokenKind::Lt,
        TokenKind::Gt,
        TokenKind::Operator(Name::EMPTY),
        TokenKind::Error,
        TokenKind::Eof,
    ];

    for token in &tokens {
        let idx = token.discriminant_index();
        assert!(idx <= TokenTag::MAX_DISCRIMINANT, "{token:?} out of range");
        assert!(!seen[idx as usize], "duplicate index {idx} for {token:?}");
        seen[idx as usize] = true;
    }
}

#[test]
fn test_keyword_str() {
    assert_eq!(TokenKind::KwThis.keyword_str(), Some("This"));
    assert_eq!(TokenKind::KwMetatype.keyword_str(), Some("metatype"));
    assert_eq!(TokenKind::Lt.keyword_str(), None);
    assert_eq!(TokenKind::Ident(Name::EMPTY).keyword_str(), None);
}

#[test]
fn test_is_any_operator() {
    assert!(TokenKind::Lt.is_any_operator());
    assert!(TokenKind::Gt.is_any_operator());
    assert!(TokenKind::Operator(Name::EMPTY).is_any_operator());
    assert!(!TokenKind::Arrow.is_any_operator());
    assert!(!TokenKind::Comma.is_any_operator());
}

#[test]
fn test_flags() {
    let mut flags = TokenFlags::EMPTY;
    assert!(!flags.is_line_start());
    flags.set(TokenFlags::NEWLINE_BEFORE);
    flags.set(TokenFlags::LINE_START);
    assert!(flags.has_newline_before());
    assert!(flags.is_line_start());
    assert!(!flags.is_adjacent());
    assert_eq!(
        flags.bits(),
        TokenFlags::NEWLINE_BEFORE | TokenFlags::LINE_START
    );
}

#[test]
fn test_token_list_parallel_arrays() {
    let mut list = TokenList::new();
    list.push(Token::new(TokenKind::Lt, crate::Span::new(0, 1)));
    list.push_with_flags(
        Token::new(TokenKind::Gt, crate::Span::new(1, 2)),
        TokenFlags::from_bits(TokenFlags::ADJACENT),
    );

    assert_eq!(list.len(), 2);
    assert_eq!(list.tag(0), TokenTag::Lt as u8);
    assert_eq!(list.tag(1), TokenTag::Gt as u8);
    assert!(!list.flag(0).is_adjacent());
    assert!(list.flag(1).is_adjacent());
    assert_eq!(list[1].kind, TokenKind::Gt);
}
