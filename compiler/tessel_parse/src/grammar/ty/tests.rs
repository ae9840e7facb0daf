#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;
use tessel_diagnostic::ErrorCode;
use tessel_ir::{DeclRef, Span, StringInterner, TypeReprKind};

use crate::{parse_type_source, NoScope, ParserConfig, ScopeChain, TypeParseResult};

fn parse(source: &str) -> (TypeParseResult, StringInterner) {
    let interner = StringInterner::new();
    let result = parse_type_source(source, &interner, &NoScope, ParserConfig::default());
    (result, interner)
}

/// Parse without errors and render back.
fn render(source: &str) -> String {
    let (result, interner) = parse(source);
    assert!(
        !result.has_errors(),
        "unexpected errors for {source:?}: {:?}",
        result.errors
    );
    result.display(&interner).unwrap()
}

fn error_codes(source: &str) -> Vec<ErrorCode> {
    let (result, _) = parse(source);
    result.errors.iter().map(|e| e.code).collect()
}

#[test]
fn test_simple_identifier() {
    assert_eq!(render("Int"), "Int");
    assert_eq!(render("This"), "This");
}

#[test]
fn test_dotted_identifier_with_generics() {
    assert_eq!(render("Foo<Int, String>.Bar"), "Foo<Int, String>.Bar");
    assert_eq!(render("Swift.Dictionary<K, V>"), "Swift.Dictionary<K, V>");
    assert_eq!(render("This.Element"), "This.Element");
}

#[test]
fn test_generic_then_dot_is_one_identifier() {
    let (result, interner) = parse("Foo<Bar>.Baz");
    let root = result.root.unwrap();
    let TypeReprKind::Ident(ident) = &result.arena.get(root).kind else {
        panic!("expected identifier type");
    };
    assert_eq!(ident.components().len(), 2);
    assert_eq!(interner.lookup(ident.components()[0].name), "Foo");
    assert_eq!(ident.components()[0].generic_args.len(), 1);
    assert_eq!(ident.components()[0].angles, Some(Span::new(3, 8)));
    assert_eq!(interner.lookup(ident.components()[1].name), "Baz");
    assert_eq!(result.arena.span(root), Span::new(0, 12));
}

#[test]
fn test_nested_generics_close_separately() {
    assert_eq!(render("A<B<C>>"), "A<B<C>>");
    assert_eq!(render("A<B<C<D>>>"), "A<B<C<D>>>");
}

#[test]
fn test_function_is_right_associative() {
    assert_eq!(render("A -> B -> C"), "A -> (B -> C)");
    assert_eq!(render("(A -> B) -> C"), "(A -> B) -> C");
}

#[test]
fn test_function_span_covers_both_sides() {
    let (result, _) = parse("Int -> Bool");
    let root = result.root.unwrap();
    assert!(matches!(
        result.arena.get(root).kind,
        TypeReprKind::Function { .. }
    ));
    assert_eq!(result.arena.span(root), Span::new(0, 11));
}

#[test]
fn test_suffix_order() {
    assert_eq!(render("Int?"), "Int?");
    assert_eq!(render("Int??"), "Int??");
    assert_eq!(render("Int?[]"), "Int?[]");
    assert_eq!(render("X.metatype"), "X.metatype");
    assert_eq!(render("X.metatype.metatype?"), "X.metatype.metatype?");
    assert_eq!(render("Int[] -> Int?"), "Int[] -> Int?");
}

#[test]
fn test_array_first_brackets_are_outermost() {
    let (result, _) = parse("Int[][]");
    let root = result.root.unwrap();
    let TypeReprKind::Array { base, brackets, size } = result.arena.get(root).kind else {
        panic!("expected array");
    };
    assert_eq!(size, None);
    assert_eq!(brackets, Span::new(3, 5));
    let TypeReprKind::Array { brackets: inner, .. } = result.arena.get(base).kind else {
        panic!("expected nested array");
    };
    assert_eq!(inner, Span::new(5, 7));
    assert_eq!(result.arena.span(root), Span::new(0, 7));
}

#[test]
fn test_protocol_composition() {
    assert_eq!(render("protocol<>"), "protocol<>");
    assert_eq!(render("protocol<A, B.C>"), "protocol<A, B.C>");
    assert_eq!(render("protocol<P>?"), "protocol<P>?");
}

#[test]
fn test_empty_protocol_composition_spans_angles() {
    let (result, _) = parse("protocol<>");
    assert!(result.errors.is_empty());
    let root = result.root.unwrap();
    let TypeReprKind::ProtocolComposition {
        protocols,
        protocol_span,
        angles,
    } = &result.arena.get(root).kind
    else {
        panic!("expected a protocol composition");
    };
    assert!(protocols.is_empty());
    assert_eq!(*protocol_span, Span::new(0, 8));
    assert_eq!(*angles, Span::new(8, 10));
    assert_eq!(result.arena.span(root), Span::new(0, 10));
}

#[test]
fn test_tuples() {
    assert_eq!(render("()"), "()");
    assert_eq!(render("(Int)"), "(Int)");
    assert_eq!(render("(a: Int, String)"), "(a: Int, String)");
    assert_eq!(render("(_: Int, b: Int...)"), "(_: Int, b: Int...)");
    assert_eq!(render("(Int...)"), "(Int...)");
}

#[test]
fn test_tuple_ellipsis_recorded() {
    let (result, _) = parse("(Int, String...)");
    let root = result.root.unwrap();
    let TypeReprKind::Tuple(tuple) = &result.arena.get(root).kind else {
        panic!("expected tuple");
    };
    assert_eq!(tuple.elements().len(), 2);
    assert_eq!(tuple.ellipsis(), Some(Span::new(12, 15)));
    assert_eq!(tuple.parens, Span::new(0, 16));
}

#[test]
fn test_attributes_on_annotation_and_elements() {
    assert_eq!(render("[noreturn] Int -> Int"), "[noreturn] Int -> Int");
    assert_eq!(render("(x: [inout] Int)"), "(x: [inout] Int)");
    assert_eq!(render("[cc(c), auto_closure] () -> Int"), "[cc(...), auto_closure] () -> Int");
}

#[test]
fn test_empty_attribute_list_is_transparent() {
    let (result, _) = parse("[] Int");
    assert!(!result.has_errors());
    let root = result.root.unwrap();
    assert!(matches!(result.arena.get(root).kind, TypeReprKind::Ident(_)));
}

#[test]
fn test_question_at_line_start_does_not_attach() {
    assert_eq!(error_codes("Int\n?"), vec![ErrorCode::E1001]);
    let (result, _) = parse("Int\n?");
    assert_eq!(result.root, None);
}

#[test]
fn test_bracket_at_line_start_does_not_attach() {
    assert_eq!(error_codes("Int\n[]"), vec![ErrorCode::E1001]);
}

#[test]
fn test_metatype_must_be_last_in_dotted_chain() {
    assert_eq!(error_codes("Foo.metatype.Bar"), vec![ErrorCode::E1001]);
}

#[test]
fn test_expected_type_messages() {
    let (result, _) = parse("-> Int");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::E1005);
    assert_eq!(result.errors[0].message, "expected type, found `->`");

    let (result, _) = parse("Int ->");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].message,
        "expected type for function result, found end of file"
    );

    let (result, _) = parse("Foo<Int, >");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].message,
        "expected type in generic argument list, found `>`"
    );
}

#[test]
fn test_invalid_character() {
    assert_eq!(error_codes("$"), vec![ErrorCode::E0002]);
}

#[test]
fn test_unclosed_generic_list() {
    let (result, _) = parse("Foo<Int");
    assert_eq!(result.root, None);
    assert_eq!(result.errors.len(), 1);
    let err = &result.errors[0];
    assert_eq!(err.code, ErrorCode::E1003);
    assert_eq!(err.labels, vec![(Span::new(3, 4), "`<` opened here".to_string())]);
}

#[test]
fn test_broken_generic_list_resyncs_at_operator() {
    // The list is skipped through `>` and nothing more is reported.
    let (result, _) = parse("Foo<1> ?");
    assert_eq!(result.root, None);
    let codes: Vec<_> = result.errors.iter().map(|e| e.code).collect();
    assert_eq!(codes, vec![ErrorCode::E1005]);
}

#[test]
fn test_composition_errors() {
    assert_eq!(error_codes("protocol Foo"), vec![ErrorCode::E1006]);
    assert_eq!(error_codes("protocol<A, 4>"), vec![ErrorCode::E1004]);
    assert_eq!(error_codes("protocol<A"), vec![ErrorCode::E1003]);
}

#[test]
fn test_tuple_default_is_rejected_with_fix() {
    let source = "(a: Int = 4)";
    let (result, interner) = parse(source);
    assert_eq!(result.errors.len(), 1);
    let err = &result.errors[0];
    assert_eq!(err.code, ErrorCode::E1007);
    assert_eq!(err.removal, Some(Span::new(7, 11)));

    let diag = err.to_diagnostic();
    assert_eq!(diag.suggestions[0].apply(source).as_deref(), Some("(a: Int)"));

    // Parsing carries on past the default.
    assert_eq!(result.display(&interner).as_deref(), Some("(a: Int)"));
}

#[test]
fn test_tuple_default_on_unlabeled_element() {
    assert_eq!(error_codes("(Int = f(1, 2), String)"), vec![ErrorCode::E1007]);
}

#[test]
fn test_ellipsis_not_at_end() {
    let (result, _) = parse("(Int..., String)");
    assert_eq!(result.root, None);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::E1008);
}

#[test]
fn test_ellipsis_on_empty_tuple() {
    let (result, _) = parse("(...)");
    assert_eq!(result.root, None);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::E1009);
}

#[test]
fn test_fixed_length_array() {
    let (result, _) = parse("Int[4]");
    assert_eq!(result.root, None);
    assert_eq!(result.errors.len(), 1);
    let err = &result.errors[0];
    assert_eq!(err.code, ErrorCode::E1010);
    assert_eq!(err.span, Span::new(3, 4));
    assert_eq!(err.highlight, Some(Span::new(4, 5)));
}

#[test]
fn test_array_size_missing_expression() {
    let (result, _) = parse("Int[");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::E1002);
    assert_eq!(
        result.errors[0].message,
        "expected expression for size of array type, found end of file"
    );
}

#[test]
fn test_unclosed_tuple() {
    let (result, _) = parse("(Int, String");
    assert_eq!(result.root, None);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::E1003);
    assert_eq!(result.errors[0].labels[0].0, Span::new(0, 1));
}

#[test]
fn test_nesting_limit_reports_once() {
    let interner = StringInterner::new();
    let config = ParserConfig::default().with_max_nesting_depth(4);
    let result = parse_type_source("((((((Int))))))", &interner, &NoScope, config);
    assert_eq!(result.root, None);
    let codes: Vec<_> = result.errors.iter().map(|e| e.code).collect();
    assert_eq!(codes, vec![ErrorCode::E1011]);
}

#[test]
fn test_leading_component_is_resolved() {
    let interner = StringInterner::new();
    let mut scope = ScopeChain::new();
    scope.declare(interner.intern("Dictionary"), DeclRef::new(7));

    let result = parse_type_source(
        "Dictionary<Key, Value>.Index",
        &interner,
        &scope,
        ParserConfig::default(),
    );
    let root = result.root.unwrap();
    let TypeReprKind::Ident(ident) = &result.arena.get(root).kind else {
        panic!("expected identifier type");
    };
    assert_eq!(ident.first().decl, Some(DeclRef::new(7)));
    assert_eq!(ident.components()[1].decl, None);

    // `Key` is looked up too, as the leading component of its own type.
    let TypeReprKind::Ident(key) = &result.arena.get(ident.first().generic_args[0]).kind else {
        panic!("expected identifier argument");
    };
    assert_eq!(key.first().decl, None);
}

#[test]
fn test_unresolved_name_is_not_an_error() {
    let (result, _) = parse("Unknown");
    assert!(!result.has_errors());
}
