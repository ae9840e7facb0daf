//! The nesting limit turns pathological input into a diagnostic instead
//! of a stack overflow.

mod common;

use tessel_diagnostic::ErrorCode;
use tessel_ir::StringInterner;
use tessel_parse::{parse_type_source, probe_type_source, NoScope, ParserConfig};

fn codes(source: &str, config: ParserConfig) -> Vec<ErrorCode> {
    let interner = StringInterner::new();
    parse_type_source(source, &interner, &NoScope, config)
        .errors
        .iter()
        .map(|e| e.code)
        .collect()
}

#[test]
fn deep_tuples_hit_the_limit() {
    common::init_tracing();
    let depth = 10_000;
    let source = format!("{}Int{}", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(codes(&source, ParserConfig::default()), vec![ErrorCode::E1011]);
    assert!(!probe_type_source(&source, &StringInterner::new(), ParserConfig::default()));
}

#[test]
fn deep_generics_hit_the_limit() {
    let depth = 5_000;
    let source = format!("{}Int{}", "A<".repeat(depth), ">".repeat(depth));

    assert_eq!(codes(&source, ParserConfig::default()), vec![ErrorCode::E1011]);
    assert!(!probe_type_source(&source, &StringInterner::new(), ParserConfig::default()));
}

#[test]
fn long_arrow_chains_hit_the_limit() {
    let source = vec!["Int"; 1_000].join(" -> ");
    assert_eq!(codes(&source, ParserConfig::default()), vec![ErrorCode::E1011]);
}

#[test]
fn nesting_within_the_limit_is_fine() {
    let source = format!("{}Int{}", "(".repeat(50), ")".repeat(50));
    assert!(codes(&source, ParserConfig::default()).is_empty());
    assert!(probe_type_source(&source, &StringInterner::new(), ParserConfig::default()));
}

#[test]
fn raised_limit_accepts_deeper_input() {
    let source = format!("{}Int{}", "A<".repeat(300), ">".repeat(300));
    assert_eq!(codes(&source, ParserConfig::default()), vec![ErrorCode::E1011]);
    assert!(codes(&source, ParserConfig::default().with_max_nesting_depth(1_000)).is_empty());
}

#[test]
fn probe_honors_the_configured_limit() {
    let interner = StringInterner::new();
    let source = format!("{}Int{}", "A<".repeat(300), ">".repeat(300));
    let raised = ParserConfig::default().with_max_nesting_depth(1_000);

    assert!(!probe_type_source(&source, &interner, ParserConfig::default()));
    assert!(probe_type_source(&source, &interner, raised));
}

#[test]
fn deep_array_suffixes_hit_the_limit() {
    let source = format!("Int{}", "[]".repeat(1_000));
    assert_eq!(codes(&source, ParserConfig::default()), vec![ErrorCode::E1011]);
}
