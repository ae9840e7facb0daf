use super::*;
use pretty_assertions::assert_eq;

#[test]
fn intern_is_idempotent() {
    let interner = StringInterner::new();
    let a = interner.intern("Array");
    let b = interner.intern("Array");
    assert_eq!(a, b);
    assert_eq!(interner.lookup(a), "Array");
}

#[test]
fn distinct_strings_get_distinct_names() {
    let interner = StringInterner::new();
    let a = interner.intern("Int");
    let b = interner.intern("String");
    assert_ne!(a, b);
    assert_eq!(interner.len(), 3);
}

#[test]
fn empty_string_is_preinterned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn get_does_not_insert() {
    let interner = StringInterner::new();
    assert_eq!(interner.get("Dictionary"), None);
    let name = interner.intern("Dictionary");
    assert_eq!(interner.get("Dictionary"), Some(name));
}

#[test]
fn foreign_name_resolves_to_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(999)), "");
}
