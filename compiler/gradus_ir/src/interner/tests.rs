use super::*;
use pretty_assertions::assert_eq;

#[test]
fn intern_is_idempotent() {
    let interner = StringInterner::new();
    let a = interner.intern("Elem");
    let b = interner.intern("Elem");
    assert_eq!(a, b);
    assert_eq!(interner.lookup(a), "Elem");
}

#[test]
fn distinct_strings_get_distinct_names() {
    let interner = StringInterner::new();
    let a = interner.intern("K");
    let b = interner.intern("V");
    assert_ne!(a, b);
}

#[test]
fn empty_string_is_pre_interned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn builtins_are_pre_interned() {
    let interner = StringInterner::new();
    let before = interner.len();
    interner.intern("Object");
    interner.intern("nil?");
    assert_eq!(interner.len(), before);
    assert!(!interner.is_empty());
}

#[test]
fn shared_across_threads() {
    let interner = StringInterner::new();
    let names: Vec<Name> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| interner.intern("Shared")))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|_| panic!("interning thread panicked")))
            .collect()
    });
    assert!(names.windows(2).all(|w| w[0] == w[1]));
}
