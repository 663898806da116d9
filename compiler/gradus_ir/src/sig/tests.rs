use super::*;
use crate::StringInterner;
use pretty_assertions::assert_eq;

#[test]
fn alloc_and_get() {
    let mut arena = SigArena::new();
    let any = arena.alloc(SigType::Any);
    let nil = arena.alloc(SigType::Nil);
    assert_eq!(arena.get(any), &SigType::Any);
    assert_eq!(arena.get(nil), &SigType::Nil);
    assert_eq!(arena.len(), 2);
}

#[test]
fn identical_nodes_keep_distinct_ids() {
    let mut arena = SigArena::new();
    let a = arena.alloc(SigType::Bool);
    let b = arena.alloc(SigType::Bool);
    assert_ne!(a, b);
    assert_eq!(arena.get(a), arena.get(b));
}

#[test]
fn arenas_have_distinct_identities() {
    let a = SigArena::new();
    let b = SigArena::new();
    assert_ne!(a.id(), b.id());
}

#[test]
fn map_type_names_rewrites_nested_names() {
    let interner = StringInterner::new();
    let mut arena = SigArena::new();
    let foo = TypeName::from_path(&interner, "Foo");
    let bar = TypeName::from_path(&interner, "Bar");

    let bar_ty = arena.alloc(SigType::ClassInstance {
        name: bar.clone(),
        args: vec![],
    });
    let foo_ty = arena.alloc(SigType::ClassInstance {
        name: foo,
        args: vec![bar_ty],
    });
    let opt = arena.alloc(SigType::Optional(foo_ty));

    let mapped = arena.map_type_names(opt, &mut |name| name.to_absolute());

    let SigType::Optional(inner) = arena.get(mapped).clone() else {
        panic!("expected Optional");
    };
    let SigType::ClassInstance { name, args } = arena.get(inner).clone() else {
        panic!("expected ClassInstance");
    };
    assert_eq!(name.display(&interner), "::Foo");
    assert_eq!(
        arena.get(args[0]),
        &SigType::ClassInstance {
            name: bar.to_absolute(),
            args: vec![]
        }
    );
    // Source tree untouched.
    assert_eq!(arena.get(opt), &SigType::Optional(foo_ty));
}

#[test]
fn map_type_names_keeps_leaves() {
    let mut arena = SigArena::new();
    let any = arena.alloc(SigType::Any);
    let mapped = arena.map_type_names(any, &mut |name| name.clone());
    assert_eq!(mapped, any);
    assert_eq!(arena.len(), 1);
}

#[test]
fn definition_method_lookup() {
    let interner = StringInterner::new();
    let mut arena = SigArena::new();
    let int = arena.alloc(SigType::ClassInstance {
        name: TypeName::from_path(&interner, "::Integer"),
        args: vec![],
    });
    let size = interner.intern("size");
    let def = Definition {
        type_params: vec![],
        methods: vec![MethodDef {
            name: size,
            visibility: Visibility::Public,
            overloads: vec![MethodOverload {
                sig: MethodSig {
                    type_params: vec![],
                    function: SigFunction::returning(int),
                    block: None,
                },
                origin: MethodOrigin {
                    defined_in: TypeName::from_path(&interner, "::Array"),
                    kind: MemberKind::Instance,
                },
            }],
        }],
    };
    assert!(def.method(size).is_some_and(|m| !m.is_private()));
    assert!(def.method(interner.intern("length")).is_none());
}
