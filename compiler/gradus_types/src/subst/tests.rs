use super::*;
use gradus_ir::{Literal, TypeName};
use crate::ty::ProcType;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

struct Names {
    a: Name,
    b: Name,
    string: Type,
    integer: Type,
    float: Type,
    object: Type,
}

fn names(interner: &StringInterner) -> Names {
    let top = |name: &str| TypeName::top_level(interner.intern(name));
    Names {
        a: interner.intern("a"),
        b: interner.intern("b"),
        string: Type::simple_instance(top("String")),
        integer: Type::simple_instance(top("Integer")),
        float: Type::simple_instance(top("Float")),
        object: Type::Singleton(top("Object")),
    }
}

fn full(n: &Names) -> Substitution {
    Substitution::build(&[n.a, n.b], vec![n.string.clone(), Type::Any])
        .unwrap()
        .with_instance_type(n.integer.clone())
        .with_module_type(n.object.clone())
        .with_self_type(n.float.clone())
}

#[test]
fn build_binds_pairwise() {
    let interner = StringInterner::new();
    let n = names(&interner);
    let s = full(&n);

    assert_eq!(s.dictionary.len(), 2);
    assert_eq!(s.dictionary.get(&n.a), Some(&n.string));
    assert_eq!(s.dictionary.get(&n.b), Some(&Type::Any));
    assert_eq!(s.instance_type, Some(n.integer));
    assert_eq!(s.module_type, Some(n.object));
    assert_eq!(s.self_type, Some(n.float));
}

#[test]
fn build_rejects_length_mismatch() {
    let interner = StringInterner::new();
    let n = names(&interner);

    let result = Substitution::build(&[n.a, n.b], vec![n.string]);

    assert_eq!(result, Err(SubstError::ArityMismatch { vars: 2, types: 1 }));
}

#[test]
fn apply_replaces_variables_and_slots() {
    let interner = StringInterner::new();
    let n = names(&interner);
    let s = full(&n);
    let x = interner.intern("x");

    assert_eq!(s.apply(&Type::Var(n.a)), n.string);
    assert_eq!(s.apply(&Type::Var(x)), Type::Var(x));
    assert_eq!(s.apply(&Type::InstanceSelf), n.integer);
    assert_eq!(s.apply(&Type::ClassLiteral), n.object);
    assert_eq!(s.apply(&Type::SelfRef), n.float);
}

#[test]
fn apply_leaves_placeholders_without_slots() {
    let interner = StringInterner::new();
    let n = names(&interner);
    let s = Substitution::build(&[n.a], vec![n.string]).unwrap();

    assert_eq!(s.apply(&Type::InstanceSelf), Type::InstanceSelf);
    assert_eq!(s.apply(&Type::ClassLiteral), Type::ClassLiteral);
    assert_eq!(s.apply(&Type::SelfRef), Type::SelfRef);
}

#[test]
fn apply_rebuilds_unions() {
    let interner = StringInterner::new();
    let n = names(&interner);
    let s = full(&n);

    let ty = Type::union([Type::Var(n.a), Type::Var(n.b)]);

    assert_eq!(s.apply(&ty), Type::Any);
}

#[test]
fn apply_collapses_members_made_equal() {
    let interner = StringInterner::new();
    let n = names(&interner);
    let s = Substitution::build(&[n.a, n.b], vec![n.string.clone(), n.string.clone()]).unwrap();

    let ty = Type::union([Type::Var(n.a), Type::Var(n.b)]);

    assert_eq!(s.apply(&ty), n.string);
}

#[test]
fn apply_is_structural_through_arguments() {
    let interner = StringInterner::new();
    let n = names(&interner);
    let s = full(&n);
    let array = TypeName::top_level(interner.intern("Array"));
    let key = interner.intern("key");

    assert_eq!(
        s.apply(&Type::instance(array.clone(), vec![Type::Var(n.a)])),
        Type::instance(array, vec![n.string.clone()])
    );
    assert_eq!(
        s.apply(&Type::Record(vec![(Literal::Symbol(key), Type::SelfRef)])),
        Type::Record(vec![(Literal::Symbol(key), n.float.clone())])
    );
    assert_eq!(
        s.apply(&Type::proc(
            Params::positional(vec![Type::Var(n.a)]),
            Type::InstanceSelf
        )),
        Type::proc(Params::positional(vec![n.string]), n.integer)
    );
}

#[test]
fn except_removes_bindings_only() {
    let interner = StringInterner::new();
    let n = names(&interner);
    let s = full(&n).except(&[n.a]);

    assert_eq!(s.dictionary.len(), 1);
    assert_eq!(s.dictionary.get(&n.b), Some(&Type::Any));
    assert_eq!(s.self_type, Some(n.float));
}

#[test]
fn merge_respects_overwrite() {
    let interner = StringInterner::new();
    let n = names(&interner);

    let mut own = Substitution::build(&[n.a], vec![n.string.clone()])
        .unwrap()
        .with_self_type(n.float.clone());
    let other = Substitution::build(&[n.a, n.b], vec![n.integer.clone(), Type::Nil])
        .unwrap()
        .with_self_type(n.integer.clone())
        .with_module_type(n.object.clone());

    let mut kept = own.clone();
    kept.merge(&other, false);
    assert_eq!(kept.dictionary.get(&n.a), Some(&n.string));
    assert_eq!(kept.dictionary.get(&n.b), Some(&Type::Nil));
    assert_eq!(kept.self_type, Some(n.float.clone()));
    assert_eq!(kept.module_type, Some(n.object.clone()));

    own.merge(&other, true);
    assert_eq!(own.dictionary.get(&n.a), Some(&n.integer));
    assert_eq!(own.self_type, Some(n.integer));
    assert_eq!(own.module_type, Some(n.object));
}

#[test]
fn apply_method_type_skips_own_type_params() {
    let interner = StringInterner::new();
    let n = names(&interner);
    let s = full(&n);

    let method = MethodType {
        type_params: vec![n.a],
        params: Params::positional(vec![Type::Var(n.a), Type::Var(n.b)]),
        block: Some(Block {
            optional: true,
            ty: ProcType {
                params: Params::positional(vec![Type::Var(n.a)]),
                return_type: Type::SelfRef,
            },
        }),
        return_type: Type::Var(n.a),
        origin: None,
    };

    let applied = s.apply_method_type(&method);

    assert_eq!(
        applied.params,
        Params::positional(vec![Type::Var(n.a), Type::Any])
    );
    assert_eq!(applied.return_type, Type::Var(n.a));
    let block = applied.block.unwrap();
    assert!(block.optional);
    assert_eq!(block.ty.return_type, n.float);
}

#[test]
fn display_lists_bindings_and_slots() {
    let interner = StringInterner::new();
    let n = names(&interner);
    let s = Substitution::build(&[n.a], vec![n.string])
        .unwrap()
        .with_self_type(Type::Nil);

    assert_eq!(s.display(&interner), "{ a => ::String, self => nil }");
}

proptest! {
    #[test]
    fn unbound_variables_are_inert(raw in 1u32..64, bound in 64u32..128) {
        let interner = StringInterner::new();
        let free = interner.intern(&format!("free{raw}"));
        let var = interner.intern(&format!("bound{bound}"));
        let s = Substitution::build(&[var], vec![Type::Any]).unwrap();

        prop_assert_eq!(s.apply(&Type::Var(free)), Type::Var(free));
    }
}
