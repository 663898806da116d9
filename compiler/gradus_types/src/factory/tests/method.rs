use super::*;
use gradus_ir::{MethodOrigin, SigArena};
use pretty_assertions::assert_eq;

use crate::params::Params;
use crate::subst::Substitution;
use crate::translate::Translator;

/// `[T] (T) { (T) -> void } -> T`, declared in the fixture's arena.
fn generic_sig(fx: &mut Fixture) -> MethodSig {
    let t = fx.n("T");
    let var = fx.env.alloc(SigType::Variable(t));
    let void = fx.env.alloc(SigType::Void);
    MethodSig {
        type_params: vec![t],
        function: SigFunction::positional(&[var], var),
        block: Some(SigBlock {
            function: SigFunction::positional(&[var], void),
            required: false,
        }),
    }
}

#[test]
fn type_parameters_are_kept_without_a_clash() {
    let mut fx = Fixture::new();
    let sig = generic_sig(&mut fx);
    let mut factory = fx.factory();
    let t = Type::Var(fx.n("T"));

    let method = factory.method_type(&sig, &fx.instance("::Integer"), None, None);

    assert_eq!(method.type_params, vec![fx.n("T")]);
    assert_eq!(method.params, Params::positional(vec![t.clone()]));
    assert_eq!(method.return_type, t);
    let block = method.block.unwrap();
    assert!(block.optional);
    assert_eq!(block.ty.return_type, Type::Void);
}

#[test]
fn clashing_type_parameters_get_fresh_names() {
    let mut fx = Fixture::new();
    let sig = generic_sig(&mut fx);
    let mut factory = fx.factory();
    let receiver = Type::instance(fx.name("::Box"), vec![Type::Var(fx.n("T"))]);

    let first = factory.method_type(&sig, &receiver, None, None);
    let second = factory.method_type(&sig, &receiver, None, None);

    let renamed = first.type_params[0];
    assert_ne!(renamed, fx.n("T"));
    assert_ne!(renamed, second.type_params[0]);
    assert!(fx.interner.lookup(renamed).starts_with("T("));
    assert_eq!(first.params, Params::positional(vec![Type::Var(renamed)]));
    assert_eq!(first.return_type, Type::Var(renamed));
    assert_eq!(
        first.block.unwrap().ty.params,
        Params::positional(vec![Type::Var(renamed)])
    );
}

#[test]
fn supplied_substitution_wins_over_renaming() {
    let mut fx = Fixture::new();
    let sig = generic_sig(&mut fx);
    let mut factory = fx.factory();
    let t = fx.n("T");
    let integer = fx.instance("::Integer");
    let subst = Substitution::build(&[t], vec![integer.clone()]).unwrap();
    let origin = MethodOrigin {
        defined_in: fx.name("::Box"),
        kind: MemberKind::Instance,
    };

    let method = factory.method_type(&sig, &Type::Var(t), Some(&subst), Some(origin.clone()));

    assert_eq!(method.params, Params::positional(vec![integer.clone()]));
    assert_eq!(method.return_type, integer);
    assert_eq!(method.origin, Some(origin));
}

#[test]
fn method_type_to_declaration_inverts_the_block_flag() {
    let mut fx = Fixture::new();
    let sig = generic_sig(&mut fx);
    let mut factory = fx.factory();
    let method = factory.method_type(&sig, &Type::Nil, None, None);
    let mut arena = SigArena::new();

    let declared = factory.method_type_to_declaration(&method, &mut arena).unwrap();

    assert_eq!(declared.type_params, vec![fx.n("T")]);
    let block = declared.block.unwrap();
    assert!(!block.required);
    assert!(declared.function.required_positionals[0].name.is_none());
    assert_eq!(
        Translator::to_internal_uncached(&arena, declared.function.return_type),
        Type::Var(fx.n("T"))
    );
    assert_eq!(
        Translator::to_internal_uncached(&arena, block.function.return_type),
        Type::Void
    );
}

#[test]
fn display_reads_like_a_signature() {
    let mut fx = Fixture::new();
    let sig = generic_sig(&mut fx);
    let mut factory = fx.factory();

    let method = factory.method_type(&sig, &Type::Nil, None, None);

    assert_eq!(method.display(&fx.interner), "[T] (T) ?{ (T) -> void } -> T");
}
