//! Factory tests over a small core library.
//!
//! The fixture declares the builtin classes with a few members each, one
//! user class that redefines `nil?`, an interface and a set of aliases.

mod method;

use gradus_ir::{
    ClassKind, Literal, MemberKind, MethodSig, Name, SigBlock, SigFunction, SigParam, SigType,
    SigTypeId, StringInterner, TypeName, Visibility,
};

use super::Factory;
use crate::env::Environment;
use crate::ty::Type;

pub(super) struct Fixture {
    pub interner: StringInterner,
    pub env: Environment,
}

impl Fixture {
    pub fn new() -> Self {
        let interner = StringInterner::new();
        let env = Builder::new(&interner).build();
        Fixture { interner, env }
    }

    pub fn factory(&self) -> Factory<'_, Environment> {
        Factory::new(&self.env, &self.interner)
    }

    pub fn name(&self, path: &str) -> TypeName {
        TypeName::from_path(&self.interner, path)
    }

    pub fn n(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    /// `::Path` with no type arguments.
    pub fn instance(&self, path: &str) -> Type {
        Type::simple_instance(self.name(path))
    }

    pub fn alias(&self, path: &str) -> Type {
        Type::alias(self.name(path))
    }
}

struct Builder<'i> {
    interner: &'i StringInterner,
    env: Environment,
}

impl<'i> Builder<'i> {
    fn new(interner: &'i StringInterner) -> Self {
        Builder {
            interner,
            env: Environment::new(),
        }
    }

    fn name(&self, path: &str) -> TypeName {
        TypeName::from_path(self.interner, path)
    }

    fn ty(&mut self, ty: SigType) -> SigTypeId {
        self.env.alloc(ty)
    }

    fn class(&mut self, path: &str, args: Vec<SigTypeId>) -> SigTypeId {
        let name = self.name(path);
        self.ty(SigType::ClassInstance { name, args })
    }

    fn var(&mut self, name: &str) -> SigTypeId {
        let name = self.interner.intern(name);
        self.ty(SigType::Variable(name))
    }

    fn declare(&mut self, path: &str, kind: ClassKind, params: &[&str]) {
        let params = params.iter().map(|p| self.interner.intern(p)).collect();
        let name = self.name(path);
        self.env.declare_class(name, kind, params);
    }

    #[allow(clippy::too_many_arguments)]
    fn def(
        &mut self,
        owner: &str,
        kind: MemberKind,
        method: &str,
        visibility: Visibility,
        type_params: &[&str],
        function: SigFunction,
        block: Option<SigBlock>,
    ) {
        let owner = self.name(owner);
        let method = self.interner.intern(method);
        let sig = MethodSig {
            type_params: type_params.iter().map(|p| self.interner.intern(p)).collect(),
            function,
            block,
        };
        self.env
            .define_method(&owner, kind, method, visibility, vec![sig])
            .unwrap();
    }

    /// A public instance method without type parameters or block.
    fn public(&mut self, owner: &str, method: &str, params: &[SigTypeId], ret: SigTypeId) {
        let function = SigFunction::positional(params, ret);
        self.def(owner, MemberKind::Instance, method, Visibility::Public, &[], function, None);
    }

    fn inherit(&mut self, from: &str, into: &str) {
        let from = self.name(from);
        let into = self.name(into);
        self.env
            .inherit_methods(&from, &into, MemberKind::Instance)
            .unwrap();
    }

    fn build(mut self) -> Environment {
        let any = self.ty(SigType::Any);
        let boolean = self.ty(SigType::Bool);
        let nil = self.ty(SigType::Nil);
        let void = self.ty(SigType::Void);
        let self_ty = self.ty(SigType::SelfType);
        let instance = self.ty(SigType::Instance);

        let classes: [(&str, ClassKind, &[&str]); 15] = [
            ("::BasicObject", ClassKind::Class, &[]),
            ("::Object", ClassKind::Class, &[]),
            ("::Module", ClassKind::Class, &[]),
            ("::Kernel", ClassKind::Module, &[]),
            ("::NilClass", ClassKind::Class, &[]),
            ("::TrueClass", ClassKind::Class, &[]),
            ("::FalseClass", ClassKind::Class, &[]),
            ("::Integer", ClassKind::Class, &[]),
            ("::String", ClassKind::Class, &[]),
            ("::Symbol", ClassKind::Class, &[]),
            ("::Array", ClassKind::Class, &["Elem"]),
            ("::Hash", ClassKind::Class, &["K", "V"]),
            ("::Proc", ClassKind::Class, &[]),
            ("::Maybe", ClassKind::Class, &[]),
            ("::Box", ClassKind::Class, &["T"]),
        ];
        for (path, kind, params) in classes {
            self.declare(path, kind, params);
        }

        let integer = self.class("::Integer", Vec::new());
        let string = self.class("::String", Vec::new());

        // BasicObject
        self.public("::BasicObject", "!", &[], boolean);
        self.public("::BasicObject", "__id__", &[], integer);

        // Object
        for predicate in ["is_a?", "kind_of?", "instance_of?"] {
            self.public("::Object", predicate, &[any], boolean);
        }
        self.public("::Object", "nil?", &[], boolean);
        self.public("::Object", "to_s", &[], string);
        self.public("::Object", "itself", &[], self_ty);
        self.def(
            "::Object",
            MemberKind::Instance,
            "puts",
            Visibility::Private,
            &[],
            SigFunction::positional(&[any], nil),
            None,
        );
        self.inherit("::BasicObject", "::Object");

        // Module
        self.public("::Module", "===", &[any], boolean);
        self.public("::Module", "name", &[], string);
        self.inherit("::Object", "::Module");

        // NilClass
        self.public("::NilClass", "nil?", &[], boolean);
        self.public("::NilClass", "to_i", &[], integer);
        self.inherit("::Object", "::NilClass");

        // TrueClass / FalseClass
        let false_literal = self.ty(SigType::Literal(Literal::Bool(false)));
        self.public("::TrueClass", "&", &[any], boolean);
        self.public("::FalseClass", "&", &[any], false_literal);
        self.inherit("::Object", "::TrueClass");
        self.inherit("::Object", "::FalseClass");

        // Integer / String / Symbol
        self.public("::Integer", "+", &[integer], integer);
        self.public("::Integer", "to_i", &[], integer);
        self.inherit("::Object", "::Integer");
        self.public("::String", "+", &[string], string);
        self.public("::String", "size", &[], integer);
        self.inherit("::Object", "::String");
        self.inherit("::Object", "::Symbol");

        // Array[Elem]
        let elem = self.var("Elem");
        let optional_elem = self.ty(SigType::Optional(elem));
        self.public("::Array", "[]", &[integer], elem);
        self.public("::Array", "[]=", &[integer, elem], elem);
        self.public("::Array", "first", &[], optional_elem);
        self.public("::Array", "last", &[], optional_elem);
        self.public("::Array", "size", &[], integer);
        self.def(
            "::Array",
            MemberKind::Instance,
            "each",
            Visibility::Public,
            &[],
            SigFunction::returning(self_ty),
            Some(SigBlock {
                function: SigFunction::positional(&[elem], void),
                required: true,
            }),
        );
        let u = self.var("U");
        let array_u = self.class("::Array", vec![u]);
        self.def(
            "::Array",
            MemberKind::Instance,
            "map",
            Visibility::Public,
            &["U"],
            SigFunction::returning(array_u),
            Some(SigBlock {
                function: SigFunction::positional(&[elem], u),
                required: false,
            }),
        );
        self.inherit("::Object", "::Array");
        self.def(
            "::Array",
            MemberKind::Singleton,
            "new",
            Visibility::Public,
            &[],
            SigFunction::returning(instance),
            None,
        );
        self.def(
            "::Array",
            MemberKind::Singleton,
            "allocate",
            Visibility::Private,
            &[],
            SigFunction::returning(instance),
            None,
        );

        // Hash[K, V]
        let k = self.var("K");
        let v = self.var("V");
        let optional_v = self.ty(SigType::Optional(v));
        let array_k = self.class("::Array", vec![k]);
        self.public("::Hash", "[]", &[k], optional_v);
        self.public("::Hash", "[]=", &[k, v], v);
        self.public("::Hash", "keys", &[], array_k);
        self.inherit("::Object", "::Hash");

        // Proc
        let mut untyped_call = SigFunction::returning(any);
        untyped_call.rest_positionals = Some(SigParam::anonymous(any));
        for method in ["[]", "call"] {
            self.def(
                "::Proc",
                MemberKind::Instance,
                method,
                Visibility::Public,
                &[],
                untyped_call.clone(),
                None,
            );
        }
        self.public("::Proc", "arity", &[], integer);
        self.inherit("::Object", "::Proc");

        // A user class redefining `nil?`
        self.public("::Maybe", "nil?", &[], boolean);
        self.public("::Maybe", "value", &[], integer);
        self.inherit("::Object", "::Maybe");

        // Box[T] with a generic method
        let t = self.var("T");
        self.def(
            "::Box",
            MemberKind::Instance,
            "get",
            Visibility::Public,
            &[],
            SigFunction::returning(t),
            None,
        );
        self.def(
            "::Box",
            MemberKind::Instance,
            "put",
            Visibility::Public,
            &["U"],
            SigFunction::positional(&[u, t], u),
            None,
        );

        // interface _Each[T]
        let each = self.name("::_Each");
        let t_param = self.interner.intern("T");
        self.env.declare_interface(each.clone(), vec![t_param]);
        self.env
            .define_method(
                &each,
                MemberKind::Instance,
                self.interner.intern("each"),
                Visibility::Public,
                vec![MethodSig {
                    type_params: Vec::new(),
                    function: SigFunction::returning(self_ty),
                    block: Some(SigBlock {
                        function: SigFunction::positional(&[t], void),
                        required: true,
                    }),
                }],
            )
            .unwrap();

        // Aliases
        let str_alias = self.ty(SigType::Alias(self.name("::str")));
        let chain_alias = self.ty(SigType::Alias(self.name("::chain")));
        let loop_alias = self.ty(SigType::Alias(self.name("::loop")));
        let self_loop_alias = self.ty(SigType::Alias(self.name("::self_loop")));
        let knot_alias = self.ty(SigType::Alias(self.name("::knot")));
        let optional_int = self.ty(SigType::Optional(integer));
        let either = self.ty(SigType::Union(vec![str_alias, chain_alias]));
        let looping = self.ty(SigType::Union(vec![integer, loop_alias]));
        let flag = self.ty(SigType::Union(vec![integer, false_literal]));
        let knot = self.ty(SigType::Intersection(vec![integer, knot_alias]));
        for (path, body) in [
            ("::int_or_nil", optional_int),
            ("::str", string),
            ("::chain", str_alias),
            ("::either", either),
            ("::loop", looping),
            ("::self_loop", self_loop_alias),
            ("::flag", flag),
            ("::knot", knot),
        ] {
            let name = self.name(path);
            self.env.declare_alias(name, body);
        }

        self.env
    }
}
