//! Well-known class and method names.
//!
//! The interface calculator needs to know a handful of builtin classes (the
//! owners of literals, the sequence and mapping classes behind tuples and
//! records) and the predicate methods it refines. Embedders with a different
//! core library can override any field after [`Builtins::new`].

use gradus_ir::{Literal, Name, StringInterner, TypeName};

use crate::ty::Type;

/// Builtin names used by the interface calculator.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Builtins {
    // ===== Classes (absolute names) =====
    pub object: TypeName,
    pub basic_object: TypeName,
    pub module: TypeName,
    pub nil_class: TypeName,
    pub true_class: TypeName,
    pub false_class: TypeName,
    pub integer: TypeName,
    pub string: TypeName,
    pub symbol: TypeName,
    /// Sequence class behind tuples: `Array[Elem]`.
    pub array: TypeName,
    /// Mapping class behind records: `Hash[K, V]`.
    pub hash: TypeName,
    /// Class behind proc types.
    pub proc: TypeName,

    // ===== Methods =====
    /// `[]`
    pub aref: Name,
    /// `[]=`
    pub aset: Name,
    pub first: Name,
    pub last: Name,
    pub call: Name,
    pub is_a: Name,
    pub kind_of: Name,
    pub instance_of: Name,
    /// `nil?`
    pub nil_p: Name,
    /// `!`
    pub not: Name,
    /// `===`
    pub case_eq: Name,
}

impl Builtins {
    pub fn new(interner: &StringInterner) -> Self {
        let class = |name: &str| TypeName::top_level(interner.intern(name));
        Builtins {
            object: class("Object"),
            basic_object: class("BasicObject"),
            module: class("Module"),
            nil_class: class("NilClass"),
            true_class: class("TrueClass"),
            false_class: class("FalseClass"),
            integer: class("Integer"),
            string: class("String"),
            symbol: class("Symbol"),
            array: class("Array"),
            hash: class("Hash"),
            proc: class("Proc"),
            aref: interner.intern("[]"),
            aset: interner.intern("[]="),
            first: interner.intern("first"),
            last: interner.intern("last"),
            call: interner.intern("call"),
            is_a: interner.intern("is_a?"),
            kind_of: interner.intern("kind_of?"),
            instance_of: interner.intern("instance_of?"),
            nil_p: interner.intern("nil?"),
            not: interner.intern("!"),
            case_eq: interner.intern("==="),
        }
    }

    /// The class whose instances a literal denotes.
    pub fn literal_owner(&self, literal: &Literal) -> &TypeName {
        match literal {
            Literal::Integer(_) => &self.integer,
            Literal::String(_) => &self.string,
            Literal::Symbol(_) => &self.symbol,
            Literal::Bool(true) => &self.true_class,
            Literal::Bool(false) => &self.false_class,
        }
    }

    /// `Array[element]`
    pub fn array_instance(&self, element: Type) -> Type {
        Type::instance(self.array.clone(), vec![element])
    }

    /// `Hash[key, value]`
    pub fn hash_instance(&self, key: Type, value: Type) -> Type {
        Type::instance(self.hash.clone(), vec![key, value])
    }

    /// `TrueClass | FalseClass`, the receiver behind `bool`.
    pub fn bool_receiver(&self) -> Type {
        Type::union([
            Type::simple_instance(self.true_class.clone()),
            Type::simple_instance(self.false_class.clone()),
        ])
    }
}
