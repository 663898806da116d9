//! Analysis-model types.
//!
//! [`Type`] is the representation used while computing interfaces and
//! checking programs. It is an owned tree: every node owns its children, and
//! two types are equal exactly when they are structurally equal.
//!
//! Unions and intersections must be built with [`Type::union`] and
//! [`Type::intersection`], which keep them flat and free of duplicates.

mod construct;
mod format;

pub use gradus_ir::FlowMarker;
use gradus_ir::{Literal, Name, TypeName};
use rustc_hash::FxHashSet;

use crate::params::Params;
use crate::traverse::TypeVisitor;

/// A type in the analysis model.
///
/// Has Clone, Eq, Hash so computed types can be cached and compared by value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    // ===== Base types =====
    /// `untyped`: the gradual escape hatch.
    Any,
    /// `class`: the singleton of the enclosing class.
    ClassLiteral,
    /// `instance`: an instance of the enclosing class.
    InstanceSelf,
    /// `self`: the receiver of the enclosing declaration.
    SelfRef,
    Top,
    Bottom,
    Boolean,
    Void,
    Nil,

    /// Generic type variable.
    Var(Name),

    // ===== Named types =====
    /// `singleton(Foo)`
    Singleton(TypeName),
    /// `Foo[A, B]`
    Instance { name: TypeName, args: Vec<Type> },
    /// `_Foo[A]`
    Interface { name: TypeName, args: Vec<Type> },
    /// A type alias. Aliases coming from declarations never carry arguments.
    Alias { name: TypeName, args: Vec<Type> },

    // ===== Compound types =====
    /// Flattened, duplicate-free union. Build with [`Type::union`].
    Union(Vec<Type>),
    /// Flattened, duplicate-free intersection. Build with [`Type::intersection`].
    Intersection(Vec<Type>),
    Literal(Literal),
    Tuple(Vec<Type>),
    /// Record fields in declaration order.
    Record(Vec<(Literal, Type)>),
    Proc(Box<ProcType>),

    /// Boolean result of a builtin predicate, carrying what it tells flow
    /// analysis about the receiver or argument.
    Logic(FlowMarker),
}

/// A callable shape: parameters and return type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcType {
    pub params: Params,
    pub return_type: Type,
}

impl Type {
    /// `Foo[args]`
    pub fn instance(name: TypeName, args: Vec<Type>) -> Self {
        Type::Instance { name, args }
    }

    /// `Foo` with no type arguments.
    pub fn simple_instance(name: TypeName) -> Self {
        Type::Instance {
            name,
            args: Vec::new(),
        }
    }

    /// `_Foo[args]`
    pub fn interface(name: TypeName, args: Vec<Type>) -> Self {
        Type::Interface { name, args }
    }

    /// A reference to an alias.
    pub fn alias(name: TypeName) -> Self {
        Type::Alias {
            name,
            args: Vec::new(),
        }
    }

    /// `^(params) -> return_type`
    pub fn proc(params: Params, return_type: Type) -> Self {
        Type::Proc(Box::new(ProcType {
            params,
            return_type,
        }))
    }

    /// `T?`, i.e. `T | nil`.
    pub fn optional(ty: Type) -> Self {
        Type::union([ty, Type::Nil])
    }

    pub fn is_union(&self) -> bool {
        matches!(self, Type::Union(_))
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, Type::Alias { .. })
    }

    /// `nil` or the literal `false`.
    pub fn is_falsy_constant(&self) -> bool {
        matches!(self, Type::Nil | Type::Literal(Literal::Bool(false)))
    }

    /// The non-union leaves of this type in first-seen order. Duplicates are
    /// kept.
    pub fn flatten_union(&self) -> Vec<Type> {
        let mut leaves = Vec::new();
        collect_union_leaves(self, &mut leaves);
        leaves
    }

    /// Names of the type variables occurring in this type.
    pub fn free_variables(&self) -> FxHashSet<Name> {
        let mut collector = FreeVariables::default();
        collector.visit(self);
        collector.vars
    }
}

fn collect_union_leaves(ty: &Type, leaves: &mut Vec<Type>) {
    match ty {
        Type::Union(members) => {
            for member in members {
                collect_union_leaves(member, leaves);
            }
        }
        other => leaves.push(other.clone()),
    }
}

#[derive(Default)]
struct FreeVariables {
    vars: FxHashSet<Name>,
}

impl TypeVisitor for FreeVariables {
    fn visit_var(&mut self, name: Name) {
        self.vars.insert(name);
    }
}
