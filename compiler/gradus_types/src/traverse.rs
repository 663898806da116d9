//! Type traversal traits.
//!
//! - [`TypeFolder`] rebuilds a type bottom-up. Unions and intersections are
//!   rebuilt through their smart constructors, so a fold that makes two
//!   members equal, or introduces `untyped`, collapses them.
//! - [`TypeVisitor`] walks a type without modifying it.
//!
//! Override the hooks for the variants you care about; the defaults recurse.

use gradus_ir::{Literal, Name, TypeName};
use gradus_stack::ensure_sufficient_stack;

use crate::params::Params;
use crate::ty::{ProcType, Type};

/// Structural transformation of types.
///
/// # Example
/// ```ignore
/// struct Rename { from: Name, to: Name }
///
/// impl TypeFolder for Rename {
///     fn fold_var(&mut self, name: Name) -> Type {
///         Type::Var(if name == self.from { self.to } else { name })
///     }
/// }
/// ```
pub trait TypeFolder {
    /// Fold a type by dispatching to variant-specific methods.
    fn fold(&mut self, ty: &Type) -> Type {
        ensure_sufficient_stack(|| match ty {
            Type::Var(name) => self.fold_var(*name),
            Type::InstanceSelf => self.fold_instance_self(),
            Type::ClassLiteral => self.fold_class_literal(),
            Type::SelfRef => self.fold_self_ref(),
            Type::Instance { name, args } => self.fold_instance(name, args),
            Type::Interface { name, args } => self.fold_interface(name, args),
            Type::Alias { name, args } => self.fold_alias(name, args),
            Type::Union(members) => self.fold_union(members),
            Type::Intersection(members) => self.fold_intersection(members),
            Type::Tuple(members) => self.fold_tuple(members),
            Type::Record(fields) => self.fold_record(fields),
            Type::Proc(proc) => self.fold_proc(proc),
            // Leaf types - return as-is
            Type::Any
            | Type::Top
            | Type::Bottom
            | Type::Boolean
            | Type::Void
            | Type::Nil
            | Type::Singleton(_)
            | Type::Literal(_)
            | Type::Logic(_) => ty.clone(),
        })
    }

    /// Fold a type variable.
    fn fold_var(&mut self, name: Name) -> Type {
        Type::Var(name)
    }

    /// Fold `instance`.
    fn fold_instance_self(&mut self) -> Type {
        Type::InstanceSelf
    }

    /// Fold `class`.
    fn fold_class_literal(&mut self) -> Type {
        Type::ClassLiteral
    }

    /// Fold `self`.
    fn fold_self_ref(&mut self) -> Type {
        Type::SelfRef
    }

    fn fold_instance(&mut self, name: &TypeName, args: &[Type]) -> Type {
        Type::Instance {
            name: name.clone(),
            args: self.fold_all(args),
        }
    }

    fn fold_interface(&mut self, name: &TypeName, args: &[Type]) -> Type {
        Type::Interface {
            name: name.clone(),
            args: self.fold_all(args),
        }
    }

    fn fold_alias(&mut self, name: &TypeName, args: &[Type]) -> Type {
        Type::Alias {
            name: name.clone(),
            args: self.fold_all(args),
        }
    }

    fn fold_union(&mut self, members: &[Type]) -> Type {
        Type::union(self.fold_all(members))
    }

    fn fold_intersection(&mut self, members: &[Type]) -> Type {
        Type::intersection(self.fold_all(members))
    }

    fn fold_tuple(&mut self, members: &[Type]) -> Type {
        Type::Tuple(self.fold_all(members))
    }

    fn fold_record(&mut self, fields: &[(Literal, Type)]) -> Type {
        Type::Record(
            fields
                .iter()
                .map(|(key, value)| (*key, self.fold(value)))
                .collect(),
        )
    }

    fn fold_proc(&mut self, proc: &ProcType) -> Type {
        Type::Proc(Box::new(self.fold_proc_type(proc)))
    }

    /// Fold the parameters and return type of a callable.
    fn fold_proc_type(&mut self, proc: &ProcType) -> ProcType {
        ProcType {
            params: self.fold_params(&proc.params),
            return_type: self.fold(&proc.return_type),
        }
    }

    fn fold_params(&mut self, params: &Params) -> Params {
        params.map_types(|ty| self.fold(ty))
    }

    /// Fold each type of a list.
    fn fold_all(&mut self, types: &[Type]) -> Vec<Type> {
        types.iter().map(|ty| self.fold(ty)).collect()
    }
}

/// Read-only traversal of types.
pub trait TypeVisitor {
    /// Visit a type by dispatching to variant-specific methods.
    fn visit(&mut self, ty: &Type) {
        ensure_sufficient_stack(|| match ty {
            Type::Var(name) => self.visit_var(*name),
            Type::Singleton(name) => self.visit_type_name(name),
            Type::Instance { name, args }
            | Type::Interface { name, args }
            | Type::Alias { name, args } => {
                self.visit_type_name(name);
                for arg in args {
                    self.visit(arg);
                }
            }
            Type::Union(members) | Type::Intersection(members) | Type::Tuple(members) => {
                for member in members {
                    self.visit(member);
                }
            }
            Type::Record(fields) => {
                for (_, value) in fields {
                    self.visit(value);
                }
            }
            Type::Proc(proc) => {
                self.visit_params(&proc.params);
                self.visit(&proc.return_type);
            }
            // Leaf types - no-op by default
            Type::Any
            | Type::ClassLiteral
            | Type::InstanceSelf
            | Type::SelfRef
            | Type::Top
            | Type::Bottom
            | Type::Boolean
            | Type::Void
            | Type::Nil
            | Type::Literal(_)
            | Type::Logic(_) => {}
        });
    }

    /// Visit a type variable.
    fn visit_var(&mut self, _name: Name) {}

    /// Visit the name of a singleton, instance, interface or alias type.
    fn visit_type_name(&mut self, _name: &TypeName) {}

    fn visit_params(&mut self, params: &Params) {
        for ty in params.types() {
            self.visit(ty);
        }
    }
}
