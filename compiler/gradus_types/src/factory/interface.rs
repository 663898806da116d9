//! Interface computation.
//!
//! The interface of a type maps method names to the overloads callable on
//! it. Named types read their members from the environment; structural types
//! borrow the interface of the class behind them and refine it:
//!
//! | type                | based on                  | refinement                        |
//! |---------------------|---------------------------|-----------------------------------|
//! | literal             | owner class instance      |                                   |
//! | `nil`, `bool`       | `NilClass`, `TrueClass \| FalseClass` |                       |
//! | tuple               | `Array[union of members]` | per-index `[]`, `[]=`, `first`, `last` |
//! | record              | `Hash[keys, values]`      | per-key `[]`, `[]=`               |
//! | proc                | `Proc`                    | exact `[]`, `call`                |
//! | union               | every member              | common methods, joined overloads  |
//! | intersection        | every member              | all methods, later member wins    |

use gradus_ir::{Definition, Literal, Name};
use gradus_stack::ensure_sufficient_stack;

use super::Factory;
use crate::env::DeclarationEnv;
use crate::error::{AliasError, Error, InterfaceError};
use crate::interface::{Entry, Interface};
use crate::method_type::MethodType;
use crate::params::Params;
use crate::subst::Substitution;
use crate::ty::{ProcType, Type};

impl<E: DeclarationEnv + ?Sized> Factory<'_, E> {
    /// The interface of `ty` with calls recorded against `ty` itself.
    pub fn interface(&mut self, ty: &Type, include_private: bool) -> Result<Interface, Error> {
        self.compute(ty, include_private, ty)
    }

    /// The interface of `ty`, with `self` in member signatures bound to
    /// `self_type`.
    ///
    /// Private members are skipped unless `include_private` is set.
    #[tracing::instrument(level = "debug", skip_all, fields(
        ty = %ty.display(self.interner),
        include_private = include_private,
    ))]
    pub fn compute(
        &mut self,
        ty: &Type,
        include_private: bool,
        self_type: &Type,
    ) -> Result<Interface, Error> {
        ensure_sufficient_stack(|| {
            if !ty.is_alias() {
                return self.compute_expanded(ty, include_private, self_type);
            }
            // An alias reached again through a member of its own expansion.
            if self.receiver_aliases.contains(ty) {
                return Err(Error::from(AliasError::Recursive { alias: ty.clone() }));
            }
            let expanded = self.expand_deep(ty)?;
            self.receiver_aliases.push(ty.clone());
            let result = self.compute_expanded(&expanded, include_private, self_type);
            self.receiver_aliases.pop();
            result
        })
    }

    fn compute_expanded(
        &mut self,
        ty: &Type,
        include_private: bool,
        self_type: &Type,
    ) -> Result<Interface, Error> {
        match ty {
            Type::SelfRef => {
                if *self_type == Type::SelfRef {
                    return Err(InterfaceError::SelfWithoutReceiver.into());
                }
                self.compute(self_type, include_private, &Type::SelfRef)
            }
            Type::Instance { name, args } => {
                let env = self.env;
                let definition = env.instance_definition(name)?;
                let subst = Substitution::build(&definition.type_params, args.clone())?
                    .with_instance_type(Type::instance(name.clone(), vec![Type::Any; args.len()]))
                    .with_module_type(Type::Singleton(name.clone()))
                    .with_self_type(self_type.clone());
                Ok(self.collect_members(definition, &subst, include_private, self_type))
            }
            Type::Interface { name, args } => {
                let env = self.env;
                let definition = env.interface_definition(name)?;
                let subst = Substitution::build(&definition.type_params, args.clone())?
                    .with_self_type(self_type.clone());
                Ok(self.collect_members(definition, &subst, include_private, self_type))
            }
            Type::Singleton(name) => {
                let env = self.env;
                let definition = env.singleton_definition(name)?;
                let subst = Substitution::empty()
                    .with_instance_type(Type::instance(
                        name.clone(),
                        vec![Type::Any; definition.type_params.len()],
                    ))
                    .with_module_type(ty.clone())
                    .with_self_type(self_type.clone());
                Ok(self.collect_members(definition, &subst, include_private, self_type))
            }
            Type::Literal(literal) => {
                let owner = Type::simple_instance(self.builtins.literal_owner(literal).clone());
                self.compute(&owner, include_private, self_type)
            }
            Type::Nil => {
                let nil_class = Type::simple_instance(self.builtins.nil_class.clone());
                self.compute(&nil_class, include_private, self_type)
            }
            Type::Boolean | Type::Logic(_) => {
                let receiver = self.builtins.bool_receiver();
                self.compute(&receiver, include_private, self_type)
            }
            Type::Union(members) => self.union_interface(members, include_private, self_type),
            Type::Intersection(members) => {
                self.intersection_interface(members, include_private, self_type)
            }
            Type::Tuple(members) => self.tuple_interface(members, include_private, self_type),
            Type::Record(fields) => self.record_interface(fields, include_private, self_type),
            Type::Proc(proc) => self.proc_interface(proc, include_private, self_type),
            Type::Any
            | Type::ClassLiteral
            | Type::InstanceSelf
            | Type::Top
            | Type::Bottom
            | Type::Void
            | Type::Var(_)
            | Type::Alias { .. } => Err(InterfaceError::InvalidReceiver { ty: ty.clone() }.into()),
        }
    }

    /// Build every visible member of a definition.
    fn collect_members(
        &mut self,
        definition: &Definition,
        subst: &Substitution,
        include_private: bool,
        self_type: &Type,
    ) -> Interface {
        let mut interface = Interface::new(self_type.clone(), include_private);
        for method in &definition.methods {
            if method.is_private() && !include_private {
                continue;
            }
            let method_types = method
                .overloads
                .iter()
                .map(|overload| {
                    let method_type = self.method_type(
                        &overload.sig,
                        self_type,
                        Some(subst),
                        Some(overload.origin.clone()),
                    );
                    self.setup_primitives(method.name, method_type)
                })
                .collect();
            interface.methods.insert(method.name, Entry::new(method_types));
        }
        interface
    }

    fn member_interfaces(
        &mut self,
        members: &[Type],
        include_private: bool,
        self_type: &Type,
    ) -> Result<Vec<Interface>, Error> {
        members
            .iter()
            .map(|member| self.compute(member, include_private, self_type))
            .collect()
    }

    fn union_interface(
        &mut self,
        members: &[Type],
        include_private: bool,
        self_type: &Type,
    ) -> Result<Interface, Error> {
        let interfaces = self.member_interfaces(members, include_private, self_type)?;
        let joined = interfaces
            .into_iter()
            .reduce(|left, right| self.join_interfaces(left, &right, include_private, self_type));
        Ok(joined.unwrap_or_else(|| Interface::new(self_type.clone(), include_private)))
    }

    /// Keep the methods both sides have. Differing overload lists are
    /// replaced by the pairwise joins that exist; a method with none is
    /// dropped.
    fn join_interfaces(
        &self,
        left: Interface,
        right: &Interface,
        include_private: bool,
        self_type: &Type,
    ) -> Interface {
        let mut joined = Interface::new(self_type.clone(), include_private);
        for (name, left_entry) in left.methods {
            let Some(right_entry) = right.methods.get(&name) else {
                continue;
            };
            if left_entry.method_types == right_entry.method_types {
                joined.methods.insert(name, left_entry);
                continue;
            }
            let mut method_types: Vec<MethodType> = Vec::new();
            for l in &left_entry.method_types {
                for r in &right_entry.method_types {
                    if let Some(method_type) = self.join.join(l, r) {
                        if !method_types.contains(&method_type) {
                            method_types.push(method_type);
                        }
                    }
                }
            }
            if method_types.is_empty() {
                tracing::debug!(
                    method = self.interner.lookup(name),
                    "no joined overload across union members"
                );
                continue;
            }
            joined.methods.insert(name, Entry::new(method_types));
        }
        joined
    }

    fn intersection_interface(
        &mut self,
        members: &[Type],
        include_private: bool,
        self_type: &Type,
    ) -> Result<Interface, Error> {
        let interfaces = self.member_interfaces(members, include_private, self_type)?;
        let mut merged = Interface::new(self_type.clone(), include_private);
        for interface in interfaces {
            merged.methods.extend(interface.methods);
        }
        Ok(merged)
    }

    fn tuple_interface(
        &mut self,
        members: &[Type],
        include_private: bool,
        self_type: &Type,
    ) -> Result<Interface, Error> {
        let array = self
            .builtins
            .array_instance(Type::union(members.iter().cloned()));
        let mut interface = self.compute(&array, include_private, self_type)?;

        let aref = members
            .iter()
            .zip(0_i64..)
            .map(|(member, i)| {
                MethodType::simple(Params::positional(vec![index_literal(i)]), member.clone())
            })
            .collect();
        let aset = members
            .iter()
            .zip(0_i64..)
            .map(|(member, i)| {
                MethodType::simple(
                    Params::positional(vec![index_literal(i), member.clone()]),
                    member.clone(),
                )
            })
            .collect();
        prepend(&mut interface, self.builtins.aref, aref);
        prepend(&mut interface, self.builtins.aset, aset);

        let first = members.first().cloned().unwrap_or(Type::Nil);
        let last = members.last().cloned().unwrap_or(Type::Nil);
        interface.methods.insert(
            self.builtins.first,
            Entry::new(vec![MethodType::simple(Params::empty(), first)]),
        );
        interface.methods.insert(
            self.builtins.last,
            Entry::new(vec![MethodType::simple(Params::empty(), last)]),
        );
        Ok(interface)
    }

    fn record_interface(
        &mut self,
        fields: &[(Literal, Type)],
        include_private: bool,
        self_type: &Type,
    ) -> Result<Interface, Error> {
        let key = Type::union(fields.iter().map(|(key, _)| Type::Literal(*key)));
        let value = Type::union(fields.iter().map(|(_, value)| value.clone()));
        let hash = self.builtins.hash_instance(key, value);
        let mut interface = self.compute(&hash, include_private, self_type)?;

        let aref = fields
            .iter()
            .map(|(key, value)| {
                MethodType::simple(Params::positional(vec![Type::Literal(*key)]), value.clone())
            })
            .collect();
        let aset = fields
            .iter()
            .map(|(key, value)| {
                MethodType::simple(
                    Params::positional(vec![Type::Literal(*key), value.clone()]),
                    value.clone(),
                )
            })
            .collect();
        prepend(&mut interface, self.builtins.aref, aref);
        prepend(&mut interface, self.builtins.aset, aset);
        Ok(interface)
    }

    fn proc_interface(
        &mut self,
        proc: &ProcType,
        include_private: bool,
        self_type: &Type,
    ) -> Result<Interface, Error> {
        let receiver = Type::simple_instance(self.builtins.proc.clone());
        let mut interface = self.compute(&receiver, include_private, self_type)?;
        let exact = MethodType::simple(proc.params.clone(), proc.return_type.clone());
        interface
            .methods
            .insert(self.builtins.aref, Entry::new(vec![exact.clone()]));
        interface
            .methods
            .insert(self.builtins.call, Entry::new(vec![exact]));
        Ok(interface)
    }
}

/// Put `precise` in front of the existing overloads of `name`.
fn prepend(interface: &mut Interface, name: Name, mut precise: Vec<MethodType>) {
    let entry = interface.methods.entry(name).or_default();
    precise.append(&mut entry.method_types);
    entry.method_types = precise;
}

/// The literal type of a tuple index.
fn index_literal(index: i64) -> Type {
    Type::Literal(Literal::Integer(index))
}
