//! The type factory.
//!
//! [`Factory`] ties the pieces together over one [`DeclarationEnv`]:
//! - translation with a per-factory memo
//! - alias expansion (`alias.rs`)
//! - method types with generic renaming (`method.rs`)
//! - interface computation (`interface.rs`) and the builtin predicate hook
//!   (`predicate.rs`)
//!
//! A factory owns its caches and is meant for one checking session. Use
//! separate factories for work on separate threads.

mod alias;
mod interface;
mod method;
mod predicate;

use gradus_ir::{ClassKind, Namespace, SigArena, SigFunction, SigTypeId, StringInterner, TypeName};
use rustc_hash::FxHashMap;

use crate::builtins::Builtins;
use crate::env::DeclarationEnv;
use crate::error::{AliasError, Error, FactoryError};
use crate::join::{SignatureJoin, StructuralJoin};
use crate::params::Params;
use crate::translate::{TranslateError, Translator};
use crate::ty::Type;

/// Type operations over a declaration environment.
pub struct Factory<'a, E: DeclarationEnv + ?Sized> {
    env: &'a E,
    interner: &'a StringInterner,
    builtins: Builtins,
    join: Box<dyn SignatureJoin + 'a>,
    translator: Translator,
    /// One-level alias expansions, by alias name.
    alias_cache: FxHashMap<TypeName, Type>,
    /// Alias receivers whose interface is being computed.
    receiver_aliases: Vec<Type>,
}

impl<'a, E: DeclarationEnv + ?Sized> Factory<'a, E> {
    /// A factory with the default builtin names and [`StructuralJoin`].
    pub fn new(env: &'a E, interner: &'a StringInterner) -> Self {
        Factory {
            env,
            interner,
            builtins: Builtins::new(interner),
            join: Box::new(StructuralJoin),
            translator: Translator::new(),
            alias_cache: FxHashMap::default(),
            receiver_aliases: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_builtins(mut self, builtins: Builtins) -> Self {
        self.builtins = builtins;
        self
    }

    /// Use `join` when merging overloads across union members.
    #[must_use]
    pub fn with_join(mut self, join: impl SignatureJoin + 'a) -> Self {
        self.join = Box::new(join);
        self
    }

    pub fn env(&self) -> &'a E {
        self.env
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub fn builtins(&self) -> &Builtins {
        &self.builtins
    }

    // ===== Translation =====

    /// Translate a node of the environment's arena.
    pub fn to_internal(&mut self, id: SigTypeId) -> Type {
        let env = self.env;
        self.translator.to_internal(env.arena(), id)
    }

    /// Translate an analysis type into new nodes of `arena`.
    pub fn to_declaration(
        &self,
        ty: &Type,
        arena: &mut SigArena,
    ) -> Result<SigTypeId, TranslateError> {
        tracing::trace!(ty = %ty.display(self.interner), "to_declaration");
        Translator::to_declaration(ty, arena)
    }

    /// Parameters of a function declared in the environment's arena.
    pub fn params(&mut self, function: &SigFunction) -> Params {
        let env = self.env;
        self.translator.params(env.arena(), function)
    }

    // ===== Unions and optionals =====

    /// Split a type into its truthy part and its falsy part (`nil` and
    /// `false`). Aliases are expanded first. Only unions are split; any other
    /// type is returned whole with no falsy part.
    pub fn unwrap_optional(&mut self, ty: &Type) -> Result<(Type, Option<Type>), Error> {
        let mut seen: Vec<Type> = Vec::new();
        let mut current = ty.clone();
        while current.is_alias() {
            if seen.contains(&current) {
                return Err(AliasError::Recursive { alias: current }.into());
            }
            let expanded = self.expand_one(&current)?;
            seen.push(current);
            current = expanded;
        }
        Ok(match current {
            Type::Union(members) => {
                let (falsy, truthy): (Vec<Type>, Vec<Type>) =
                    members.into_iter().partition(Type::is_falsy_constant);
                let falsy = (!falsy.is_empty()).then(|| Type::union(falsy));
                (Type::union(truthy), falsy)
            }
            other => (other, None),
        })
    }

    // ===== Names =====

    /// Make every type name in `ty` absolute.
    ///
    /// Names are resolved against `namespace` and its enclosing namespaces;
    /// a name that resolves nowhere is made absolute as written.
    pub fn resolve_to_absolute(&self, ty: &Type, namespace: &Namespace) -> Result<Type, Error> {
        let mut scratch = SigArena::new();
        let id = Translator::to_declaration(ty, &mut scratch)?;
        let env = self.env;
        let resolved = scratch.map_type_names(id, &mut |name: &TypeName| {
            env.resolve_name(name, namespace)
                .unwrap_or_else(|| name.to_absolute())
        });
        Ok(Translator::to_internal_uncached(&scratch, resolved))
    }

    /// Resolve `name` as written inside `namespace`.
    pub fn absolute_type_name(&self, name: &TypeName, namespace: &Namespace) -> Option<TypeName> {
        self.env.resolve_name(name, namespace)
    }

    pub fn is_module_name(&self, name: &TypeName) -> bool {
        self.env.class_kind(name) == Some(ClassKind::Module)
    }

    pub fn is_class_name(&self, name: &TypeName) -> bool {
        self.env.class_kind(name) == Some(ClassKind::Class)
    }

    /// The instance type of a class or module.
    ///
    /// Without `args`, every type parameter is `untyped`.
    pub fn instance_type(&self, name: &TypeName, args: Option<Vec<Type>>) -> Result<Type, Error> {
        if self.env.class_kind(name).is_none() {
            return Err(FactoryError::NotAClass { name: name.clone() }.into());
        }
        let expected = self.env.singleton_definition(name)?.type_params.len();
        let args = match args {
            Some(args) if args.len() != expected => {
                return Err(FactoryError::ArgumentCountMismatch {
                    name: name.clone(),
                    expected,
                    found: args.len(),
                }
                .into());
            }
            Some(args) => args,
            None => vec![Type::Any; expected],
        };
        Ok(Type::instance(name.clone(), args))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
