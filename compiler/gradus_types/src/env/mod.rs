//! Declaration environment.
//!
//! [`DeclarationEnv`] is what the type algebra asks about declarations:
//! member lists, alias bodies and name resolution. Building definitions
//! (linearising ancestors, mixins) is the environment's business.
//! [`Environment`] is a plain in-memory implementation.

use gradus_ir::{
    ClassKind, Definition, MemberKind, MethodDef, MethodOrigin, MethodOverload, MethodSig, Name,
    Namespace, SigArena, SigType, SigTypeId, StringInterner, TypeName, Visibility,
};
use rustc_hash::FxHashMap;

/// Lookup failure reported by an environment.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum EnvError {
    #[error("unknown type name: {name:?}")]
    UnknownType { name: TypeName },
    #[error("unknown alias: {name:?}")]
    UnknownAlias { name: TypeName },
}

impl EnvError {
    pub fn message(&self, interner: &StringInterner) -> String {
        match self {
            EnvError::UnknownType { name } => {
                format!("unknown type name: {}", name.display(interner))
            }
            EnvError::UnknownAlias { name } => {
                format!("unknown alias: {}", name.display(interner))
            }
        }
    }
}

/// Read access to declarations.
///
/// Definitions returned here are complete: inherited and mixed-in members
/// are already present, each overload carrying the origin it was declared in.
pub trait DeclarationEnv {
    /// The arena every [`SigTypeId`] handed out by this environment lives in.
    fn arena(&self) -> &SigArena;

    /// Instance members of a class or module.
    fn instance_definition(&self, name: &TypeName) -> Result<&Definition, EnvError>;

    /// Singleton members of a class or module. `type_params` are the class's
    /// own parameters.
    fn singleton_definition(&self, name: &TypeName) -> Result<&Definition, EnvError>;

    /// Members of an interface.
    fn interface_definition(&self, name: &TypeName) -> Result<&Definition, EnvError>;

    /// The body of an alias, one level deep.
    fn expand_alias(&self, name: &TypeName) -> Result<SigTypeId, EnvError>;

    /// Resolve a name written inside `context` to an absolute name.
    fn resolve_name(&self, name: &TypeName, context: &Namespace) -> Option<TypeName>;

    /// Whether `name` is a class or a module, if it is either.
    fn class_kind(&self, name: &TypeName) -> Option<ClassKind>;
}

struct ClassEntry {
    kind: ClassKind,
    instance: Definition,
    singleton: Definition,
}

/// In-memory declaration environment.
///
/// Names are stored as given, so declare them absolute. There is no ancestor
/// computation: [`Environment::inherit_methods`] copies members explicitly.
#[derive(Default)]
pub struct Environment {
    arena: SigArena,
    classes: FxHashMap<TypeName, ClassEntry>,
    interfaces: FxHashMap<TypeName, Definition>,
    aliases: FxHashMap<TypeName, SigTypeId>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    pub fn arena_mut(&mut self) -> &mut SigArena {
        &mut self.arena
    }

    /// Allocate a declaration node.
    pub fn alloc(&mut self, ty: SigType) -> SigTypeId {
        self.arena.alloc(ty)
    }

    pub fn declare_class(&mut self, name: TypeName, kind: ClassKind, type_params: Vec<Name>) {
        let entry = ClassEntry {
            kind,
            instance: Definition {
                type_params: type_params.clone(),
                methods: Vec::new(),
            },
            singleton: Definition {
                type_params,
                methods: Vec::new(),
            },
        };
        self.classes.insert(name, entry);
    }

    pub fn declare_interface(&mut self, name: TypeName, type_params: Vec<Name>) {
        self.interfaces.insert(
            name,
            Definition {
                type_params,
                methods: Vec::new(),
            },
        );
    }

    pub fn declare_alias(&mut self, name: TypeName, body: SigTypeId) {
        self.aliases.insert(name, body);
    }

    /// Define a method on a class, module or interface, replacing any member
    /// of the same name. Interfaces only have instance members.
    pub fn define_method(
        &mut self,
        owner: &TypeName,
        kind: MemberKind,
        name: Name,
        visibility: Visibility,
        sigs: Vec<MethodSig>,
    ) -> Result<(), EnvError> {
        let origin = MethodOrigin {
            defined_in: owner.clone(),
            kind,
        };
        let method = MethodDef {
            name,
            visibility,
            overloads: sigs
                .into_iter()
                .map(|sig| MethodOverload {
                    sig,
                    origin: origin.clone(),
                })
                .collect(),
        };
        let definition = self.definition_mut(owner, kind)?;
        match definition.methods.iter_mut().find(|m| m.name == name) {
            Some(existing) => *existing = method,
            None => definition.methods.push(method),
        }
        Ok(())
    }

    /// Copy members of `from` that `into` does not define itself, keeping
    /// their origin. Call after defining `into`'s own members.
    pub fn inherit_methods(
        &mut self,
        from: &TypeName,
        into: &TypeName,
        kind: MemberKind,
    ) -> Result<(), EnvError> {
        let inherited = self.definition_mut(from, kind)?.methods.clone();
        let definition = self.definition_mut(into, kind)?;
        for method in inherited {
            if definition.method(method.name).is_none() {
                definition.methods.push(method);
            }
        }
        Ok(())
    }

    fn definition_mut(
        &mut self,
        owner: &TypeName,
        kind: MemberKind,
    ) -> Result<&mut Definition, EnvError> {
        if let Some(entry) = self.classes.get_mut(owner) {
            return Ok(match kind {
                MemberKind::Instance => &mut entry.instance,
                MemberKind::Singleton => &mut entry.singleton,
            });
        }
        match (self.interfaces.get_mut(owner), kind) {
            (Some(definition), MemberKind::Instance) => Ok(definition),
            _ => Err(EnvError::UnknownType {
                name: owner.clone(),
            }),
        }
    }

    fn is_known(&self, name: &TypeName) -> bool {
        self.classes.contains_key(name)
            || self.interfaces.contains_key(name)
            || self.aliases.contains_key(name)
    }

    fn class(&self, name: &TypeName) -> Result<&ClassEntry, EnvError> {
        self.classes.get(name).ok_or_else(|| EnvError::UnknownType {
            name: name.clone(),
        })
    }
}

impl DeclarationEnv for Environment {
    fn arena(&self) -> &SigArena {
        &self.arena
    }

    fn instance_definition(&self, name: &TypeName) -> Result<&Definition, EnvError> {
        Ok(&self.class(name)?.instance)
    }

    fn singleton_definition(&self, name: &TypeName) -> Result<&Definition, EnvError> {
        Ok(&self.class(name)?.singleton)
    }

    fn interface_definition(&self, name: &TypeName) -> Result<&Definition, EnvError> {
        self.interfaces
            .get(name)
            .ok_or_else(|| EnvError::UnknownType { name: name.clone() })
    }

    fn expand_alias(&self, name: &TypeName) -> Result<SigTypeId, EnvError> {
        self.aliases
            .get(name)
            .copied()
            .ok_or_else(|| EnvError::UnknownAlias { name: name.clone() })
    }

    /// Try `context` and each enclosing namespace in turn, innermost first.
    fn resolve_name(&self, name: &TypeName, context: &Namespace) -> Option<TypeName> {
        if name.is_absolute() {
            return self.is_known(name).then(|| name.clone());
        }
        context
            .to_absolute()
            .ascend()
            .into_iter()
            .map(|namespace| name.with_prefix(&namespace))
            .find(|candidate| self.is_known(candidate))
    }

    fn class_kind(&self, name: &TypeName) -> Option<ClassKind> {
        self.classes.get(name).map(|entry| entry.kind)
    }
}
