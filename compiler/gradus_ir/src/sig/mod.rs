//! Declaration type model.
//!
//! Types as written in signature declarations, before translation into the
//! analysis model. Nodes live in a [`SigArena`] and refer to their children by
//! [`SigTypeId`], so every declaration node has a stable identity that caches
//! can key on without relying on pointer identity.
//!
//! # Identity
//!
//! A `SigTypeId` is only meaningful together with the arena that allocated
//! it. Each arena gets a process-unique [`ArenaId`], and `(ArenaId, SigTypeId)`
//! identifies a node across arenas. Arenas are append-only, so an id never
//! changes meaning once handed out.

mod definition;

pub use definition::{
    ClassKind, Definition, MemberKind, MethodDef, MethodOrigin, MethodOverload, Visibility,
};

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::{Literal, Name, TypeName};

static NEXT_ARENA_ID: AtomicU32 = AtomicU32::new(0);

/// Process-unique identity of a [`SigArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ArenaId(u32);

/// Index of a [`SigType`] in its arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct SigTypeId(u32);

impl SigTypeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for SigTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigTypeId({})", self.0)
    }
}

/// A declared type.
///
/// Mirrors the signature language one-for-one. Aliases never take arguments
/// in this model.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum SigType {
    // ===== Base types =====
    Any,
    /// `class`: the singleton of the enclosing class.
    Class,
    /// `instance`: an instance of the enclosing class.
    Instance,
    /// `self`: the receiver.
    SelfType,
    Top,
    Bottom,
    Bool,
    Void,
    Nil,

    // ===== Named types =====
    /// Generic type variable.
    Variable(Name),
    /// `singleton(Foo)`
    ClassSingleton(TypeName),
    /// `Foo[A, B]`
    ClassInstance {
        name: TypeName,
        args: Vec<SigTypeId>,
    },
    /// `_Foo[A]`
    Interface {
        name: TypeName,
        args: Vec<SigTypeId>,
    },
    /// `foo`
    Alias(TypeName),

    // ===== Compound types =====
    Union(Vec<SigTypeId>),
    Intersection(Vec<SigTypeId>),
    /// `T?`
    Optional(SigTypeId),
    Literal(Literal),
    /// `[A, B]`
    Tuple(Vec<SigTypeId>),
    /// `{ key: A, other: B }`, fields in declaration order.
    Record(Vec<(Literal, SigTypeId)>),
    /// `^(A) -> B`
    Proc(SigFunction),

    /// `bool` returned by a builtin predicate, with its flow marker.
    Logic(FlowMarker),
}

/// Flow-sensitive replacement for `bool` on builtin predicates.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowMarker {
    /// `recv.is_a?(C)`: true means the receiver is an instance of the argument.
    ReceiverIsArg,
    /// `recv.nil?`: true means the receiver is nil.
    ReceiverIsNil,
    /// `!recv`: negates the receiver's truthiness.
    Not,
    /// `C === arg`: true means the argument is an instance of the receiver.
    ArgIsReceiver,
}

/// A positional or keyword parameter. The name is documentation only.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct SigParam {
    pub name: Option<Name>,
    pub ty: SigTypeId,
}

impl SigParam {
    /// An unnamed parameter.
    pub fn anonymous(ty: SigTypeId) -> Self {
        SigParam { name: None, ty }
    }
}

/// A function shape: `(A, ?B, *C, D, k: E, ?l: F, **G) -> R`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct SigFunction {
    pub required_positionals: Vec<SigParam>,
    pub optional_positionals: Vec<SigParam>,
    pub rest_positionals: Option<SigParam>,
    pub trailing_positionals: Vec<SigParam>,
    pub required_keywords: Vec<(Name, SigParam)>,
    pub optional_keywords: Vec<(Name, SigParam)>,
    pub rest_keywords: Option<SigParam>,
    pub return_type: SigTypeId,
}

impl SigFunction {
    /// `() -> return_type`
    pub fn returning(return_type: SigTypeId) -> Self {
        SigFunction {
            required_positionals: Vec::new(),
            optional_positionals: Vec::new(),
            rest_positionals: None,
            trailing_positionals: Vec::new(),
            required_keywords: Vec::new(),
            optional_keywords: Vec::new(),
            rest_keywords: None,
            return_type,
        }
    }

    /// `(required...) -> return_type` with anonymous parameters.
    pub fn positional(required: &[SigTypeId], return_type: SigTypeId) -> Self {
        SigFunction {
            required_positionals: required.iter().copied().map(SigParam::anonymous).collect(),
            ..SigFunction::returning(return_type)
        }
    }
}

/// A block parameter of a method.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct SigBlock {
    pub function: SigFunction,
    pub required: bool,
}

/// One declared overload: `[T] (A) { (B) -> C } -> R`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodSig {
    pub type_params: Vec<Name>,
    pub function: SigFunction,
    pub block: Option<SigBlock>,
}

/// Append-only storage for declaration types.
#[derive(Debug)]
pub struct SigArena {
    id: ArenaId,
    types: Vec<SigType>,
}

impl SigArena {
    pub fn new() -> Self {
        SigArena {
            id: ArenaId(NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed)),
            types: Vec::new(),
        }
    }

    /// This arena's identity.
    #[inline]
    pub fn id(&self) -> ArenaId {
        self.id
    }

    /// Allocate a node and return its id.
    ///
    /// # Panics
    /// Panics if the arena holds more than `u32::MAX` nodes.
    pub fn alloc(&mut self, ty: SigType) -> SigTypeId {
        let index = u32::try_from(self.types.len())
            .unwrap_or_else(|_| panic!("signature arena exceeded u32::MAX types"));
        self.types.push(ty);
        SigTypeId(index)
    }

    /// Get the node for `id`.
    ///
    /// # Panics
    /// Panics if `id` was allocated by a different arena.
    #[inline]
    pub fn get(&self, id: SigTypeId) -> &SigType {
        &self.types[id.index()]
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Copy the tree rooted at `id`, replacing every type name with `f(name)`.
    ///
    /// The original nodes are left untouched; the copy is appended.
    pub fn map_type_names(
        &mut self,
        id: SigTypeId,
        f: &mut impl FnMut(&TypeName) -> TypeName,
    ) -> SigTypeId {
        let node = self.get(id).clone();
        let mapped = match node {
            SigType::ClassSingleton(name) => SigType::ClassSingleton(f(&name)),
            SigType::ClassInstance { name, args } => SigType::ClassInstance {
                name: f(&name),
                args: self.map_all(&args, f),
            },
            SigType::Interface { name, args } => SigType::Interface {
                name: f(&name),
                args: self.map_all(&args, f),
            },
            SigType::Alias(name) => SigType::Alias(f(&name)),
            SigType::Union(members) => SigType::Union(self.map_all(&members, f)),
            SigType::Intersection(members) => SigType::Intersection(self.map_all(&members, f)),
            SigType::Optional(inner) => SigType::Optional(self.map_type_names(inner, f)),
            SigType::Tuple(members) => SigType::Tuple(self.map_all(&members, f)),
            SigType::Record(fields) => SigType::Record(
                fields
                    .into_iter()
                    .map(|(key, ty)| (key, self.map_type_names(ty, f)))
                    .collect(),
            ),
            SigType::Proc(function) => SigType::Proc(self.map_function_names(&function, f)),
            SigType::Any
            | SigType::Class
            | SigType::Instance
            | SigType::SelfType
            | SigType::Top
            | SigType::Bottom
            | SigType::Bool
            | SigType::Void
            | SigType::Nil
            | SigType::Variable(_)
            | SigType::Literal(_)
            | SigType::Logic(_) => return id,
        };
        self.alloc(mapped)
    }

    /// [`map_type_names`](Self::map_type_names) over every type in a function.
    pub fn map_function_names(
        &mut self,
        function: &SigFunction,
        f: &mut impl FnMut(&TypeName) -> TypeName,
    ) -> SigFunction {
        let mut param = |arena: &mut Self, p: &SigParam| SigParam {
            name: p.name,
            ty: arena.map_type_names(p.ty, f),
        };
        SigFunction {
            required_positionals: function
                .required_positionals
                .iter()
                .map(|p| param(self, p))
                .collect(),
            optional_positionals: function
                .optional_positionals
                .iter()
                .map(|p| param(self, p))
                .collect(),
            rest_positionals: function.rest_positionals.as_ref().map(|p| param(self, p)),
            trailing_positionals: function
                .trailing_positionals
                .iter()
                .map(|p| param(self, p))
                .collect(),
            required_keywords: function
                .required_keywords
                .iter()
                .map(|(k, p)| (*k, param(self, p)))
                .collect(),
            optional_keywords: function
                .optional_keywords
                .iter()
                .map(|(k, p)| (*k, param(self, p)))
                .collect(),
            rest_keywords: function.rest_keywords.as_ref().map(|p| param(self, p)),
            return_type: self.map_type_names(function.return_type, f),
        }
    }

    fn map_all(
        &mut self,
        ids: &[SigTypeId],
        f: &mut impl FnMut(&TypeName) -> TypeName,
    ) -> Vec<SigTypeId> {
        ids.iter().map(|id| self.map_type_names(*id, f)).collect()
    }
}

impl Default for SigArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
