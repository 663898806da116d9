//! Member definitions handed out by a declaration environment.

use crate::{Name, TypeName};

use super::MethodSig;

/// Declared visibility of a member.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// Whether a member is defined on instances or on the singleton.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum MemberKind {
    Instance,
    Singleton,
}

/// Class or module, for names that denote one.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassKind {
    Class,
    Module,
}

/// Where an overload was declared.
///
/// Used for diagnostics and for recognising builtin predicates; it carries
/// no weight in type algebra.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodOrigin {
    /// The class, module or interface whose declaration holds the overload.
    pub defined_in: TypeName,
    pub kind: MemberKind,
}

/// One overload together with its provenance.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodOverload {
    pub sig: MethodSig,
    pub origin: MethodOrigin,
}

/// A method with all of its overloads.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodDef {
    pub name: Name,
    pub visibility: Visibility,
    pub overloads: Vec<MethodOverload>,
}

impl MethodDef {
    #[inline]
    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }
}

/// The member list of a class instance, singleton or interface.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Definition {
    /// Declared type parameters of the class or interface.
    pub type_params: Vec<Name>,
    pub methods: Vec<MethodDef>,
}

impl Definition {
    /// Find a method by name.
    pub fn method(&self, name: Name) -> Option<&MethodDef> {
        self.methods.iter().find(|m| m.name == name)
    }
}
