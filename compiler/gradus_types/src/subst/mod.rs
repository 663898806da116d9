//! Generic substitution.
//!
//! A [`Substitution`] maps type variables to types and optionally fills the
//! three contextual placeholders: `instance`, `class` and `self`. Applying it
//! rebuilds the type through the smart constructors, so binding a variable
//! inside a union to `untyped` widens the whole union to `untyped`.

use gradus_ir::{Name, StringInterner};
use rustc_hash::FxHashMap;

use crate::method_type::{Block, MethodType};
use crate::params::Params;
use crate::traverse::TypeFolder;
use crate::ty::Type;

/// Error building a substitution.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum SubstError {
    #[error("substitution arity mismatch: {vars} variables, {types} types")]
    ArityMismatch { vars: usize, types: usize },
}

/// Variable bindings plus the `instance`/`class`/`self` slots.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Substitution {
    pub dictionary: FxHashMap<Name, Type>,
    /// Replacement for `instance`.
    pub instance_type: Option<Type>,
    /// Replacement for `class`.
    pub module_type: Option<Type>,
    /// Replacement for `self`.
    pub self_type: Option<Type>,
}

impl Substitution {
    pub fn empty() -> Self {
        Substitution::default()
    }

    /// Bind `vars[i]` to `types[i]`.
    pub fn build(vars: &[Name], types: Vec<Type>) -> Result<Self, SubstError> {
        if vars.len() != types.len() {
            return Err(SubstError::ArityMismatch {
                vars: vars.len(),
                types: types.len(),
            });
        }
        Ok(Substitution {
            dictionary: vars.iter().copied().zip(types).collect(),
            ..Substitution::default()
        })
    }

    #[must_use]
    pub fn with_instance_type(mut self, ty: Type) -> Self {
        self.instance_type = Some(ty);
        self
    }

    #[must_use]
    pub fn with_module_type(mut self, ty: Type) -> Self {
        self.module_type = Some(ty);
        self
    }

    #[must_use]
    pub fn with_self_type(mut self, ty: Type) -> Self {
        self.self_type = Some(ty);
        self
    }

    /// Bind one variable, replacing any previous binding.
    pub fn add(&mut self, var: Name, ty: Type) {
        self.dictionary.insert(var, ty);
    }

    /// No bindings and no slots.
    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
            && self.instance_type.is_none()
            && self.module_type.is_none()
            && self.self_type.is_none()
    }

    /// Apply to a type. Unbound variables are left as they are.
    pub fn apply(&self, ty: &Type) -> Type {
        if self.is_empty() {
            return ty.clone();
        }
        Applier { subst: self }.fold(ty)
    }

    pub fn apply_params(&self, params: &Params) -> Params {
        if self.is_empty() {
            return params.clone();
        }
        Applier { subst: self }.fold_params(params)
    }

    /// Apply to an overload. The overload's own type parameters shadow any
    /// binding of the same name.
    pub fn apply_method_type(&self, method_type: &MethodType) -> MethodType {
        let subst = self.except(&method_type.type_params);
        MethodType {
            type_params: method_type.type_params.clone(),
            params: subst.apply_params(&method_type.params),
            block: method_type.block.as_ref().map(|block| Block {
                optional: block.optional,
                ty: Applier { subst: &subst }.fold_proc_type(&block.ty),
            }),
            return_type: subst.apply(&method_type.return_type),
            origin: method_type.origin.clone(),
        }
    }

    /// Add `other`'s bindings and slots to `self`.
    ///
    /// On a key present in both, `other` wins only when `overwrite` is set.
    /// Slots set in `other` replace ours only when `overwrite` is set; an
    /// empty slot is always filled.
    pub fn merge(&mut self, other: &Substitution, overwrite: bool) {
        for (var, ty) in &other.dictionary {
            if overwrite || !self.dictionary.contains_key(var) {
                self.dictionary.insert(*var, ty.clone());
            }
        }
        merge_slot(&mut self.instance_type, other.instance_type.as_ref(), overwrite);
        merge_slot(&mut self.module_type, other.module_type.as_ref(), overwrite);
        merge_slot(&mut self.self_type, other.self_type.as_ref(), overwrite);
    }

    /// A copy without bindings for `names`. Slots are kept.
    #[must_use]
    pub fn except(&self, names: &[Name]) -> Self {
        let mut copy = self.clone();
        for name in names {
            copy.dictionary.remove(name);
        }
        copy
    }

    /// Format as `{ a => String, instance => Integer }` for debugging.
    pub fn display(&self, interner: &StringInterner) -> String {
        let mut entries: Vec<String> = self
            .dictionary
            .iter()
            .map(|(var, ty)| format!("{} => {}", interner.lookup(*var), ty.display(interner)))
            .collect();
        entries.sort();
        let slots = [
            ("instance", &self.instance_type),
            ("class", &self.module_type),
            ("self", &self.self_type),
        ];
        for (label, slot) in slots {
            if let Some(ty) = slot {
                entries.push(format!("{label} => {}", ty.display(interner)));
            }
        }
        format!("{{ {} }}", entries.join(", "))
    }
}

fn merge_slot(slot: &mut Option<Type>, other: Option<&Type>, overwrite: bool) {
    if let Some(ty) = other {
        if overwrite || slot.is_none() {
            *slot = Some(ty.clone());
        }
    }
}

struct Applier<'a> {
    subst: &'a Substitution,
}

impl TypeFolder for Applier<'_> {
    fn fold_var(&mut self, name: Name) -> Type {
        self.subst
            .dictionary
            .get(&name)
            .cloned()
            .unwrap_or(Type::Var(name))
    }

    fn fold_instance_self(&mut self) -> Type {
        self.subst
            .instance_type
            .clone()
            .unwrap_or(Type::InstanceSelf)
    }

    fn fold_class_literal(&mut self) -> Type {
        self.subst
            .module_type
            .clone()
            .unwrap_or(Type::ClassLiteral)
    }

    fn fold_self_ref(&mut self) -> Type {
        self.subst.self_type.clone().unwrap_or(Type::SelfRef)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
