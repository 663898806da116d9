//! Alias expansion.

use gradus_ir::TypeName;
use gradus_stack::ensure_sufficient_stack;

use super::Factory;
use crate::env::DeclarationEnv;
use crate::error::{AliasError, Error};
use crate::ty::Type;

impl<E: DeclarationEnv + ?Sized> Factory<'_, E> {
    /// The body of alias `name`, one level deep. Cached by name.
    pub fn unfold(&mut self, name: &TypeName) -> Result<Type, Error> {
        if let Some(ty) = self.alias_cache.get(name) {
            return Ok(ty.clone());
        }
        let body = self.env.expand_alias(name)?;
        let ty = self.to_internal(body);
        tracing::trace!(
            alias = %name.display(self.interner),
            body = %ty.display(self.interner),
            "unfolded alias"
        );
        self.alias_cache.insert(name.clone(), ty.clone());
        Ok(ty)
    }

    /// Expand `ty` one level if it is an alias.
    pub fn expand_one(&mut self, ty: &Type) -> Result<Type, Error> {
        match ty {
            Type::Alias { name, .. } => self.unfold(name),
            other => Ok(other.clone()),
        }
    }

    /// Expand aliases until the type is not an alias, also expanding each
    /// member of a union.
    ///
    /// Fails when an alias is reached again while expanding itself. The check
    /// follows one expansion path: two members of a union may expand the same
    /// alias independently.
    pub fn expand_deep(&mut self, ty: &Type) -> Result<Type, Error> {
        let mut path = Vec::new();
        self.expand_deep_in(ty, &mut path)
    }

    fn expand_deep_in(&mut self, ty: &Type, path: &mut Vec<Type>) -> Result<Type, Error> {
        ensure_sufficient_stack(|| {
            if path.contains(ty) {
                tracing::debug!(alias = %ty.display(self.interner), "recursive alias");
                return Err(Error::from(AliasError::Recursive { alias: ty.clone() }));
            }
            match ty {
                Type::Alias { .. } => {
                    let expanded = self.expand_one(ty)?;
                    path.push(ty.clone());
                    let result = self.expand_deep_in(&expanded, path);
                    path.pop();
                    result
                }
                Type::Union(members) => {
                    let expanded = members
                        .iter()
                        .map(|member| self.expand_deep_in(member, path))
                        .collect::<Result<Vec<_>, _>>()?;
                    Ok(Type::union(expanded))
                }
                other => Ok(other.clone()),
            }
        })
    }
}
