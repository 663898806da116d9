//! Building method types from declared overloads.
//!
//! A method's own type parameters may clash with type variables already free
//! in the receiver: `Box[T]#map[T]` on a receiver `Box[T]` must not tie the
//! method's `T` to the receiver's. Clashing parameters are renamed to fresh
//! variables before translation.

use std::sync::atomic::{AtomicU32, Ordering};

use gradus_ir::{MethodOrigin, MethodSig, Name, SigArena, SigBlock};

use super::Factory;
use crate::env::DeclarationEnv;
use crate::method_type::{Block, MethodType};
use crate::subst::Substitution;
use crate::translate::{TranslateError, Translator};
use crate::ty::{ProcType, Type};

/// Suffix counter for fresh variables, shared by every factory.
static NEXT_FRESH_VAR: AtomicU32 = AtomicU32::new(1);

impl<E: DeclarationEnv + ?Sized> Factory<'_, E> {
    /// Build the analysis form of a declared overload.
    ///
    /// `subst` is applied after renaming and takes precedence over it.
    pub fn method_type(
        &mut self,
        sig: &MethodSig,
        self_type: &Type,
        subst: Option<&Substitution>,
        origin: Option<MethodOrigin>,
    ) -> MethodType {
        let free = self_type.free_variables();
        let mut rename = Substitution::empty();
        let type_params: Vec<Name> = sig
            .type_params
            .iter()
            .map(|&name| {
                if !free.contains(&name) {
                    return name;
                }
                let fresh = self.fresh_var(name);
                rename.add(name, Type::Var(fresh));
                fresh
            })
            .collect();
        if let Some(subst) = subst {
            rename.merge(subst, true);
        }

        let env = self.env;
        let arena = env.arena();
        let params = self.translator.params(arena, &sig.function);
        let return_type = self.translator.to_internal(arena, sig.function.return_type);
        let block = match &sig.block {
            Some(block) => {
                let params = self.translator.params(arena, &block.function);
                let return_type = self.translator.to_internal(arena, block.function.return_type);
                Some(Block {
                    optional: !block.required,
                    ty: ProcType {
                        params: rename.apply_params(&params),
                        return_type: rename.apply(&return_type),
                    },
                })
            }
            None => None,
        };

        MethodType {
            type_params,
            params: rename.apply_params(&params),
            block,
            return_type: rename.apply(&return_type),
            origin,
        }
    }

    /// The declared form of an overload. Parameters come back anonymous.
    pub fn method_type_to_declaration(
        &self,
        method_type: &MethodType,
        arena: &mut SigArena,
    ) -> Result<MethodSig, TranslateError> {
        tracing::trace!(method_type = %method_type.display(self.interner), "to_declaration");
        let function = Translator::function_to_declaration(
            &method_type.params,
            &method_type.return_type,
            arena,
        )?;
        let block = match &method_type.block {
            Some(block) => Some(SigBlock {
                function: Translator::function_to_declaration(
                    &block.ty.params,
                    &block.ty.return_type,
                    arena,
                )?,
                required: !block.optional,
            }),
            None => None,
        };
        Ok(MethodSig {
            type_params: method_type.type_params.clone(),
            function,
            block,
        })
    }

    /// A variable named after `base` that no other call returns, e.g. `T(3)`.
    fn fresh_var(&self, base: Name) -> Name {
        let n = NEXT_FRESH_VAR.fetch_add(1, Ordering::Relaxed);
        let fresh = self
            .interner
            .intern(&format!("{}({n})", self.interner.lookup(base)));
        tracing::trace!(
            from = self.interner.lookup(base),
            to = self.interner.lookup(fresh),
            "renamed type parameter"
        );
        fresh
    }
}
