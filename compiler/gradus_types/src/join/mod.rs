//! Joining overloads across union members.
//!
//! When a method exists on every member of a union, each pair of overloads
//! is joined into one overload that is safe to call on the union. The join is
//! pluggable; [`StructuralJoin`] is the default.

use crate::method_type::MethodType;
use crate::ty::Type;

/// Signature join: the common overload of two overloads, if one exists.
pub trait SignatureJoin {
    fn join(&self, left: &MethodType, right: &MethodType) -> Option<MethodType>;
}

/// Join overloads of the same shape.
///
/// - equal overloads join to themselves
/// - overloads with the same type parameters, parameter shape and block
///   join with each parameter intersected and the return types unioned
/// - anything else has no join
#[derive(Copy, Clone, Debug, Default)]
pub struct StructuralJoin;

impl SignatureJoin for StructuralJoin {
    fn join(&self, left: &MethodType, right: &MethodType) -> Option<MethodType> {
        if left == right {
            return Some(left.clone());
        }
        if left.type_params != right.type_params || left.block != right.block {
            return None;
        }
        let params = left.params.zip_with(&right.params, |l, r| {
            Type::intersection([l.clone(), r.clone()])
        })?;
        Some(MethodType {
            type_params: left.type_params.clone(),
            params,
            block: left.block.clone(),
            return_type: Type::union([left.return_type.clone(), right.return_type.clone()]),
            origin: None,
        })
    }
}
