//! Flow markers for builtin predicates.
//!
//! `is_a?`, `nil?`, `!` and `===` return `bool`, but a flow-sensitive checker
//! wants to know what a `true` result says about the receiver. Overloads
//! declared by the builtin classes get a [`FlowMarker`] return type instead.
//! Matching is on the declaring class, so a user class that redefines `nil?`
//! keeps its declared return type.

use gradus_ir::{MemberKind, MethodOrigin, Name};

use super::Factory;
use crate::env::DeclarationEnv;
use crate::method_type::MethodType;
use crate::ty::{FlowMarker, Type};

impl<E: DeclarationEnv + ?Sized> Factory<'_, E> {
    /// The marker for `method` when declared at `origin`, if it is one of the
    /// builtin predicates.
    pub fn builtin_predicate(&self, method: Name, origin: &MethodOrigin) -> Option<FlowMarker> {
        if origin.kind != MemberKind::Instance {
            return None;
        }
        let builtins = &self.builtins;
        let defined_in = &origin.defined_in;
        if *defined_in == builtins.object {
            if [builtins.is_a, builtins.kind_of, builtins.instance_of].contains(&method) {
                Some(FlowMarker::ReceiverIsArg)
            } else if method == builtins.nil_p {
                Some(FlowMarker::ReceiverIsNil)
            } else {
                None
            }
        } else if *defined_in == builtins.nil_class && method == builtins.nil_p {
            Some(FlowMarker::ReceiverIsNil)
        } else if *defined_in == builtins.basic_object && method == builtins.not {
            Some(FlowMarker::Not)
        } else if *defined_in == builtins.module && method == builtins.case_eq {
            Some(FlowMarker::ArgIsReceiver)
        } else {
            None
        }
    }

    /// Replace the return type of a builtin predicate overload with its marker.
    pub(super) fn setup_primitives(&self, method: Name, method_type: MethodType) -> MethodType {
        let marker = method_type
            .origin
            .as_ref()
            .and_then(|origin| self.builtin_predicate(method, origin));
        match marker {
            Some(marker) => method_type.with_return_type(Type::Logic(marker)),
            None => method_type,
        }
    }
}
