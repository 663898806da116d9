//! Computed interfaces: what can be called on a type.

use gradus_ir::Name;
use rustc_hash::FxHashMap;

use crate::method_type::MethodType;
use crate::ty::Type;

/// The overloads available under one method name.
///
/// Order matters: callers try overloads front to back, so precise overloads
/// are placed before generic ones.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Entry {
    pub method_types: Vec<MethodType>,
}

impl Entry {
    pub fn new(method_types: Vec<MethodType>) -> Self {
        Entry { method_types }
    }
}

/// The method table of a type.
#[derive(Clone, Debug)]
pub struct Interface {
    /// The receiver type recorded for the calls, in its `self`-placeholder
    /// form when the interface was computed for `self`.
    pub self_type: Type,
    /// Whether private methods are included.
    pub include_private: bool,
    pub methods: FxHashMap<Name, Entry>,
}

impl Interface {
    pub fn new(self_type: Type, include_private: bool) -> Self {
        Interface {
            self_type,
            include_private,
            methods: FxHashMap::default(),
        }
    }

    /// The overloads for `name`, if the method exists.
    pub fn method(&self, name: Name) -> Option<&Entry> {
        self.methods.get(&name)
    }

    pub fn has_method(&self, name: Name) -> bool {
        self.methods.contains_key(&name)
    }
}
