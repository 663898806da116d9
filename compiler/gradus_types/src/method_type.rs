//! Method overloads in the analysis model.

use std::hash::{Hash, Hasher};

use gradus_ir::{MethodOrigin, Name, StringInterner};

use crate::params::Params;
use crate::ty::{ProcType, Type};

/// A block parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    /// Whether the caller may omit the block.
    pub optional: bool,
    pub ty: ProcType,
}

/// One overload of a method: `[T] (params) { block } -> return_type`.
///
/// Equality and hashing are structural and ignore `origin`: two overloads
/// declared in different places but with the same shape are the same
/// overload.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodType {
    pub type_params: Vec<Name>,
    pub params: Params,
    pub block: Option<Block>,
    pub return_type: Type,
    /// Declaration this overload was built from, if any.
    pub origin: Option<MethodOrigin>,
}

impl MethodType {
    /// A synthesized, non-generic overload without a block.
    pub fn simple(params: Params, return_type: Type) -> Self {
        MethodType {
            type_params: Vec::new(),
            params,
            block: None,
            return_type,
            origin: None,
        }
    }

    /// The same overload with a different return type.
    #[must_use]
    pub fn with_return_type(self, return_type: Type) -> Self {
        MethodType {
            return_type,
            ..self
        }
    }

    /// Format as `[T] (A) { (B) -> C } -> R`.
    pub fn display(&self, interner: &StringInterner) -> String {
        let mut out = String::new();
        if !self.type_params.is_empty() {
            let params: Vec<&str> = self
                .type_params
                .iter()
                .map(|name| interner.lookup(*name))
                .collect();
            out.push('[');
            out.push_str(&params.join(", "));
            out.push_str("] ");
        }
        out.push_str(&self.params.display(interner));
        if let Some(block) = &self.block {
            out.push_str(if block.optional { " ?{ " } else { " { " });
            out.push_str(&block.ty.params.display(interner));
            out.push_str(" -> ");
            out.push_str(&block.ty.return_type.display(interner));
            out.push_str(" }");
        }
        out.push_str(" -> ");
        out.push_str(&self.return_type.display(interner));
        out
    }
}

impl PartialEq for MethodType {
    fn eq(&self, other: &Self) -> bool {
        self.type_params == other.type_params
            && self.params == other.params
            && self.block == other.block
            && self.return_type == other.return_type
    }
}

impl Eq for MethodType {}

impl Hash for MethodType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_params.hash(state);
        self.params.hash(state);
        self.block.hash(state);
        self.return_type.hash(state);
    }
}
