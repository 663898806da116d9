//! Literal values that can appear as singleton types.

use crate::{Name, StringInterner};

/// A literal type value: `1`, `"foo"`, `:bar`, `true`.
///
/// Strings and symbols are interned so literals stay `Copy + Hash`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    Integer(i64),
    String(Name),
    Symbol(Name),
    Bool(bool),
}

impl Literal {
    pub fn display(&self, interner: &StringInterner) -> String {
        match self {
            Literal::Integer(value) => value.to_string(),
            Literal::String(name) => format!("{:?}", interner.lookup(*name)),
            Literal::Symbol(name) => format!(":{}", interner.lookup(*name)),
            Literal::Bool(value) => value.to_string(),
        }
    }
}
