//! Errors raised by the type algebra.
//!
//! Each concern has its own enum; [`Error`] wraps them for callers that just
//! want one type. Errors hold types and names, not rendered text; use
//! `message` with the interner to render them.

use gradus_ir::{StringInterner, TypeName};

use crate::env::EnvError;
use crate::subst::SubstError;
use crate::translate::TranslateError;
use crate::ty::Type;

/// The type has no interface.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum InterfaceError {
    /// Variables, `top`, `bot`, `void`, `untyped`, `class` and `instance`
    /// cannot receive calls.
    #[error("invalid receiver type: {ty:?}")]
    InvalidReceiver { ty: Type },
    /// The interface of `self` was requested with `self` as the receiver.
    #[error("interface of `self` requested without a concrete receiver")]
    SelfWithoutReceiver,
}

/// Alias expansion failed.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum AliasError {
    /// The alias expands to itself along one expansion path.
    #[error("recursive type alias: {alias:?}")]
    Recursive { alias: Type },
}

/// A request the factory cannot honour.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("not a class or module: {name:?}")]
    NotAClass { name: TypeName },
    #[error("{name:?} takes {expected} type arguments, {found} given")]
    ArgumentCountMismatch {
        name: TypeName,
        expected: usize,
        found: usize,
    },
}

/// Any error of this crate.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Interface(#[from] InterfaceError),
    #[error(transparent)]
    Alias(#[from] AliasError),
    #[error(transparent)]
    Factory(#[from] FactoryError),
    #[error(transparent)]
    Translate(#[from] TranslateError),
    #[error(transparent)]
    Subst(#[from] SubstError),
    #[error(transparent)]
    Env(#[from] EnvError),
}

impl Error {
    /// Render with names and types spelled out.
    pub fn message(&self, interner: &StringInterner) -> String {
        match self {
            Error::Interface(InterfaceError::InvalidReceiver { ty }) => {
                format!("invalid receiver type: {}", ty.display(interner))
            }
            Error::Interface(err @ InterfaceError::SelfWithoutReceiver) => err.to_string(),
            Error::Alias(AliasError::Recursive { alias }) => {
                format!("recursive type alias: {}", alias.display(interner))
            }
            Error::Factory(FactoryError::NotAClass { name }) => {
                format!("not a class or module: {}", name.display(interner))
            }
            Error::Factory(FactoryError::ArgumentCountMismatch {
                name,
                expected,
                found,
            }) => format!(
                "{} takes {expected} type arguments, {found} given",
                name.display(interner)
            ),
            Error::Translate(err) => err.message(interner),
            Error::Subst(err) => err.to_string(),
            Error::Env(err) => err.message(interner),
        }
    }
}
