//! Type algebra for gradus.
//!
//! This crate turns declared signatures into the analysis model and answers
//! the question "what can be called on this type":
//! - [`Type`]: the analysis model, with flattening union/intersection
//!   constructors
//! - [`Substitution`]: generic substitution with `instance`/`class`/`self`
//!   slots
//! - [`Translator`]: declaration model to analysis model and back
//! - [`Factory`]: alias expansion, method-type building and interface
//!   computation over a [`DeclarationEnv`]
//!
//! # Type Model
//!
//! Declared types live in a [`gradus_ir::SigArena`]. Analysis types are owned
//! trees compared structurally; the translator memoizes by arena node, never
//! by structure.

mod builtins;
mod env;
mod error;
mod factory;
mod interface;
mod join;
mod method_type;
mod params;
mod subst;
mod translate;
mod traverse;
mod ty;

pub use builtins::Builtins;
pub use env::{DeclarationEnv, EnvError, Environment};
pub use error::{AliasError, Error, FactoryError, InterfaceError};
pub use factory::Factory;
pub use interface::{Entry, Interface};
pub use join::{SignatureJoin, StructuralJoin};
pub use method_type::{Block, MethodType};
pub use params::Params;
pub use subst::{SubstError, Substitution};
pub use translate::{TranslateError, Translator};
pub use traverse::{TypeFolder, TypeVisitor};
pub use ty::{FlowMarker, ProcType, Type};
