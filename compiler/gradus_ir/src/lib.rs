//! gradus IR: names and the declaration type model.
//!
//! This crate holds the data that arrives from signature declarations:
//! - `Name`s interned by a [`StringInterner`]
//! - Qualified [`TypeName`]s and their [`Namespace`]s
//! - The host [`Literal`] domain
//! - The declaration model in [`sig`]: types stored in a [`SigArena`],
//!   function shapes, method signatures and member definitions
//!
//! The analysis-side type model lives in `gradus_types`.

mod interner;
mod literal;
mod name;
pub mod sig;
mod type_name;

pub use interner::{InternError, StringInterner};
pub use literal::Literal;
pub use name::Name;
pub use sig::{
    ArenaId, ClassKind, Definition, FlowMarker, MemberKind, MethodDef, MethodOrigin,
    MethodOverload, MethodSig, SigArena, SigBlock, SigFunction, SigParam, SigType, SigTypeId,
    Visibility,
};
pub use type_name::{Namespace, TypeName};
