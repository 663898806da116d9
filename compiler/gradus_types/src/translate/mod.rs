//! Translation between the declaration model and the analysis model.
//!
//! Going in ([`Translator::to_internal`]):
//! - `T?` becomes `T | nil`
//! - unions and intersections go through the smart constructors
//! - positional parameter names are dropped, trailing positionals too
//!
//! Going out ([`Translator::to_declaration`]) parameters come back
//! anonymous, and an alias with arguments is rejected since declarations
//! cannot express one.

use gradus_ir::{
    ArenaId, SigArena, SigFunction, SigParam, SigType, SigTypeId, StringInterner, TypeName,
};
use gradus_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

use crate::params::Params;
use crate::ty::Type;

/// Error translating an analysis type into a declaration.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum TranslateError {
    /// Declarations have no parameterized aliases.
    #[error("alias type with arguments is not supported: {name:?}")]
    AliasWithArgs { name: TypeName },
}

impl TranslateError {
    pub fn message(&self, interner: &StringInterner) -> String {
        match self {
            TranslateError::AliasWithArgs { name } => format!(
                "alias type with arguments is not supported: {}",
                name.display(interner)
            ),
        }
    }
}

/// Translator with a memo of translated declaration nodes.
///
/// The memo is keyed by node identity `(ArenaId, SigTypeId)`. Arenas are
/// append-only, so a cached entry never goes stale.
#[derive(Default)]
pub struct Translator {
    memo: FxHashMap<(ArenaId, SigTypeId), Type>,
}

impl Translator {
    pub fn new() -> Self {
        Translator::default()
    }

    /// Number of memoized nodes.
    pub fn cache_len(&self) -> usize {
        self.memo.len()
    }

    /// Translate a declaration node, memoizing every node on the way.
    pub fn to_internal(&mut self, arena: &SigArena, id: SigTypeId) -> Type {
        let key = (arena.id(), id);
        if let Some(ty) = self.memo.get(&key) {
            return ty.clone();
        }
        let ty = ensure_sufficient_stack(|| {
            translate_node(arena, id, &mut |child| self.to_internal(arena, child))
        });
        self.memo.insert(key, ty.clone());
        ty
    }

    /// Translate without touching the memo. Used for short-lived arenas.
    pub fn to_internal_uncached(arena: &SigArena, id: SigTypeId) -> Type {
        ensure_sufficient_stack(|| {
            translate_node(arena, id, &mut |child| {
                Translator::to_internal_uncached(arena, child)
            })
        })
    }

    /// Parameters of a declared function.
    pub fn params(&mut self, arena: &SigArena, function: &SigFunction) -> Params {
        params_of(function, &mut |id| self.to_internal(arena, id))
    }

    /// Translate an analysis type into new nodes of `arena`.
    pub fn to_declaration(ty: &Type, arena: &mut SigArena) -> Result<SigTypeId, TranslateError> {
        ensure_sufficient_stack(|| {
            let node = match ty {
                Type::Any => SigType::Any,
                Type::ClassLiteral => SigType::Class,
                Type::InstanceSelf => SigType::Instance,
                Type::SelfRef => SigType::SelfType,
                Type::Top => SigType::Top,
                Type::Bottom => SigType::Bottom,
                Type::Boolean => SigType::Bool,
                Type::Void => SigType::Void,
                Type::Nil => SigType::Nil,
                Type::Var(name) => SigType::Variable(*name),
                Type::Singleton(name) => SigType::ClassSingleton(name.clone()),
                Type::Instance { name, args } => SigType::ClassInstance {
                    name: name.clone(),
                    args: declare_all(args, arena)?,
                },
                Type::Interface { name, args } => SigType::Interface {
                    name: name.clone(),
                    args: declare_all(args, arena)?,
                },
                Type::Alias { name, args } => {
                    if !args.is_empty() {
                        return Err(TranslateError::AliasWithArgs { name: name.clone() });
                    }
                    SigType::Alias(name.clone())
                }
                Type::Union(members) => SigType::Union(declare_all(members, arena)?),
                Type::Intersection(members) => SigType::Intersection(declare_all(members, arena)?),
                Type::Literal(literal) => SigType::Literal(*literal),
                Type::Tuple(members) => SigType::Tuple(declare_all(members, arena)?),
                Type::Record(fields) => SigType::Record(
                    fields
                        .iter()
                        .map(|(key, value)| Ok((*key, Translator::to_declaration(value, arena)?)))
                        .collect::<Result<_, TranslateError>>()?,
                ),
                Type::Proc(proc) => SigType::Proc(Translator::function_to_declaration(
                    &proc.params,
                    &proc.return_type,
                    arena,
                )?),
                Type::Logic(marker) => SigType::Logic(*marker),
            };
            Ok(arena.alloc(node))
        })
    }

    /// Build a declared function from parameters and a return type. All
    /// parameters are anonymous and there are no trailing positionals.
    pub fn function_to_declaration(
        params: &Params,
        return_type: &Type,
        arena: &mut SigArena,
    ) -> Result<SigFunction, TranslateError> {
        let mut param = |ty: &Type| -> Result<SigParam, TranslateError> {
            Ok(SigParam::anonymous(Translator::to_declaration(ty, arena)?))
        };
        let required_positionals = params
            .required
            .iter()
            .map(&mut param)
            .collect::<Result<Vec<_>, _>>()?;
        let optional_positionals = params
            .optional
            .iter()
            .map(&mut param)
            .collect::<Result<Vec<_>, _>>()?;
        let rest_positionals = params.rest.as_ref().map(&mut param).transpose()?;
        let required_keywords = params
            .required_keywords
            .iter()
            .map(|(k, ty)| Ok((*k, param(ty)?)))
            .collect::<Result<Vec<_>, TranslateError>>()?;
        let optional_keywords = params
            .optional_keywords
            .iter()
            .map(|(k, ty)| Ok((*k, param(ty)?)))
            .collect::<Result<Vec<_>, TranslateError>>()?;
        let rest_keywords = params.rest_keywords.as_ref().map(&mut param).transpose()?;
        Ok(SigFunction {
            required_positionals,
            optional_positionals,
            rest_positionals,
            trailing_positionals: Vec::new(),
            required_keywords,
            optional_keywords,
            rest_keywords,
            return_type: Translator::to_declaration(return_type, arena)?,
        })
    }
}

fn declare_all(types: &[Type], arena: &mut SigArena) -> Result<Vec<SigTypeId>, TranslateError> {
    types
        .iter()
        .map(|ty| Translator::to_declaration(ty, arena))
        .collect()
}

/// Translate one node, using `child` for every child node.
fn translate_node(
    arena: &SigArena,
    id: SigTypeId,
    child: &mut dyn FnMut(SigTypeId) -> Type,
) -> Type {
    let mut all = |ids: &[SigTypeId]| -> Vec<Type> { ids.iter().map(|id| child(*id)).collect() };
    match arena.get(id) {
        SigType::Any => Type::Any,
        SigType::Class => Type::ClassLiteral,
        SigType::Instance => Type::InstanceSelf,
        SigType::SelfType => Type::SelfRef,
        SigType::Top => Type::Top,
        SigType::Bottom => Type::Bottom,
        SigType::Bool => Type::Boolean,
        SigType::Void => Type::Void,
        SigType::Nil => Type::Nil,
        SigType::Variable(name) => Type::Var(*name),
        SigType::ClassSingleton(name) => Type::Singleton(name.clone()),
        SigType::ClassInstance { name, args } => Type::Instance {
            name: name.clone(),
            args: all(args),
        },
        SigType::Interface { name, args } => Type::Interface {
            name: name.clone(),
            args: all(args),
        },
        SigType::Alias(name) => Type::alias(name.clone()),
        SigType::Union(members) => Type::union(all(members)),
        SigType::Intersection(members) => Type::intersection(all(members)),
        SigType::Optional(inner) => Type::optional(child(*inner)),
        SigType::Literal(literal) => Type::Literal(*literal),
        SigType::Logic(marker) => Type::Logic(*marker),
        SigType::Tuple(members) => Type::Tuple(all(members)),
        SigType::Record(fields) => Type::Record(
            fields
                .iter()
                .map(|(key, value)| (*key, child(*value)))
                .collect(),
        ),
        SigType::Proc(function) => {
            let params = params_of(function, child);
            Type::proc(params, child(function.return_type))
        }
    }
}

fn params_of(function: &SigFunction, child: &mut dyn FnMut(SigTypeId) -> Type) -> Params {
    Params {
        required: function
            .required_positionals
            .iter()
            .map(|p| child(p.ty))
            .collect(),
        optional: function
            .optional_positionals
            .iter()
            .map(|p| child(p.ty))
            .collect(),
        rest: function.rest_positionals.as_ref().map(|p| child(p.ty)),
        required_keywords: function
            .required_keywords
            .iter()
            .map(|(k, p)| (*k, child(p.ty)))
            .collect(),
        optional_keywords: function
            .optional_keywords
            .iter()
            .map(|(k, p)| (*k, child(p.ty)))
            .collect(),
        rest_keywords: function.rest_keywords.as_ref().map(|p| child(p.ty)),
    }
}
