//! Parameter lists of procs and methods.

use std::collections::BTreeMap;

use gradus_ir::Name;

use crate::Type;

/// Parameters of a callable, identified by position and keyword.
///
/// Positional parameter names are not kept: the analysis model identifies
/// positionals by index only.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Params {
    pub required: Vec<Type>,
    pub optional: Vec<Type>,
    pub rest: Option<Type>,
    pub required_keywords: BTreeMap<Name, Type>,
    pub optional_keywords: BTreeMap<Name, Type>,
    pub rest_keywords: Option<Type>,
}

impl Params {
    /// `()`
    pub fn empty() -> Self {
        Params::default()
    }

    /// Required positionals only.
    pub fn positional(required: Vec<Type>) -> Self {
        Params {
            required,
            ..Params::default()
        }
    }

    /// Whether the list accepts no arguments at all.
    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
            && self.optional.is_empty()
            && self.rest.is_none()
            && self.required_keywords.is_empty()
            && self.optional_keywords.is_empty()
            && self.rest_keywords.is_none()
    }

    /// Whether `other` has the same positions and keyword names, ignoring
    /// the parameter types.
    pub fn same_shape(&self, other: &Params) -> bool {
        self.required.len() == other.required.len()
            && self.optional.len() == other.optional.len()
            && self.rest.is_some() == other.rest.is_some()
            && self.required_keywords.keys().eq(other.required_keywords.keys())
            && self.optional_keywords.keys().eq(other.optional_keywords.keys())
            && self.rest_keywords.is_some() == other.rest_keywords.is_some()
    }

    /// Apply `f` to every parameter type.
    #[must_use]
    pub fn map_types(&self, mut f: impl FnMut(&Type) -> Type) -> Params {
        Params {
            required: self.required.iter().map(&mut f).collect(),
            optional: self.optional.iter().map(&mut f).collect(),
            rest: self.rest.as_ref().map(&mut f),
            required_keywords: self
                .required_keywords
                .iter()
                .map(|(k, t)| (*k, f(t)))
                .collect(),
            optional_keywords: self
                .optional_keywords
                .iter()
                .map(|(k, t)| (*k, f(t)))
                .collect(),
            rest_keywords: self.rest_keywords.as_ref().map(&mut f),
        }
    }

    /// Combine two same-shape lists position by position.
    ///
    /// Returns `None` when the shapes differ.
    pub fn zip_with(
        &self,
        other: &Params,
        mut f: impl FnMut(&Type, &Type) -> Type,
    ) -> Option<Params> {
        if !self.same_shape(other) {
            return None;
        }
        let zip = |a: &[Type], b: &[Type], f: &mut dyn FnMut(&Type, &Type) -> Type| {
            a.iter().zip(b).map(|(x, y)| f(x, y)).collect::<Vec<_>>()
        };
        let zip_map = |a: &BTreeMap<Name, Type>,
                       b: &BTreeMap<Name, Type>,
                       f: &mut dyn FnMut(&Type, &Type) -> Type| {
            a.iter()
                .zip(b.values())
                .map(|((k, x), y)| (*k, f(x, y)))
                .collect::<BTreeMap<_, _>>()
        };
        Some(Params {
            required: zip(&self.required, &other.required, &mut f),
            optional: zip(&self.optional, &other.optional, &mut f),
            rest: self.rest.as_ref().zip(other.rest.as_ref()).map(|(x, y)| f(x, y)),
            required_keywords: zip_map(&self.required_keywords, &other.required_keywords, &mut f),
            optional_keywords: zip_map(&self.optional_keywords, &other.optional_keywords, &mut f),
            rest_keywords: self
                .rest_keywords
                .as_ref()
                .zip(other.rest_keywords.as_ref())
                .map(|(x, y)| f(x, y)),
        })
    }

    /// Every parameter type, positionals first.
    pub fn types(&self) -> impl Iterator<Item = &Type> {
        self.required
            .iter()
            .chain(&self.optional)
            .chain(&self.rest)
            .chain(self.required_keywords.values())
            .chain(self.optional_keywords.values())
            .chain(&self.rest_keywords)
    }
}
