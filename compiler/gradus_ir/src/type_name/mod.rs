//! Qualified type names.
//!
//! A [`TypeName`] is a [`Namespace`] plus a final segment. Names written in a
//! signature are usually relative (`Foo::Bar`) and become absolute
//! (`::Foo::Bar`) once resolved against the namespace they appear in.

use crate::{Name, StringInterner};

/// A namespace path, e.g. `::Foo::Bar::`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Namespace {
    pub path: Vec<Name>,
    pub absolute: bool,
}

impl Namespace {
    /// The root namespace `::`.
    pub fn root() -> Self {
        Namespace {
            path: Vec::new(),
            absolute: true,
        }
    }

    /// The empty relative namespace.
    pub fn empty() -> Self {
        Namespace::default()
    }

    /// Whether this is the root namespace.
    pub fn is_root(&self) -> bool {
        self.absolute && self.path.is_empty()
    }

    /// Whether the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// A child namespace with `name` appended.
    #[must_use]
    pub fn append(&self, name: Name) -> Self {
        let mut path = self.path.clone();
        path.push(name);
        Namespace {
            path,
            absolute: self.absolute,
        }
    }

    /// The enclosing namespace, or `None` at the top.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.path.split_last()?;
        Some(Namespace {
            path: rest.to_vec(),
            absolute: self.absolute,
        })
    }

    /// This namespace followed by each enclosing one, innermost first.
    ///
    /// `::A::B::` ascends to `[::A::B::, ::A::, ::]`.
    pub fn ascend(&self) -> Vec<Self> {
        let mut chain = vec![self.clone()];
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            chain.push(parent.clone());
            current = parent;
        }
        chain
    }

    #[must_use]
    pub fn to_absolute(&self) -> Self {
        Namespace {
            path: self.path.clone(),
            absolute: true,
        }
    }

    /// Prefix a relative namespace with `prefix`. Absolute namespaces are
    /// returned unchanged.
    #[must_use]
    pub fn with_prefix(&self, prefix: &Namespace) -> Self {
        if self.absolute {
            return self.clone();
        }
        let mut path = prefix.path.clone();
        path.extend_from_slice(&self.path);
        Namespace {
            path,
            absolute: prefix.absolute,
        }
    }

    /// Format as `::A::B::` (absolute) or `A::B::` (relative).
    pub fn display(&self, interner: &StringInterner) -> String {
        let mut out = String::new();
        if self.absolute {
            out.push_str("::");
        }
        for segment in &self.path {
            out.push_str(interner.lookup(*segment));
            out.push_str("::");
        }
        out
    }
}

/// A qualified type name: class, module, interface or alias.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeName {
    pub namespace: Namespace,
    pub name: Name,
}

impl TypeName {
    pub fn new(namespace: Namespace, name: Name) -> Self {
        TypeName { namespace, name }
    }

    /// A relative name with no namespace, e.g. `Foo`.
    pub fn simple(name: Name) -> Self {
        TypeName {
            namespace: Namespace::empty(),
            name,
        }
    }

    /// A top-level absolute name, e.g. `::Foo`.
    pub fn top_level(name: Name) -> Self {
        TypeName {
            namespace: Namespace::root(),
            name,
        }
    }

    /// Build a name from `::`-separated text such as `"::Foo::Bar"`.
    ///
    /// A leading `::` makes the name absolute. This splits segments only; it
    /// does not validate identifiers.
    pub fn from_path(interner: &StringInterner, text: &str) -> Self {
        let (absolute, rest) = match text.strip_prefix("::") {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let mut segments: Vec<Name> = rest.split("::").map(|s| interner.intern(s)).collect();
        let name = segments.pop().unwrap_or(Name::EMPTY);
        TypeName {
            namespace: Namespace {
                path: segments,
                absolute,
            },
            name,
        }
    }

    pub fn is_absolute(&self) -> bool {
        self.namespace.absolute
    }

    /// The same path made absolute without resolving it.
    #[must_use]
    pub fn to_absolute(&self) -> Self {
        TypeName {
            namespace: self.namespace.to_absolute(),
            name: self.name,
        }
    }

    /// Prefix a relative name with `prefix`.
    #[must_use]
    pub fn with_prefix(&self, prefix: &Namespace) -> Self {
        TypeName {
            namespace: self.namespace.with_prefix(prefix),
            name: self.name,
        }
    }

    /// The namespace this name opens when used as a class or module.
    pub fn to_namespace(&self) -> Namespace {
        self.namespace.append(self.name)
    }

    pub fn display(&self, interner: &StringInterner) -> String {
        format!(
            "{}{}",
            self.namespace.display(interner),
            interner.lookup(self.name)
        )
    }
}
