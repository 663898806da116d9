//! Smart constructors for unions and intersections.
//!
//! Both constructors flatten nested members of the same kind, drop
//! duplicates (keeping first-seen order), and collapse trivial results.
//!
//! | input                  | `union`  | `intersection` |
//! |------------------------|----------|----------------|
//! | no members             | `Bottom` | `Top`          |
//! | one member `T`         | `T`      | `T`            |
//! | contains `Any`         | `Any`    | `Any`          |
//! | contains `Top`         | `Top`    | dropped        |
//! | contains `Bottom`      | dropped  | `Bottom`       |

use super::Type;

impl Type {
    /// Build a union of `members`.
    pub fn union(members: impl IntoIterator<Item = Type>) -> Type {
        let mut flat = Vec::new();
        for member in members {
            if let Some(absorbing) = push_union_member(&mut flat, member) {
                return absorbing;
            }
        }
        collapse(flat, Type::Bottom, Type::Union)
    }

    /// Build an intersection of `members`.
    pub fn intersection(members: impl IntoIterator<Item = Type>) -> Type {
        let mut flat = Vec::new();
        for member in members {
            if let Some(absorbing) = push_intersection_member(&mut flat, member) {
                return absorbing;
            }
        }
        collapse(flat, Type::Top, Type::Intersection)
    }
}

/// Add `member` to a union under construction. Returns the whole union's
/// result early when `member` absorbs everything.
fn push_union_member(flat: &mut Vec<Type>, member: Type) -> Option<Type> {
    match member {
        Type::Union(members) => members
            .into_iter()
            .find_map(|inner| push_union_member(flat, inner)),
        Type::Any | Type::Top => Some(member),
        Type::Bottom => None,
        other => {
            if !flat.contains(&other) {
                flat.push(other);
            }
            None
        }
    }
}

fn push_intersection_member(flat: &mut Vec<Type>, member: Type) -> Option<Type> {
    match member {
        Type::Intersection(members) => members
            .into_iter()
            .find_map(|inner| push_intersection_member(flat, inner)),
        Type::Any | Type::Bottom => Some(member),
        Type::Top => None,
        other => {
            if !flat.contains(&other) {
                flat.push(other);
            }
            None
        }
    }
}

fn collapse(mut flat: Vec<Type>, empty: Type, wrap: fn(Vec<Type>) -> Type) -> Type {
    match flat.len() {
        0 => empty,
        1 => flat.pop().unwrap_or(empty),
        _ => wrap(flat),
    }
}
