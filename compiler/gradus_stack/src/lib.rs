//! Stack growth for structural recursion over type terms.
//!
//! Translation, substitution and interface computation all recurse on the
//! nesting depth of the type they are given. Signature files can nest unions,
//! tuples and procs arbitrarily deep, so every recursive entry point wraps its
//! body in [`ensure_sufficient_stack`].
//!
//! On native targets the stack is grown on demand through `stacker`. On WASM
//! the closure is called directly.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// ```text
/// fn apply(&self, ty: &Type) -> Type {
///     ensure_sufficient_stack(|| match ty {
///         Type::Tuple(elems) => Type::Tuple(elems.iter().map(|t| self.apply(t)).collect()),
///         // ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
