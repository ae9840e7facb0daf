//! Stack growth for recursive descent.
//!
//! Generic argument lists, tuple bodies, arrow chains and array suffixes
//! all recurse into the type grammar. The parser bounds that recursion
//! with a configurable nesting limit, but the limit is only useful if the
//! frames below it fit on the stack. [`ensure_sufficient_stack`] grows
//! the stack on demand so that the nesting limit, not the OS stack size,
//! decides when a parse is rejected.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: plain call.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the
/// red zone.
///
/// ```text
/// fn parse_type(&mut self) -> Option<TypeReprId> {
///     ensure_sufficient_stack(|| self.parse_type_inner())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
