//! Stack guard for the recursive tree walks.
//!
//! Compiling a fragment, cloning a skeleton into a host, and mounting or
//! patching nested blocks all recurse once per tree level. Templates are
//! usually shallow, but nested blocks compose without a depth limit, so
//! every level of those walks goes through [`ensure_sufficient_stack`].
//!
//! - **Native targets**: `stacker` grows the stack when less than
//!   [`RED_ZONE`] remains.
//! - **WASM targets**: plain call; the runtime owns the stack.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
