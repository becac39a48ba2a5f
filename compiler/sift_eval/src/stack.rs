//! Stack growth for recursive matching and guard evaluation.
//!
//! Patterns and guard trees are caller-built and may nest arbitrarily deep,
//! so every recursive step goes through [`ensure_sufficient_stack`].

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Headroom kept free before recursing (100KB).
    const RED_ZONE: usize = 100 * 1024;

    /// Size of each freshly allocated segment (1MB).
    const GROWTH: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
