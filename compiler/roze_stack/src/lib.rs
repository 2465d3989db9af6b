//! Stack growth guard for the recursive passes.
//!
//! The parser, the compiler and the interpreter all recurse once per nesting
//! level of the source program. A deeply parenthesized expression or a long
//! chain of self-invocations would otherwise overflow the native stack, so
//! every recursive entry point wraps its body in [`ensure_sufficient_stack`].
//!
//! On native targets this defers to `stacker`, which allocates a fresh stack
//! segment when the remaining space drops below the red zone. On `wasm32` it
//! is a plain call.

/// Grow the stack when less than this much remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the red zone has been reached.
///
/// ```text
/// fn eval(&mut self, node: &ExecNode, env: &mut Environment) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_inner(node, env))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
