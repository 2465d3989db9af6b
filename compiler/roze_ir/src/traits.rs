//! Small cross-cutting traits.

use crate::Span;

/// Anything that remembers where it came from in the source.
pub trait Spanned {
    fn span(&self) -> Span;
}
