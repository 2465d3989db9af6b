//! Roze IR - shared front-end types.
//!
//! This crate contains the data structures every other Roze crate agrees on:
//! - `Span` for source locations
//! - `Name` and `StringInterner` for interned identifiers and tags
//! - the parse tree (`ast`) handed from the parser to the compiler
//! - operator enums used by both the parse tree and the executable tree
//!
//! # Design
//!
//! - **Intern identifiers**: identifiers and tags become `Name(u32)`, so
//!   equality and hashing are integer operations. The four pipeline
//!   sentinels are pre-interned at fixed indices (`Name::COMPLETE`, ...).
//! - **Mirror the grammar**: the parse tree has one node type per precedence
//!   level, so the compiler's recursion follows the grammar one-to-one.

mod interner;
mod name;
mod span;
mod traits;

pub mod ast;

pub use ast::{AssignOp, BinaryOp, LogicalOp, PipeOp, UnaryOp};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use span::Span;
pub use traits::Spanned;
