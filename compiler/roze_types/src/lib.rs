//! Roze types.
//!
//! - [`Type`]: the closed set of value types, with `Unknown` for anything
//!   only known at run time. Dispatch tables are arrays indexed by it.
//! - [`TypeRegistry`]: name to type, built up while one program compiles.

mod registry;
mod ty;

pub use registry::{Recorded, TypeRegistry};
pub use ty::Type;
