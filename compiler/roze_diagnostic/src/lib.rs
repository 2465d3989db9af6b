//! Diagnostic system for Roze error reporting.
//!
//! Every phase reports problems the same way:
//! - an error code for searchability (first digit names the phase)
//! - a message saying what went wrong
//! - a primary span saying where
//! - optional notes for context
//!
//! Phases that keep going after an error (the compiler) collect their
//! diagnostics in a [`CompileErrors`] accumulator instead of returning early.

mod compile_errors;
mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use compile_errors::CompileErrors;
pub use diagnostic::{type_mismatch, Diagnostic, Label, LabelStyle, Severity};
pub use error_code::ErrorCode;
