//! Roze Compile - lowers the parse tree into the executable tree.
//!
//! One pass, top down, following the grammar's precedence levels:
//! assignment, pipe, logical, comparison, series, key-value, addition,
//! multiplication, unary, base. Along the way it
//!
//! - propagates operand types through a [`TypeRegistry`],
//! - picks each binary operator's implementation from its dispatch table,
//!   or defers the choice to run time when an operand type is `Unknown`,
//! - rejects type-changing reassignments.
//!
//! Errors never stop the pass. Each one is collected into
//! [`CompileErrors`] and a substitute node takes the offending node's place,
//! so a single run reports everything. Callers must not execute a tree
//! whose errors are non-empty.

mod errors;
mod expr;
mod item;

use roze_diagnostic::CompileErrors;
use roze_eval::{ExecNode, ProgramExecutable};
use roze_ir::ast::{Expression, Program};
use roze_ir::{Name, StringInterner};
use roze_types::TypeRegistry;

/// Compiler state for one program.
pub struct Compiler<'a> {
    interner: &'a StringInterner,
    registry: &'a mut TypeRegistry,
    errors: CompileErrors,
}

impl<'a> Compiler<'a> {
    pub fn new(interner: &'a StringInterner, registry: &'a mut TypeRegistry) -> Self {
        Compiler {
            interner,
            registry,
            errors: CompileErrors::new(),
        }
    }

    /// Consume the compiler, returning every collected error.
    pub fn finish(self) -> CompileErrors {
        self.errors
    }

    #[inline]
    fn name(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }
}

/// Compile a whole program with a fresh type registry.
#[tracing::instrument(level = "debug", skip_all)]
pub fn compile_program(
    program: &Program,
    interner: &StringInterner,
) -> (ProgramExecutable, CompileErrors) {
    let mut registry = TypeRegistry::new();
    let mut compiler = Compiler::new(interner, &mut registry);
    let executable = compiler.compile_program(program);
    let errors = compiler.finish();
    tracing::debug!(
        functions = executable.functions.len(),
        statements = executable.block.statements.len(),
        errors = errors.len(),
        variables = registry.len(),
        "compiled program"
    );
    (executable, errors)
}

/// Compile one expression against an existing registry.
pub fn compile_expression(
    expression: &Expression,
    registry: &mut TypeRegistry,
    interner: &StringInterner,
) -> (ExecNode, CompileErrors) {
    let mut compiler = Compiler::new(interner, registry);
    let node = compiler.compile_expression(expression);
    (node, compiler.finish())
}
