//! Programs, function literals and blocks.

use std::rc::Rc;

use roze_eval::{ExecBlock, FunctionDef, ProgramExecutable};
use roze_ir::ast::{Block, Command, Param, Program};
use roze_ir::{Name, Span};

use crate::errors::duplicate_parameter;
use crate::Compiler;

impl Compiler<'_> {
    /// Split the program's commands into named functions and the top-level
    /// block, compiling each in source order.
    pub fn compile_program(&mut self, program: &Program) -> ProgramExecutable {
        let mut executable = ProgramExecutable {
            functions: Vec::new(),
            block: ExecBlock {
                statements: Vec::with_capacity(program.commands.len()),
                span: program.span,
            },
        };

        for command in &program.commands {
            match command {
                Command::NamedFunction(function) => {
                    let def = self.function(
                        Some(function.name),
                        &function.params,
                        &function.body,
                        function.span,
                    );
                    executable.functions.push(def);
                }
                Command::Expression(expression) => {
                    let node = self.compile_expression(expression);
                    executable.block.statements.push(node);
                }
            }
        }
        executable
    }

    /// Compile a function literal once.
    ///
    /// The body shares the program's registry. Parameters are not recorded,
    /// so a parameter reads as `Unknown` unless the name already has a type.
    pub(crate) fn function(
        &mut self,
        name: Option<Name>,
        params: &[Param],
        body: &Block,
        span: Span,
    ) -> Rc<FunctionDef> {
        let mut names = Vec::with_capacity(params.len());
        for (index, param) in params.iter().enumerate() {
            if let Some(first) = params[..index].iter().find(|p| p.name == param.name) {
                let diagnostic =
                    duplicate_parameter(param.span, first.span, self.name(param.name));
                self.errors.push(diagnostic);
            }
            names.push(param.name);
        }

        let body = self.block(body);

        tracing::trace!(
            function = name.map_or("<unnamed>", |name| self.name(name)),
            params = names.len(),
            "compiled function"
        );
        Rc::new(FunctionDef {
            name,
            params: names,
            body,
            span,
        })
    }

    fn block(&mut self, block: &Block) -> ExecBlock {
        ExecBlock {
            statements: block
                .statements
                .iter()
                .map(|statement| self.compile_expression(statement))
                .collect(),
            span: block.span,
        }
    }
}
