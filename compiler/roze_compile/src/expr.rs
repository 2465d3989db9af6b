//! Expression levels, from assignment down to base terms.

use roze_eval::operators::{table_for, Dispatch, ADD};
use roze_eval::{ExecKind, ExecNode, PipelineStage, Value};
use roze_ir::ast::{
    Addition, Assignment, Base, BaseKind, Comparison, Expression, KeyValue, Logical,
    Multiplication, Pipe, Series, Unary, UnaryKind,
};
use roze_ir::{AssignOp, BinaryOp, LogicalOp, PipeOp, Span, UnaryOp};
use roze_types::{Recorded, Type};

use crate::errors::{
    empty_expression, invalid_assignment_target, invalid_key, invalid_operator, non_bool_logical,
    operand_mismatch, type_change,
};
use crate::Compiler;

/// Substitute for a node that failed to compile.
fn null(span: Span) -> ExecNode {
    ExecNode::new(ExecKind::Literal(Value::null()), span)
}

impl Compiler<'_> {
    /// Compile an expression statement. An empty one becomes `#null`.
    pub fn compile_expression(&mut self, expression: &Expression) -> ExecNode {
        roze_stack::ensure_sufficient_stack(|| match &expression.assignment {
            Some(assignment) => self.assignment(assignment),
            None => {
                self.errors.push(empty_expression(expression.span));
                null(expression.span)
            }
        })
    }

    fn assignment(&mut self, assignment: &Assignment) -> ExecNode {
        let target = self.pipe(&assignment.pipe);
        let Some(operation) = &assignment.operation else {
            return target;
        };
        let value = self.pipe(&operation.operand);
        let op = operation.op.as_symbol();

        let ExecKind::Identifier(name) = target.kind else {
            self.errors
                .push(invalid_assignment_target(target.span, op));
            return null(assignment.span);
        };

        let ty = value.ty(self.registry);
        match self.registry.record(name, ty) {
            Recorded::Conflict { existing } => {
                let diagnostic = type_change(value.span, self.name(name), existing, ty);
                self.errors.push(diagnostic);
            }
            recorded => {
                tracing::trace!(variable = self.name(name), %ty, ?recorded, "assignment");
            }
        }

        let value = Box::new(value);
        let kind = match operation.op {
            AssignOp::Bind => ExecKind::Assign { name, value },
            AssignOp::PlusAssign => {
                let current = self.registry.type_of(name);
                if !current.is_unknown() && !ADD.supports(current) {
                    self.errors
                        .push(invalid_operator(assignment.span, op, current));
                }
                ExecKind::PlusAssign { name, value }
            }
        };
        ExecNode::new(kind, assignment.span)
    }

    fn pipe(&mut self, pipe: &Pipe) -> ExecNode {
        let first = self.logical(&pipe.first);
        if pipe.rest.is_empty() {
            return first;
        }

        let mut stages = Vec::with_capacity(pipe.rest.len() + 1);
        stages.push(PipelineStage {
            node: first,
            complete: false,
        });
        for operation in &pipe.rest {
            stages.push(PipelineStage {
                node: self.logical(&operation.operand),
                complete: operation.op == PipeOp::PipeComplete,
            });
        }
        ExecNode::new(ExecKind::Pipeline(stages), pipe.span)
    }

    /// `&&` and `||` need a left operand known to be `bool`. Each fold
    /// yields `bool`, so only the first operand is checked.
    fn logical(&mut self, logical: &Logical) -> ExecNode {
        let mut node = self.comparison(&logical.first);
        let Some(first) = logical.rest.first() else {
            return node;
        };

        let ty = node.ty(self.registry);
        if ty != Type::Bool {
            self.errors
                .push(non_bool_logical(node.span, first.op.as_symbol(), ty));
        }

        for operation in &logical.rest {
            let right = self.comparison(&operation.operand);
            let span = node.span.merge(right.span);
            let (left, right) = (Box::new(node), Box::new(right));
            let kind = match operation.op {
                LogicalOp::And => ExecKind::And(left, right),
                LogicalOp::Or => ExecKind::Or(left, right),
            };
            node = ExecNode::new(kind, span);
        }
        node
    }

    fn comparison(&mut self, comparison: &Comparison) -> ExecNode {
        let mut node = self.series(&comparison.first);
        for operation in &comparison.rest {
            let right = self.series(&operation.operand);
            node = self.binary(operation.op, node, right);
        }
        node
    }

    fn series(&mut self, series: &Series) -> ExecNode {
        let from = self.key_value(&series.from);
        let Some(to) = &series.to else {
            return from;
        };
        let to = self.key_value(to);
        ExecNode::new(
            ExecKind::Series {
                from: Box::new(from),
                to: Box::new(to),
            },
            series.span,
        )
    }

    fn key_value(&mut self, key_value: &KeyValue) -> ExecNode {
        let key = self.addition(&key_value.key);
        let Some(value) = &key_value.value else {
            return key;
        };

        let ty = key.ty(self.registry);
        if !ty.is_unknown() && ty != Type::String {
            self.errors.push(invalid_key(key.span, ty));
        }
        let value = self.addition(value);
        ExecNode::new(
            ExecKind::KeyValue {
                key: Box::new(key),
                value: Box::new(value),
            },
            key_value.span,
        )
    }

    fn addition(&mut self, addition: &Addition) -> ExecNode {
        let mut node = self.multiplication(&addition.first);
        for operation in &addition.rest {
            let right = self.multiplication(&operation.operand);
            node = self.binary(operation.op, node, right);
        }
        node
    }

    fn multiplication(&mut self, multiplication: &Multiplication) -> ExecNode {
        let mut node = self.unary(&multiplication.first);
        for operation in &multiplication.rest {
            let right = self.unary(&operation.operand);
            node = self.binary(operation.op, node, right);
        }
        node
    }

    /// Fold one table-dispatched operation onto `left`.
    ///
    /// With both operand types known the cell is chosen now, keyed by the
    /// left type. An `Unknown` on either side leaves the choice to run time.
    fn binary(&mut self, op: BinaryOp, left: ExecNode, right: ExecNode) -> ExecNode {
        let span = left.span.merge(right.span);
        let table = table_for(op);
        let left_ty = left.ty(self.registry);
        let right_ty = right.ty(self.registry);

        let dispatch = if left_ty.conflicts_with(right_ty) {
            self.errors
                .push(operand_mismatch(span, op.as_symbol(), left_ty, right_ty));
            Dispatch::Deferred(table)
        } else if left_ty.is_unknown() || right_ty.is_unknown() {
            Dispatch::Deferred(table)
        } else if let Some(cell) = table.cell(left_ty) {
            Dispatch::Direct(cell)
        } else {
            self.errors
                .push(invalid_operator(span, op.as_symbol(), left_ty));
            Dispatch::Deferred(table)
        };

        let (left, right) = (Box::new(left), Box::new(right));
        let kind = if op.is_comparison() {
            ExecKind::Compare {
                op,
                dispatch,
                left,
                right,
            }
        } else {
            ExecKind::Binary {
                op,
                dispatch,
                ty: left_ty,
                left,
                right,
            }
        };
        ExecNode::new(kind, span)
    }

    fn unary(&mut self, unary: &Unary) -> ExecNode {
        let (op, operand) = match &unary.kind {
            UnaryKind::Base(base) => return self.base(base),
            UnaryKind::Op { op, operand } => (*op, self.unary(operand)),
        };

        let ty = operand.ty(self.registry);
        let valid = match op {
            UnaryOp::Not => matches!(ty, Type::Bool | Type::Unknown),
            UnaryOp::Neg => matches!(ty, Type::Integer | Type::Float | Type::Unknown),
        };
        if !valid {
            self.errors
                .push(invalid_operator(unary.span, op.as_symbol(), ty));
        }

        let operand = Box::new(operand);
        let kind = match op {
            UnaryOp::Not => ExecKind::Not(operand),
            UnaryOp::Neg => ExecKind::Negate(operand),
        };
        ExecNode::new(kind, unary.span)
    }

    fn base(&mut self, base: &Base) -> ExecNode {
        let kind = match &base.kind {
            BaseKind::Bool(value) => ExecKind::Literal(Value::Bool(*value)),
            BaseKind::Float(value) => ExecKind::Literal(Value::Float(*value)),
            BaseKind::Integer(value) => ExecKind::Literal(Value::Int(*value)),
            BaseKind::Tag(name) => ExecKind::Literal(Value::Tag(*name)),
            BaseKind::Str(text) => ExecKind::Literal(Value::string(text)),
            BaseKind::Ident(name) => ExecKind::Identifier(*name),
            BaseKind::Subexpression(expression) => return self.compile_expression(expression),
            BaseKind::List(items) => ExecKind::List(
                items
                    .iter()
                    .map(|item| self.compile_expression(item))
                    .collect(),
            ),
            BaseKind::UnnamedFunction(function) => ExecKind::Function(self.function(
                None,
                &function.params,
                &function.body,
                function.span,
            )),
            BaseKind::Invocation { name, args } => ExecKind::Invoke {
                name: *name,
                args: args.iter().map(|arg| self.compile_expression(arg)).collect(),
            },
        };
        ExecNode::new(kind, base.span)
    }
}
