use std::rc::Rc;

use pretty_assertions::assert_eq;
use roze_diagnostic::ErrorCode;
use roze_ir::{BinaryOp, Name, Span, StringInterner};
use roze_types::Type;

use super::*;
use crate::exec::{FunctionDef, PipelineStage};
use crate::operators::{table_for, Dispatch};
use crate::EvalErrorKind;

// Tree-building helpers

fn node(kind: ExecKind) -> ExecNode {
    ExecNode::new(kind, Span::DUMMY)
}

fn lit(value: Value) -> ExecNode {
    node(ExecKind::Literal(value))
}

fn int(n: i64) -> ExecNode {
    lit(Value::Int(n))
}

fn ident(name: Name) -> ExecNode {
    node(ExecKind::Identifier(name))
}

fn binary(op: BinaryOp, left: ExecNode, right: ExecNode) -> ExecNode {
    let dispatch = Dispatch::Deferred(table_for(op));
    let (left, right) = (Box::new(left), Box::new(right));
    if op.is_comparison() {
        node(ExecKind::Compare {
            op,
            dispatch,
            left,
            right,
        })
    } else {
        node(ExecKind::Binary {
            op,
            dispatch,
            ty: Type::Unknown,
            left,
            right,
        })
    }
}

fn assign(name: Name, value: ExecNode) -> ExecNode {
    node(ExecKind::Assign {
        name,
        value: Box::new(value),
    })
}

fn plus_assign(name: Name, value: ExecNode) -> ExecNode {
    node(ExecKind::PlusAssign {
        name,
        value: Box::new(value),
    })
}

fn def(name: Option<Name>, params: Vec<Name>, body: Vec<ExecNode>) -> Rc<FunctionDef> {
    Rc::new(FunctionDef {
        name,
        params,
        body: ExecBlock {
            statements: body,
            span: Span::DUMMY,
        },
        span: Span::DUMMY,
    })
}

fn lambda(params: Vec<Name>, body: Vec<ExecNode>) -> ExecNode {
    node(ExecKind::Function(def(None, params, body)))
}

fn invoke(name: Name, args: Vec<ExecNode>) -> ExecNode {
    node(ExecKind::Invoke { name, args })
}

fn series(from: ExecNode, to: ExecNode) -> ExecNode {
    node(ExecKind::Series {
        from: Box::new(from),
        to: Box::new(to),
    })
}

fn pipeline(stages: Vec<ExecNode>) -> ExecNode {
    node(ExecKind::Pipeline(
        stages
            .into_iter()
            .map(|node| PipelineStage {
                node,
                complete: false,
            })
            .collect(),
    ))
}

fn program(functions: Vec<Rc<FunctionDef>>, statements: Vec<ExecNode>) -> ProgramExecutable {
    ProgramExecutable {
        functions,
        block: ExecBlock {
            statements,
            span: Span::DUMMY,
        },
    }
}

/// `fn double(x) { x * 2 }`
fn double(interner: &StringInterner) -> Rc<FunctionDef> {
    let x = interner.intern("x");
    def(
        Some(interner.intern("double")),
        vec![x],
        vec![binary(BinaryOp::Mul, ident(x), int(2))],
    )
}

fn run(interner: &StringInterner, program: &ProgramExecutable) -> Result<Option<Value>, EvalError> {
    InterpreterBuilder::new(interner)
        .mode(EvalMode::test_run())
        .build()
        .run_program(program)
}

fn run_value(interner: &StringInterner, program: &ProgramExecutable) -> Value {
    run(interner, program).unwrap().unwrap()
}

fn run_error(interner: &StringInterner, program: &ProgramExecutable) -> EvalError {
    run(interner, program).unwrap_err()
}

// Expressions

#[test]
fn empty_program_has_no_value() {
    let interner = StringInterner::new();
    assert_eq!(run(&interner, &program(vec![], vec![])), Ok(None));
}

#[test]
fn program_value_is_last_statement() {
    let interner = StringInterner::new();
    let prog = program(
        vec![],
        vec![
            int(1),
            binary(
                BinaryOp::Add,
                lit(Value::string("a")),
                lit(Value::string("b")),
            ),
        ],
    );
    assert_eq!(run_value(&interner, &prog), Value::string("ab"));
}

#[test]
fn negate_wraps() {
    let interner = StringInterner::new();
    let prog = program(vec![], vec![node(ExecKind::Negate(Box::new(int(i64::MIN))))]);
    assert_eq!(run_value(&interner, &prog), Value::Int(i64::MIN));
}

#[test]
fn not_requires_bool() {
    let interner = StringInterner::new();
    let prog = program(vec![], vec![node(ExecKind::Not(Box::new(int(1))))]);
    let err = run_error(&interner, &prog);
    assert_eq!(err.kind.error_code(), ErrorCode::E6003);
}

#[test]
fn and_short_circuits() {
    let interner = StringInterner::new();
    let missing = interner.intern("missing");
    let prog = program(
        vec![],
        vec![node(ExecKind::And(
            Box::new(lit(Value::Bool(false))),
            Box::new(ident(missing)),
        ))],
    );
    assert_eq!(run_value(&interner, &prog), Value::Bool(false));

    let prog = program(
        vec![],
        vec![node(ExecKind::And(
            Box::new(lit(Value::Bool(true))),
            Box::new(ident(missing)),
        ))],
    );
    assert_eq!(run_error(&interner, &prog).kind.error_code(), ErrorCode::E6001);
}

#[test]
fn or_short_circuits() {
    let interner = StringInterner::new();
    let missing = interner.intern("missing");
    let prog = program(
        vec![],
        vec![node(ExecKind::Or(
            Box::new(lit(Value::Bool(true))),
            Box::new(ident(missing)),
        ))],
    );
    assert_eq!(run_value(&interner, &prog), Value::Bool(true));
}

#[test]
fn or_returns_right_operand() {
    let interner = StringInterner::new();
    let prog = program(
        vec![],
        vec![node(ExecKind::Or(
            Box::new(lit(Value::Bool(false))),
            Box::new(int(7)),
        ))],
    );
    assert_eq!(run_value(&interner, &prog), Value::Int(7));
}

#[test]
fn list_and_key_value() {
    let interner = StringInterner::new();
    let prog = program(
        vec![],
        vec![node(ExecKind::List(vec![
            int(1),
            node(ExecKind::KeyValue {
                key: Box::new(lit(Value::string("k"))),
                value: Box::new(int(2)),
            }),
        ]))],
    );
    assert_eq!(
        run_value(&interner, &prog),
        Value::list(vec![
            Value::Int(1),
            Value::key_value(Value::string("k"), Value::Int(2)),
        ])
    );
}

#[test]
fn division_by_zero_carries_span() {
    let interner = StringInterner::new();
    let div = ExecNode::new(
        ExecKind::Binary {
            op: BinaryOp::Div,
            dispatch: Dispatch::Deferred(table_for(BinaryOp::Div)),
            ty: Type::Unknown,
            left: Box::new(int(1)),
            right: Box::new(int(0)),
        },
        Span::new(3, 8),
    );
    let err = run_error(&interner, &program(vec![], vec![div]));
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(err.span, Some(Span::new(3, 8)));
}

// Assignment

#[test]
fn assign_then_read() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let prog = program(vec![], vec![assign(x, int(1)), assign(x, int(2)), ident(x)]);
    assert_eq!(run_value(&interner, &prog), Value::Int(2));
}

#[test]
fn assign_returns_value() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let prog = program(vec![], vec![assign(x, int(5))]);
    assert_eq!(run_value(&interner, &prog), Value::Int(5));
}

#[test]
fn assign_cannot_change_runtime_type() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let prog = program(
        vec![],
        vec![assign(x, int(1)), assign(x, lit(Value::string("s")))],
    );
    let err = run_error(&interner, &prog);
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeChange {
            name: "x".to_string(),
            existing: Type::Integer,
            new: Type::String,
        }
    );
}

#[test]
fn plus_assign_adds() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let prog = program(
        vec![],
        vec![assign(x, int(1)), plus_assign(x, int(4)), plus_assign(x, int(5))],
    );
    assert_eq!(run_value(&interner, &prog), Value::Int(10));
}

#[test]
fn plus_assign_failures() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let undefined = program(vec![], vec![plus_assign(x, int(1))]);
    assert_eq!(run_error(&interner, &undefined).kind.error_code(), ErrorCode::E6001);

    let mixed = program(
        vec![],
        vec![assign(x, int(1)), plus_assign(x, lit(Value::Float(1.0)))],
    );
    assert_eq!(run_error(&interner, &mixed).kind.error_code(), ErrorCode::E6002);

    let no_cell = program(
        vec![],
        vec![
            assign(x, lit(Value::Bool(true))),
            plus_assign(x, lit(Value::Bool(true))),
        ],
    );
    assert_eq!(run_error(&interner, &no_cell).kind.error_code(), ErrorCode::E6003);
}

// Functions

#[test]
fn invoke_named_function() {
    let interner = StringInterner::new();
    let name = interner.intern("double");
    let prog = program(vec![double(&interner)], vec![invoke(name, vec![int(21)])]);
    assert_eq!(run_value(&interner, &prog), Value::Int(42));
}

#[test]
fn invoke_checks_arity() {
    let interner = StringInterner::new();
    let name = interner.intern("double");
    let prog = program(
        vec![double(&interner)],
        vec![invoke(name, vec![int(1), int(2)])],
    );
    let err = run_error(&interner, &prog);
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            name: "double".to_string(),
            expected: 1,
            got: 2,
        }
    );
}

#[test]
fn invoke_non_function() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let prog = program(vec![], vec![assign(x, int(1)), invoke(x, vec![])]);
    assert_eq!(run_error(&interner, &prog).kind.error_code(), ErrorCode::E6004);
}

#[test]
fn callee_cannot_see_caller_locals() {
    let interner = StringInterner::new();
    let peek = interner.intern("peek");
    let y = interner.intern("y");
    let prog = program(
        vec![def(Some(peek), vec![], vec![ident(y)])],
        vec![assign(y, int(1)), invoke(peek, vec![])],
    );
    let err = run_error(&interner, &prog);
    assert_eq!(err.kind.error_code(), ErrorCode::E6001);
    assert_eq!(
        err.backtrace.map(|bt| bt.frames()[0].name.clone()),
        Some("peek".to_string())
    );
}

#[test]
fn unnamed_function_value() {
    let interner = StringInterner::new();
    let inc = interner.intern("inc");
    let n = interner.intern("n");
    let prog = program(
        vec![],
        vec![
            assign(inc, lambda(vec![n], vec![binary(BinaryOp::Add, ident(n), int(1))])),
            invoke(inc, vec![int(1)]),
        ],
    );
    assert_eq!(run_value(&interner, &prog), Value::Int(2));
}

#[test]
fn empty_body_is_null() {
    let interner = StringInterner::new();
    let f = interner.intern("f");
    let prog = program(vec![def(Some(f), vec![], vec![])], vec![invoke(f, vec![])]);
    assert_eq!(run_value(&interner, &prog), Value::null());
}

#[test]
fn duplicate_function() {
    let interner = StringInterner::new();
    let f = interner.intern("f");
    let prog = program(
        vec![def(Some(f), vec![], vec![]), def(Some(f), vec![], vec![int(1)])],
        vec![],
    );
    assert_eq!(
        run_error(&interner, &prog).kind,
        EvalErrorKind::DuplicateGlobal {
            name: "f".to_string()
        }
    );
}

#[test]
fn globals_cannot_be_reassigned() {
    let interner = StringInterner::new();
    let f = interner.intern("f");
    let prog = program(
        vec![def(Some(f), vec![], vec![])],
        vec![assign(f, lambda(vec![], vec![]))],
    );
    assert_eq!(run_error(&interner, &prog).kind.error_code(), ErrorCode::E6007);
}

#[test]
fn recursion_limit() {
    let interner = StringInterner::new();
    let f = interner.intern("f");
    let prog = program(
        vec![def(Some(f), vec![], vec![invoke(f, vec![])])],
        vec![invoke(f, vec![])],
    );
    let err = InterpreterBuilder::new(&interner)
        .max_depth(Some(10))
        .build()
        .run_program(&prog)
        .unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::RecursionLimit { depth: 10 });
    assert_eq!(err.backtrace.map(|bt| bt.len()), Some(10));
}

// Ranges and pipelines

#[test]
fn series_of_integers_is_a_generator() {
    let interner = StringInterner::new();
    let g = interner.intern("g");
    let prog = program(
        vec![],
        vec![
            assign(g, series(int(1), int(2))),
            invoke(g, vec![]),
            invoke(g, vec![]),
            invoke(g, vec![]),
        ],
    );
    assert_eq!(run_value(&interner, &prog), Value::Tag(Name::COMPLETE));
}

#[test]
fn series_of_other_values_is_from() {
    let interner = StringInterner::new();
    let prog = program(
        vec![],
        vec![series(lit(Value::string("a")), lit(Value::string("b")))],
    );
    assert_eq!(run_value(&interner, &prog), Value::string("a"));
}

#[test]
fn pipeline_drains_generator_and_returns_complete() {
    let interner = StringInterner::new();
    let g = interner.intern("g");
    let double_name = interner.intern("double");
    let prog = program(
        vec![double(&interner)],
        vec![
            assign(g, series(int(1), int(3))),
            pipeline(vec![ident(g), ident(double_name)]),
        ],
    );
    assert_eq!(run_value(&interner, &prog), Value::Tag(Name::COMPLETE));

    let drained = program(
        vec![double(&interner)],
        vec![
            assign(g, series(int(1), int(3))),
            pipeline(vec![ident(g), ident(double_name)]),
            invoke(g, vec![]),
        ],
    );
    assert_eq!(run_value(&interner, &drained), Value::Tag(Name::COMPLETE));
}

#[test]
fn sentinel_abandons_the_lap() {
    let interner = StringInterner::new();
    let double_name = interner.intern("double");
    // `double` would fail on a tag if it ran.
    let prog = program(
        vec![double(&interner)],
        vec![pipeline(vec![
            lambda(vec![], vec![lit(Value::Tag(Name::BREAK))]),
            ident(double_name),
        ])],
    );
    assert_eq!(run_value(&interner, &prog), Value::Tag(Name::BREAK));
}

#[test]
fn later_stage_null_ends_the_pipeline() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let prog = program(
        vec![],
        vec![pipeline(vec![
            series(int(1), int(3)),
            lambda(vec![x], vec![lit(Value::Tag(Name::NULL))]),
        ])],
    );
    let result = InterpreterBuilder::new(&interner)
        .mode(EvalMode::TestRun { max_laps: 1 })
        .build()
        .run_program(&prog)
        .unwrap();
    assert_eq!(result, Some(Value::Tag(Name::NULL)));
}

#[test]
fn non_sentinel_results_start_another_lap() {
    let interner = StringInterner::new();
    let g = interner.intern("g");
    let x = interner.intern("x");
    // Stage 1 ignores its input, so only the generator ends the pipeline.
    let prog = program(
        vec![],
        vec![
            assign(g, series(int(1), int(4))),
            pipeline(vec![
                ident(g),
                lambda(vec![x], vec![lit(Value::Tag(Name::CONTINUE))]),
            ]),
        ],
    );
    assert_eq!(run_value(&interner, &prog), Value::Tag(Name::COMPLETE));
}

#[test]
fn endless_pipeline_hits_lap_limit() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let prog = program(
        vec![],
        vec![pipeline(vec![
            lambda(vec![], vec![lit(Value::Tag(Name::CONTINUE))]),
            lambda(vec![x], vec![ident(x)]),
        ])],
    );
    let err = InterpreterBuilder::new(&interner)
        .mode(EvalMode::TestRun { max_laps: 5 })
        .build()
        .run_program(&prog)
        .unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::LapLimit { limit: 5 });
}

#[test]
fn pipeline_stage_checks() {
    let interner = StringInterner::new();
    let double_name = interner.intern("double");

    let not_function = program(
        vec![double(&interner)],
        vec![pipeline(vec![int(1), ident(double_name)])],
    );
    assert_eq!(
        run_error(&interner, &not_function).kind,
        EvalErrorKind::StageNotFunction {
            stage: 0,
            found: Type::Integer,
        }
    );

    let wrong_arity = program(
        vec![],
        vec![pipeline(vec![
            series(int(1), int(2)),
            lambda(vec![], vec![int(1)]),
        ])],
    );
    assert_eq!(
        run_error(&interner, &wrong_arity).kind,
        EvalErrorKind::StageArity {
            stage: 1,
            params: 0,
        }
    );
}

// Builder

#[test]
fn builder_limits() {
    let interner = StringInterner::new();
    let interp = Interpreter::new(&interner);
    assert_eq!(interp.mode(), &EvalMode::Interpret);
    assert_eq!(interp.max_laps(), None);
    assert_eq!(interp.max_depth(), None);

    let interp = InterpreterBuilder::new(&interner)
        .mode(EvalMode::test_run())
        .max_laps(Some(3))
        .build();
    assert_eq!(interp.max_laps(), Some(3));
    assert_eq!(interp.max_depth(), Some(500));
}
