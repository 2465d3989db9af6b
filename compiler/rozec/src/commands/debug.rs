//! Debug commands: `dump`, `parse` and `lex` for inspecting the phases.

use roze_ir::ast::Command;
use roze_ir::StringInterner;

use super::{read_file, report_and_exit};
use crate::check_source;

/// Compile a file and print the executable tree.
pub fn dump_file(path: &str) {
    let source = read_file(path);
    let interner = StringInterner::new();
    match check_source(&source, &interner) {
        Ok(executable) => print!("{}", executable.dump(&interner)),
        Err(diagnostics) => report_and_exit(path, &source, &diagnostics),
    }
}

/// Parse a file and display parse tree information.
pub fn parse_file(path: &str) {
    let source = read_file(path);
    let interner = StringInterner::new();
    let tokens = roze_lexer::lex(&source, &interner);
    let output = roze_parse::parse(&tokens, &interner);

    let functions: Vec<_> = output
        .program
        .commands
        .iter()
        .filter_map(|command| match command {
            Command::NamedFunction(function) => Some(function),
            Command::Expression(_) => None,
        })
        .collect();

    println!("Parse result for '{path}':");
    println!("  Functions: {}", functions.len());
    println!(
        "  Statements: {}",
        output.program.commands.len() - functions.len()
    );
    println!("  Errors: {}", output.errors.len());

    if !functions.is_empty() {
        println!();
        println!("Functions:");
        for function in functions {
            let params: Vec<_> = function
                .params
                .iter()
                .map(|param| interner.lookup(param.name))
                .collect();
            println!(
                "  {}({}) @ {}",
                interner.lookup(function.name),
                params.join(", "),
                function.span
            );
        }
    }

    if output.has_errors() {
        println!();
        println!("Errors:");
        for diagnostic in output.diagnostics() {
            println!("  {diagnostic}");
        }
    }
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let source = read_file(path);
    let interner = StringInterner::new();
    let tokens = roze_lexer::lex(&source, &interner);

    println!("Tokens for '{path}' ({} tokens):", tokens.len());
    for token in tokens.iter() {
        println!("  {:?} @ {}", token.kind, token.span);
    }
}
