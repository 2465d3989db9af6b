//! The `check` command: parse and compile without running.

use roze_ir::StringInterner;

use super::{read_file, report_and_exit};
use crate::check_source;

/// Report every lexer, parser or compile error in a file.
pub fn check_file(path: &str) {
    let source = read_file(path);
    let interner = StringInterner::new();
    match check_source(&source, &interner) {
        Ok(executable) => println!(
            "{path}: ok ({} functions, {} statements)",
            executable.functions.len(),
            executable.block.statements.len()
        ),
        Err(diagnostics) => report_and_exit(path, &source, &diagnostics),
    }
}
