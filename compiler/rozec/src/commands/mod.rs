//! Command handlers for the `roze` binary.
//!
//! Each handler reads its file, drives [`crate::driver`], prints to stdout
//! and exits with status 1 after reporting any diagnostics to stderr.

use std::io::{self, IsTerminal};

use roze_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use roze_diagnostic::Diagnostic;

mod check;
mod debug;
mod run;

pub use check::check_file;
pub use debug::{dump_file, lex_file, parse_file};
pub use run::{parse_run_args, run_file, RunArgs};

/// Read a file from disk, exiting with a readable message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
                io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Print `diagnostics` against `source` and exit with status 1.
pub(crate) fn report_and_exit(path: &str, source: &str, diagnostics: &[Diagnostic]) -> ! {
    let is_tty = io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::with_color_mode(io::stderr(), ColorMode::Auto, is_tty)
        .with_source(path, source);
    emitter.emit_all(diagnostics);
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    emitter.emit_summary(errors, diagnostics.len() - errors);
    emitter.flush();
    std::process::exit(1);
}
