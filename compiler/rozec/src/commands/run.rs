//! The `run` command: compile and evaluate a Roze source file.

use roze_ir::StringInterner;

use super::{read_file, report_and_exit};
use crate::{run_source, RunOptions};

/// Parsed `roze run` arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunArgs {
    pub path: String,
    pub options: RunOptions,
}

/// Parse the arguments following `run`.
///
/// Accepts one path plus `--max-laps=N` and `--max-depth=N` in any order.
pub fn parse_run_args(args: &[String]) -> Result<RunArgs, String> {
    let mut path = None;
    let mut options = RunOptions::default();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--max-laps=") {
            options.max_laps = Some(parse_limit("--max-laps", value)?);
        } else if let Some(value) = arg.strip_prefix("--max-depth=") {
            options.max_depth = Some(parse_limit("--max-depth", value)?);
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    let path = path.ok_or_else(|| "missing file path".to_string())?;
    Ok(RunArgs { path, options })
}

fn parse_limit(flag: &str, value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(format!("{flag} expects a positive integer, got '{value}'")),
    }
}

/// Run a file and print its result, if any.
pub fn run_file(path: &str, options: &RunOptions) {
    let source = read_file(path);
    let interner = StringInterner::new();
    match run_source(&source, &interner, options) {
        Ok(Some(value)) => println!("{}", value.display(&interner)),
        Ok(None) => {}
        Err(err) => {
            tracing::debug!(%err, "run failed");
            report_and_exit(path, &source, &err.diagnostics());
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
