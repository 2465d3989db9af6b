use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn path_only() {
    let parsed = parse_run_args(&args(&["main.roze"])).unwrap();
    assert_eq!(parsed.path, "main.roze");
    assert_eq!(parsed.options, RunOptions::default());
}

#[test]
fn limits_in_any_order() {
    let parsed =
        parse_run_args(&args(&["--max-depth=20", "main.roze", "--max-laps=100"])).unwrap();
    assert_eq!(parsed.path, "main.roze");
    assert_eq!(parsed.options.max_laps, Some(100));
    assert_eq!(parsed.options.max_depth, Some(20));
}

#[test]
fn rejects_bad_limits() {
    assert_eq!(
        parse_run_args(&args(&["main.roze", "--max-laps=lots"])).unwrap_err(),
        "--max-laps expects a positive integer, got 'lots'"
    );
    assert!(parse_run_args(&args(&["main.roze", "--max-depth=0"])).is_err());
}

#[test]
fn rejects_unknown_and_extra_arguments() {
    assert_eq!(
        parse_run_args(&args(&["main.roze", "--fast"])).unwrap_err(),
        "unknown option '--fast'"
    );
    assert_eq!(
        parse_run_args(&args(&["a.roze", "b.roze"])).unwrap_err(),
        "unexpected argument 'b.roze'"
    );
    assert_eq!(parse_run_args(&[]).unwrap_err(), "missing file path");
}
