use pretty_assertions::assert_eq;

use super::*;

#[test]
fn interpret_is_unbounded() {
    let mode = EvalMode::default();
    assert_eq!(mode, EvalMode::Interpret);
    assert_eq!(mode.max_recursion_depth(), None);
    assert_eq!(mode.max_laps(), None);
}

#[test]
fn test_run_is_bounded() {
    let mode = EvalMode::test_run();
    assert_eq!(mode.max_recursion_depth(), Some(500));
    assert_eq!(mode.max_laps(), Some(EvalMode::DEFAULT_TEST_LAPS));
    assert_eq!(EvalMode::TestRun { max_laps: 3 }.max_laps(), Some(3));
}
