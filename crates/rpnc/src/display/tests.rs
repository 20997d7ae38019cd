use super::*;
use pretty_assertions::assert_eq;
use rpn_eval::{EngineState, Evaluator};

#[test]
fn values_use_six_digits_by_default() {
    assert_eq!(format_value(8.0, 6), "8.000000");
    assert_eq!(format_value(-0.5, 6), "-0.500000");
    assert_eq!(format_value(1.0 / 3.0, 6), "0.333333");
}

#[test]
fn precision_is_configurable() {
    assert_eq!(format_value(1.23456, 2), "1.23");
    assert_eq!(format_value(2.4, 0), "2");
}

#[test]
fn non_finite_values_render() {
    assert_eq!(format_value(f64::INFINITY, 6), "inf");
    assert_eq!(format_value(f64::NAN, 6), "NaN");
}

#[test]
fn stack_display() {
    assert_eq!(format_stack(&[], 6), "Stack is empty");
    assert_eq!(
        format_stack(&[1.0, 2.5, -3.0], 6),
        "Stack: 1.000000 2.500000 -3.000000"
    );
}

#[test]
fn history_display_is_numbered() {
    assert_eq!(format_history(&[]), "No history yet");

    let evaluator = Evaluator::new();
    let mut state = EngineState::new();
    for token in ["5", "3", "+", "9", "sqrt"] {
        assert!(evaluator.process_token(&mut state, token).is_ok());
    }
    assert_eq!(
        format_history(state.history().entries()),
        "History:\n1. 5.000000 + 3.000000 = 8.000000\n2. sqrt(9.000000) = 3.000000"
    );
}

#[test]
fn result_line() {
    assert_eq!(format_result(8.0, 6), "Result: 8.000000");
}

#[test]
fn failure_points_at_token() {
    let error = EvalError::UnknownOperator {
        token: "foo".to_string(),
    };
    assert_eq!(
        format_failure("5 foo", Span::new(2, 5), &error),
        "error: unknown operator 'foo'\n  5 foo\n    ^^^"
    );
}

#[test]
fn failure_caret_counts_chars_not_bytes() {
    let error = EvalError::DivisionByZero;
    let line = "1\u{3000}0 /";
    let start = line.len() - 1;
    assert_eq!(
        format_failure(line, Span::new(start, line.len()), &error),
        format!("error: division by zero\n  {line}\n      ^")
    );
}

#[test]
fn failure_caret_keeps_tabs_in_padding() {
    let error = EvalError::UnknownOperator {
        token: "foo".to_string(),
    };
    assert_eq!(
        format_failure("5\tfoo", Span::new(2, 5), &error),
        "error: unknown operator 'foo'\n  5\tfoo\n   \t^^^"
    );
}
