use calclog::{
    core::machine::{CalculatorState, Phase},
    error::CalcError,
    types::{OperatorKind, ScientificFn},
};

fn typed(text: &str) -> CalculatorState {
    let mut state = CalculatorState::new();
    for c in text.chars() {
        state.input_digit(c).expect("digit");
    }
    state
}

#[test]
fn digits_replace_leading_zero_and_reject_second_point() {
    let mut state = typed("0012.3.4");
    assert_eq!(state.current_text(), "12.34");

    state.clear();
    state.input_digit('.').expect("point");
    assert_eq!(state.current_text(), "0.");
    state.input_digit('5').expect("digit");
    assert_eq!(state.current_value(), 0.5);

    assert_eq!(state.input_digit('x'), Err(CalcError::InvalidDigit('x')));
    assert_eq!(state.current_text(), "0.5");
}

#[test]
fn seven_plus_five_equals_twelve() {
    let mut state = typed("7");
    state.input_operator(OperatorKind::Add).expect("op");
    assert_eq!(state.phase(), Phase::AwaitingFreshInput);
    state.input_digit('5').expect("digit");
    assert_eq!(state.phase(), Phase::OperatorPending);

    let commit = state.equals().expect("equals").expect("commit");
    assert_eq!(commit.expression, "7 + 5");
    assert_eq!(commit.result, 12.0);
    assert_eq!(state.current_text(), "12");
    assert_eq!(state.pending_operand(), None);
    assert_eq!(state.pending_operator(), None);
    assert!(state.is_awaiting_fresh_input());

    state.input_digit('3').expect("digit");
    assert_eq!(state.current_text(), "3");
}

#[test]
fn operators_chain_left_to_right() {
    let mut state = typed("2");
    state.input_operator(OperatorKind::Add).expect("op");
    state.input_digit('3').expect("digit");
    state.input_operator(OperatorKind::Multiply).expect("op");
    assert_eq!(state.current_text(), "5");
    assert_eq!(state.preview(), Some((5.0, OperatorKind::Multiply)));

    state.input_digit('4').expect("digit");
    let commit = state.equals().expect("equals").expect("commit");
    assert_eq!(commit.expression, "5 × 4");
    assert_eq!(state.current_text(), "20");
}

#[test]
fn chained_intermediate_is_rounded() {
    let mut state = typed("1");
    state.input_operator(OperatorKind::Divide).expect("op");
    state.input_digit('3').expect("digit");
    state.input_operator(OperatorKind::Multiply).expect("op");
    assert_eq!(state.current_text(), "0.3333333");
    assert_eq!(state.pending_operand(), Some(0.333_333_3));

    state.input_digit('3').expect("digit");
    let commit = state.equals().expect("equals").expect("commit");
    assert_eq!(commit.expression, "0.3333333 × 3");
    assert_eq!(commit.result, 0.999_999_9);
}

#[test]
fn equals_without_pending_operation_is_noop() {
    let mut state = typed("42");
    assert_eq!(state.equals(), Ok(None));
    assert_eq!(state.current_text(), "42");
    assert!(!state.is_awaiting_fresh_input());
}

#[test]
fn divide_by_zero_on_equals_keeps_dividend() {
    let mut state = typed("9");
    state.input_operator(OperatorKind::Divide).expect("op");
    state.input_digit('0').expect("digit");

    assert_eq!(
        state.equals(),
        Err(CalcError::DivisionByZero { dividend: 9.0 })
    );
    assert_eq!(state.current_text(), "9");
    assert_eq!(state.preview(), None);
}

#[test]
fn divide_by_zero_in_chain_keeps_running_value() {
    let mut state = typed("8");
    state.input_operator(OperatorKind::Divide).expect("op");
    state.input_digit('0').expect("digit");

    assert_eq!(
        state.input_operator(OperatorKind::Subtract),
        Err(CalcError::DivisionByZero { dividend: 8.0 })
    );
    assert_eq!(state.current_text(), "8");
    assert_eq!(state.preview(), Some((8.0, OperatorKind::Subtract)));

    state.input_digit('3').expect("digit");
    let commit = state.equals().expect("equals").expect("commit");
    assert_eq!(commit.result, 5.0);
}

#[test]
fn clear_entry_keeps_pending_operation() {
    let mut state = typed("6");
    state.input_operator(OperatorKind::Subtract).expect("op");
    state.input_digit('9').expect("digit");
    state.clear_entry();
    assert_eq!(state.current_text(), "0");
    state.input_digit('2').expect("digit");

    let commit = state.equals().expect("equals").expect("commit");
    assert_eq!(commit.expression, "6 - 2");

    state.input_operator(OperatorKind::Add).expect("op");
    state.clear();
    assert_eq!(state.current_text(), "0");
    assert_eq!(state.preview(), None);
    assert_eq!(state.phase(), Phase::Idle);
}

#[test]
fn backspace_falls_back_to_zero() {
    let mut state = typed("12");
    state.backspace();
    assert_eq!(state.current_text(), "1");
    state.backspace();
    assert_eq!(state.current_text(), "0");
    state.backspace();
    assert_eq!(state.current_text(), "0");

    state.load_value(-4.0);
    state.backspace();
    assert_eq!(state.current_text(), "0");
}

#[test]
fn sqrt_of_sixteen_is_four() {
    let mut state = typed("16");
    let commit = state.apply_function(ScientificFn::Sqrt).expect("sqrt");
    assert_eq!(commit.expression, "√(16)");
    assert_eq!(commit.result, 4.0);
    assert_eq!(state.current_text(), "4");
    assert!(state.is_awaiting_fresh_input());
}

#[test]
fn sqrt_of_negative_is_rejected_without_mutation() {
    let mut state = typed("4");
    state.apply_function(ScientificFn::Negate).expect("negate");
    assert_eq!(state.current_text(), "-4");
    let before = state.clone();

    assert_eq!(
        state.apply_function(ScientificFn::Sqrt),
        Err(CalcError::DomainError {
            function: ScientificFn::Sqrt,
            value: -4.0,
        })
    );
    assert_eq!(state, before);
}

#[test]
fn function_labels_and_unrounded_results() {
    let mut state = typed("3");
    let square = state.apply_function(ScientificFn::Square).expect("square");
    assert_eq!((square.expression.as_str(), square.result), ("3²", 9.0));

    let percent = state.apply_function(ScientificFn::Percent).expect("percent");
    assert_eq!((percent.expression.as_str(), percent.result), ("9%", 0.09));

    let negate = state.apply_function(ScientificFn::Negate).expect("negate");
    assert_eq!((negate.expression.as_str(), negate.result), ("-(0.09)", -0.09));

    let mut state = typed("2");
    let root = state.apply_function(ScientificFn::Sqrt).expect("sqrt");
    assert_eq!(root.result, 2f64.sqrt());
    assert_eq!(state.current_text(), "1.4142135623730951");
}
