//! Immediate-evaluation calculation state machine.
//!
//! The machine owns the entry buffer, the pending operand/operator pair and
//! the awaiting-fresh-input flag. It performs no I/O: operations that finish
//! a calculation return a [`Commit`] and leave recording it to the caller.

use crate::{
    core::eval::{self, RESULT_FRACTION_DIGITS},
    error::CalcError,
    format::numeral_text,
    types::{OperatorKind, ScientificFn},
};

/// A finished calculation to be appended to the history ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    /// Expression label.
    pub expression: String,
    /// Result value as recorded.
    pub result: f64,
}

/// Coarse machine phase, derived from the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No pending operator; digits extend the entry.
    Idle,
    /// An operator is pending and the second operand is being typed.
    OperatorPending,
    /// The next digit starts a new number.
    AwaitingFreshInput,
}

/// Calculator entry buffer plus pending binary operation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    current_text: String,
    pending_operand: Option<f64>,
    pending_operator: Option<OperatorKind>,
    awaiting_fresh_input: bool,
    fraction_digits: u32,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Fresh state showing `0`.
    pub fn new() -> Self {
        Self::with_fraction_digits(RESULT_FRACTION_DIGITS)
    }

    /// Fresh state rounding committed results to `fraction_digits`, capped
    /// at [`eval::MAX_FRACTION_DIGITS`].
    pub fn with_fraction_digits(fraction_digits: u32) -> Self {
        let fraction_digits = fraction_digits.min(eval::MAX_FRACTION_DIGITS);
        Self {
            current_text: "0".to_string(),
            pending_operand: None,
            pending_operator: None,
            awaiting_fresh_input: false,
            fraction_digits,
        }
    }

    /// Entry buffer text.
    pub fn current_text(&self) -> &str {
        &self.current_text
    }

    /// Entry buffer parsed as a number.
    pub fn current_value(&self) -> f64 {
        self.current_text.parse().unwrap_or(0.0)
    }

    /// First operand of the in-progress operation.
    pub fn pending_operand(&self) -> Option<f64> {
        self.pending_operand
    }

    /// Operator of the in-progress operation.
    pub fn pending_operator(&self) -> Option<OperatorKind> {
        self.pending_operator
    }

    /// True when the next digit replaces the entry.
    pub fn is_awaiting_fresh_input(&self) -> bool {
        self.awaiting_fresh_input
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        if self.awaiting_fresh_input {
            Phase::AwaitingFreshInput
        } else if self.pending_operator.is_some() {
            Phase::OperatorPending
        } else {
            Phase::Idle
        }
    }

    /// Pending operand and operator when both are set.
    pub fn preview(&self) -> Option<(f64, OperatorKind)> {
        self.pending_operand.zip(self.pending_operator)
    }

    /// Handles a digit or decimal point.
    pub fn input_digit(&mut self, digit: char) -> Result<(), CalcError> {
        if !digit.is_ascii_digit() && digit != '.' {
            return Err(CalcError::InvalidDigit(digit));
        }

        if self.awaiting_fresh_input {
            self.current_text = start_text(digit);
            self.awaiting_fresh_input = false;
        } else if digit == '.' && self.current_text.contains('.') {
            return Ok(());
        } else if self.current_text == "0" {
            self.current_text = start_text(digit);
        } else {
            self.current_text.push(digit);
        }
        Ok(())
    }

    /// Handles a binary operator, evaluating any pending operation first.
    ///
    /// On division by zero the running value stays at the pending operand,
    /// `op` is still recorded, and the fault is returned.
    pub fn input_operator(&mut self, op: OperatorKind) -> Result<(), CalcError> {
        let value = self.current_value();
        let mut fault = None;

        match (self.pending_operand, self.pending_operator) {
            (None, _) => self.pending_operand = Some(value),
            (Some(a), Some(prev)) => {
                let next = match eval::evaluate(a, value, prev) {
                    Ok(raw) => eval::round_to(raw, self.fraction_digits),
                    Err(err) => {
                        fault = Some(err);
                        a
                    }
                };
                self.current_text = numeral_text(next);
                self.pending_operand = Some(next);
            }
            (Some(_), None) => {}
        }

        self.pending_operator = Some(op);
        self.awaiting_fresh_input = true;
        fault.map_or(Ok(()), Err)
    }

    /// Evaluates the pending operation.
    ///
    /// Returns `Ok(None)` when no operation is pending. On division by zero
    /// the entry shows the dividend, the operation is dropped, and nothing is
    /// committed.
    pub fn equals(&mut self) -> Result<Option<Commit>, CalcError> {
        let Some((a, op)) = self.preview() else {
            return Ok(None);
        };
        let value = self.current_value();

        let outcome = eval::evaluate(a, value, op);
        let shown = match &outcome {
            Ok(raw) => eval::round_to(*raw, self.fraction_digits),
            Err(_) => a,
        };

        self.current_text = numeral_text(shown);
        self.pending_operand = None;
        self.pending_operator = None;
        self.awaiting_fresh_input = true;

        outcome.map(|_| {
            Some(Commit {
                expression: format!(
                    "{} {} {}",
                    numeral_text(a),
                    op.symbol(),
                    numeral_text(value)
                ),
                result: shown,
            })
        })
    }

    /// Resets entry and pending operation.
    pub fn clear(&mut self) {
        self.current_text = "0".to_string();
        self.pending_operand = None;
        self.pending_operator = None;
        self.awaiting_fresh_input = false;
    }

    /// Resets only the entry.
    pub fn clear_entry(&mut self) {
        self.current_text = "0".to_string();
    }

    /// Drops the last entry character.
    pub fn backspace(&mut self) {
        self.current_text.pop();
        if self.current_text.is_empty() || self.current_text.parse::<f64>().is_err() {
            self.current_text = "0".to_string();
        }
    }

    /// Applies a single-operand function to the current value.
    ///
    /// The result is not rounded. A negative square root is rejected without
    /// touching the state.
    pub fn apply_function(&mut self, function: ScientificFn) -> Result<Commit, CalcError> {
        let value = self.current_value();
        let text = numeral_text(value);

        let (expression, result) = match function {
            ScientificFn::Sqrt => {
                if value < 0.0 {
                    return Err(CalcError::DomainError { function, value });
                }
                (format!("√({text})"), value.sqrt())
            }
            ScientificFn::Square => (format!("{text}²"), value * value),
            ScientificFn::Percent => (format!("{text}%"), value / 100.0),
            ScientificFn::Negate => (format!("-({text})"), -value),
        };

        self.load_value(result);
        Ok(Commit { expression, result })
    }

    /// Replaces the entry with `value` and waits for fresh input.
    pub fn load_value(&mut self, value: f64) {
        self.current_text = numeral_text(value);
        self.awaiting_fresh_input = true;
    }
}

fn start_text(digit: char) -> String {
    if digit == '.' {
        "0.".to_string()
    } else {
        digit.to_string()
    }
}
