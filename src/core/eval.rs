//! Stateless binary evaluation and commit rounding.

use crate::{error::CalcError, types::OperatorKind};

/// Fraction digits kept on every committed chain/equals result.
pub const RESULT_FRACTION_DIGITS: u32 = 7;
/// Upper bound on rounding digits.
pub const MAX_FRACTION_DIGITS: u32 = 17;

/// Evaluates `a op b`.
///
/// Dividing by zero yields [`CalcError::DivisionByZero`] carrying `a`, which
/// callers keep as the running value. Overflow to infinity is not a fault.
pub fn evaluate(a: f64, b: f64, op: OperatorKind) -> Result<f64, CalcError> {
    match op {
        OperatorKind::Add => Ok(a + b),
        OperatorKind::Subtract => Ok(a - b),
        OperatorKind::Multiply => Ok(a * b),
        OperatorKind::Divide if b == 0.0 => Err(CalcError::DivisionByZero { dividend: a }),
        OperatorKind::Divide => Ok(a / b),
    }
}

/// Rounds `value` to `digits` fraction digits by decimal formatting.
///
/// Non-finite values pass through unchanged. `digits` is capped at
/// [`MAX_FRACTION_DIGITS`].
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let digits = digits.min(MAX_FRACTION_DIGITS) as usize;
    format!("{:.*}", digits, value)
        .parse()
        .unwrap_or(value)
}

/// Rounds a committed result to [`RESULT_FRACTION_DIGITS`].
pub fn round_result(value: f64) -> f64 {
    round_to(value, RESULT_FRACTION_DIGITS)
}
