//! Input events forwarded by a presentation adapter.

use crate::types::{Action, MemoryOp, OperatorKind, ScientificFn};

/// One discrete calculator input, handled to completion before the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A digit `0-9` or the decimal point.
    Digit(char),
    /// A binary operator.
    Operator(OperatorKind),
    /// An editing or commit action.
    Action(Action),
    /// A memory register operation.
    Memory(MemoryOp),
    /// A single-operand function.
    Function(ScientificFn),
}

impl Input {
    /// Maps a keyboard key name to an input.
    ///
    /// Only the keys a physical keyboard offers are mapped: digits, `.`,
    /// `+ - * /`, `Enter`/`=`, `Escape`, `Backspace` and `Delete`.
    pub fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() || c == '.' {
                return Some(Self::Digit(c));
            }
            if let Some(op) = OperatorKind::from_key(c) {
                return Some(Self::Operator(op));
            }
        }

        match key {
            "Enter" | "=" => Some(Self::Action(Action::Equals)),
            "Escape" => Some(Self::Action(Action::Clear)),
            "Backspace" => Some(Self::Action(Action::Backspace)),
            "Delete" => Some(Self::Action(Action::ClearEntry)),
            _ => None,
        }
    }
}
