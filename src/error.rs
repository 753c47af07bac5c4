//! User-visible calculation faults.

use thiserror::Error;

use crate::types::{EntryId, ScientificFn};

/// Transient, non-blocking calculation faults.
///
/// None of these halt the state machine; the adapter shows them as a notice.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Division by zero; the running value degrades to the dividend.
    #[error("cannot divide {dividend} by zero")]
    DivisionByZero {
        /// Value kept as the running result.
        dividend: f64,
    },
    /// Function applied outside its domain; no state was changed.
    #[error("{} is undefined for {value}", .function.name())]
    DomainError {
        /// Function that was rejected.
        function: ScientificFn,
        /// Offending operand.
        value: f64,
    },
    /// Digit input that is neither `0-9` nor `.`.
    #[error("invalid digit input {0:?}")]
    InvalidDigit(char),
    /// History reuse of an entry the ledger no longer holds.
    #[error("no history entry with id {0}")]
    UnknownEntry(EntryId),
}
