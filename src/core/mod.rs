//! Pure calculator core: evaluator, state machine, memory, ledger, statistics.

/// Binary evaluation and commit rounding.
pub mod eval;
/// Bounded newest-first history ledger.
pub mod ledger;
/// Calculation state machine.
pub mod machine;
/// Memory register.
pub mod memory;
/// Statistics derived from the ledger.
pub mod stats;
