//! Immediate-evaluation calculator with memory, a persisted history ledger,
//! running statistics and a stored theme preference.
//!
//! # Examples
//!
//! Driving the pure state machine with [`core::machine::CalculatorState`]:
//! ```
//! use calclog::{core::machine::CalculatorState, types::OperatorKind};
//!
//! let mut state = CalculatorState::new();
//! state.input_digit('7').expect("digit");
//! state.input_operator(OperatorKind::Add).expect("operator");
//! state.input_digit('5').expect("digit");
//! let commit = state.equals().expect("equals").expect("commit");
//! assert_eq!(commit.expression, "7 + 5");
//! assert_eq!(state.current_text(), "12");
//! ```
//!
//! A full session over SQLite storage:
//! ```no_run
//! use calclog::{
//!     config::CalcConfig,
//!     input::Input,
//!     persist::sqlite::SqliteStorage,
//!     session::CalculatorSession,
//!     types::{Action, ScientificFn},
//! };
//!
//! let storage = SqliteStorage::open("calclog.db").expect("open sqlite");
//! let mut session = CalculatorSession::open(Box::new(storage), CalcConfig::default());
//! session.dispatch(Input::Digit('9')).expect("digit");
//! session.dispatch(Input::Function(ScientificFn::Sqrt)).expect("sqrt");
//! session.dispatch(Input::Action(Action::Clear)).expect("clear");
//! println!("{} entries", session.ledger().len());
//! ```

/// Session configuration.
pub mod config;
/// Pure calculator core.
pub mod core;
/// History entry record.
pub mod entry;
/// Calculation faults.
pub mod error;
/// CSV export.
pub mod export;
/// Numeral text and display formatting.
pub mod format;
/// Input events and keyboard mapping.
pub mod input;
/// Storage abstraction, in-memory and SQLite implementations.
pub mod persist;
/// Per-session calculator object.
pub mod session;
/// Shared primitive types and enums.
pub mod types;
