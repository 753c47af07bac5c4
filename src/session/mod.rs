//! Per-session calculator object and its render snapshot.

/// Session object wiring the core to injected storage.
pub mod handle;
/// Render snapshot types.
pub mod view;

pub use handle::CalculatorSession;
pub use view::{HistoryRow, SessionView, StatsView};
