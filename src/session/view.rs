use crate::types::{EntryId, Theme};

/// One rendered history row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub id: EntryId,
    pub expression: String,
    /// Display-formatted result.
    pub result: String,
    /// `HH:MM` commit time.
    pub time: String,
}

/// Rendered statistics; max/min/mean read `-` without data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub count: String,
    pub max: String,
    pub min: String,
    pub mean: String,
}

/// Everything a presentation adapter needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    /// Main display text.
    pub display: String,
    /// Pending operation, e.g. `12 +`; empty when none.
    pub preview: String,
    /// Memory cell text, e.g. `M: 3`.
    pub memory: String,
    /// History rows, newest first.
    pub history: Vec<HistoryRow>,
    pub stats: StatsView,
    pub theme: Theme,
}
