use chrono::{DateTime, Utc};

use crate::{entry::HistoryEntry, types::EntryId};

/// Default number of entries kept.
pub const DEFAULT_CAPACITY: usize = 100;

/// Bounded, newest-first calculation history.
///
/// The ledger is the only writer of [`HistoryEntry`] values. Overflow evicts
/// the oldest entry.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLedger {
    entries: Vec<HistoryEntry>,
    capacity: usize,
    last_id: u64,
}

impl Default for HistoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Empty ledger holding at most `capacity` entries (minimum one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
            last_id: 0,
        }
    }

    /// Rebuilds a ledger from stored entries in any order.
    pub fn from_entries(mut entries: Vec<HistoryEntry>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        entries.sort_by(|a, b| b.id.cmp(&a.id));
        entries.truncate(capacity);
        let last_id = entries.first().map(|e| e.id.0).unwrap_or(0);

        Self {
            entries,
            capacity,
            last_id,
        }
    }

    pub fn append(&mut self, expression: impl Into<String>, result: f64) -> &HistoryEntry {
        self.append_at(expression, result, Utc::now())
    }

    /// Appends an entry stamped with `timestamp`.
    ///
    /// Ids follow the millisecond clock but never repeat or go backwards.
    pub fn append_at(
        &mut self,
        expression: impl Into<String>,
        result: f64,
        timestamp: DateTime<Utc>,
    ) -> &HistoryEntry {
        let clock = u64::try_from(timestamp.timestamp_millis()).unwrap_or(0);
        let id = clock.max(self.last_id.saturating_add(1));
        self.last_id = id;

        self.entries.insert(
            0,
            HistoryEntry {
                id: EntryId(id),
                expression: expression.into(),
                result,
                timestamp,
            },
        );
        self.entries.truncate(self.capacity);
        &self.entries[0]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn results(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.result)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
