pub mod memory;
pub mod sqlite;

use thiserror::Error;

use crate::{entry::HistoryEntry, types::Theme};

/// Default key holding the serialized history array.
pub const HISTORY_KEY: &str = "calculatorHistory";
/// Default key holding the theme preference string.
pub const THEME_KEY: &str = "calculatorTheme";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("{0}")]
    Message(String),
}

pub type PersistResult<T> = Result<T, PersistError>;

/// Durable string key-value namespace.
///
/// Each `save` replaces the whole value stored under `key`.
pub trait Storage: Send {
    fn load(&self, key: &str) -> PersistResult<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> PersistResult<()>;
}

/// Reads the history array stored under `key`; absent means empty.
pub fn read_history(storage: &dyn Storage, key: &str) -> PersistResult<Vec<HistoryEntry>> {
    match storage.load(key)? {
        Some(payload) => Ok(serde_json::from_str(&payload)?),
        None => Ok(Vec::new()),
    }
}

/// Overwrites the history array stored under `key`.
pub fn write_history(
    storage: &mut dyn Storage,
    key: &str,
    entries: &[HistoryEntry],
) -> PersistResult<()> {
    let payload = serde_json::to_string(entries)?;
    storage.save(key, &payload)
}

/// Reads the theme stored under `key`; absent means `None`.
pub fn read_theme(storage: &dyn Storage, key: &str) -> PersistResult<Option<Theme>> {
    let Some(raw) = storage.load(key)? else {
        return Ok(None);
    };
    Theme::parse(&raw)
        .map(Some)
        .ok_or_else(|| PersistError::Message(format!("unknown theme {raw:?}")))
}

pub fn write_theme(storage: &mut dyn Storage, key: &str, theme: Theme) -> PersistResult<()> {
    storage.save(key, theme.as_str())
}
