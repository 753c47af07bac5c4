use std::fmt::Display;

use chrono::TimeZone;
use tracing::{debug, info, warn};

use crate::{
    config::CalcConfig,
    core::{
        ledger::HistoryLedger,
        machine::{CalculatorState, Commit},
        memory::MemoryCell,
        stats::Statistics,
    },
    error::CalcError,
    export::{self, ExportError},
    format::{format_number, format_text, format_time},
    input::Input,
    persist::{self, Storage, memory::MemoryStorage},
    types::{Action, EntryId, MemoryOp, Theme},
};

use super::view::{HistoryRow, SessionView, StatsView};

/// One calculator session: state machine, memory, ledger and theme over an
/// injected [`Storage`].
///
/// Inputs are handled one at a time through `&mut self`. Every ledger
/// mutation and theme change is written through to storage; write failures
/// are logged and otherwise ignored.
pub struct CalculatorSession {
    state: CalculatorState,
    memory: MemoryCell,
    ledger: HistoryLedger,
    theme: Theme,
    storage: Box<dyn Storage>,
    config: CalcConfig,
}

impl CalculatorSession {
    /// Opens a session, loading history and theme from `storage`.
    ///
    /// Unreadable or corrupt history yields an empty ledger; an unreadable
    /// theme yields [`Theme::Light`].
    pub fn open(storage: Box<dyn Storage>, config: CalcConfig) -> Self {
        let ledger = match persist::read_history(storage.as_ref(), &config.history_key) {
            Ok(entries) => HistoryLedger::from_entries(entries, config.history_capacity),
            Err(err) => {
                warn!(error = %err, key = %config.history_key, "stored history unreadable, starting empty");
                HistoryLedger::with_capacity(config.history_capacity)
            }
        };

        let theme = match persist::read_theme(storage.as_ref(), &config.theme_key) {
            Ok(theme) => theme.unwrap_or_default(),
            Err(err) => {
                warn!(error = %err, key = %config.theme_key, "stored theme unreadable, using default");
                Theme::default()
            }
        };

        info!(entries = ledger.len(), theme = theme.as_str(), "calculator session opened");

        Self {
            state: CalculatorState::with_fraction_digits(config.result_fraction_digits),
            memory: MemoryCell::new(),
            ledger,
            theme,
            storage,
            config,
        }
    }

    /// Session over fresh in-memory storage with default config.
    pub fn in_memory() -> Self {
        Self::open(Box::new(MemoryStorage::new()), CalcConfig::default())
    }

    /// Handles one input to completion.
    ///
    /// Returns the id of the history entry appended by this input, if any.
    /// Errors are transient notices; see [`CalcError`] for the state each
    /// one leaves behind.
    pub fn dispatch(&mut self, input: Input) -> Result<Option<EntryId>, CalcError> {
        let out = match input {
            Input::Digit(d) => self.state.input_digit(d).map(|()| None),
            Input::Operator(op) => self.state.input_operator(op).map(|()| None),
            Input::Action(Action::Equals) => self
                .state
                .equals()
                .map(|commit| commit.map(|c| self.record(c))),
            Input::Action(Action::Clear) => {
                self.state.clear();
                Ok(None)
            }
            Input::Action(Action::ClearEntry) => {
                self.state.clear_entry();
                Ok(None)
            }
            Input::Action(Action::Backspace) => {
                self.state.backspace();
                Ok(None)
            }
            Input::Memory(op) => {
                self.apply_memory(op);
                Ok(None)
            }
            Input::Function(function) => self
                .state
                .apply_function(function)
                .map(|c| Some(self.record(c))),
        };

        if let Err(err) = &out {
            warn!(?input, %err, "input rejected");
        }
        out
    }

    /// Dispatches each input in order, stopping at the first error.
    pub fn dispatch_all(
        &mut self,
        inputs: impl IntoIterator<Item = Input>,
    ) -> Result<Vec<EntryId>, CalcError> {
        let mut committed = Vec::new();
        for input in inputs {
            if let Some(id) = self.dispatch(input)? {
                committed.push(id);
            }
        }
        Ok(committed)
    }

    /// Empties the ledger and overwrites the stored history.
    pub fn clear_history(&mut self) {
        self.ledger.clear();
        debug!("history cleared");
        self.persist_history();
    }

    /// Loads a past result into the entry buffer.
    pub fn reuse_result(&mut self, id: EntryId) -> Result<(), CalcError> {
        let result = self
            .ledger
            .get(id)
            .map(|e| e.result)
            .ok_or(CalcError::UnknownEntry(id))?;
        self.state.load_value(result);
        Ok(())
    }

    /// Switches between light and dark and stores the preference.
    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        debug!(theme = theme.as_str(), "theme changed");
        if let Err(err) = persist::write_theme(self.storage.as_mut(), &self.config.theme_key, theme)
        {
            warn!(error = %err, "failed to store theme");
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn memory(&self) -> f64 {
        self.memory.value()
    }

    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::from_ledger(&self.ledger)
    }

    /// CSV export of the ledger with times rendered in `tz`.
    pub fn export_csv<Tz>(&self, tz: &Tz) -> Result<Vec<u8>, ExportError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        export::export_csv(self.ledger.entries(), tz)
    }

    /// Render snapshot with times in `tz`.
    pub fn view<Tz>(&self, tz: &Tz) -> SessionView
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let preview = self
            .state
            .preview()
            .map(|(a, op)| format!("{} {}", format_number(a), op.symbol()))
            .unwrap_or_default();

        let history = self
            .ledger
            .entries()
            .iter()
            .map(|e| HistoryRow {
                id: e.id,
                expression: e.expression.clone(),
                result: format_number(e.result),
                time: format_time(&e.timestamp, tz),
            })
            .collect();

        let (count, max, min, mean) = self.statistics().display();

        SessionView {
            display: format_text(self.state.current_text()),
            preview,
            memory: format!("M: {}", format_number(self.memory.value())),
            history,
            stats: StatsView {
                count,
                max,
                min,
                mean,
            },
            theme: self.theme,
        }
    }

    fn apply_memory(&mut self, op: MemoryOp) {
        match op {
            MemoryOp::Clear => self.memory.clear(),
            MemoryOp::Recall => self.state.load_value(self.memory.value()),
            MemoryOp::Add => self.memory.add(self.state.current_value()),
            MemoryOp::Subtract => self.memory.subtract(self.state.current_value()),
        }
        debug!(?op, memory = self.memory.value(), "memory updated");
    }

    fn record(&mut self, commit: Commit) -> EntryId {
        let entry = self.ledger.append(commit.expression, commit.result);
        let id = entry.id;
        debug!(%id, expression = %entry.expression, result = entry.result, "calculation committed");
        self.persist_history();
        id
    }

    fn persist_history(&mut self) {
        if let Err(err) = persist::write_history(
            self.storage.as_mut(),
            &self.config.history_key,
            self.ledger.entries(),
        ) {
            warn!(error = %err, "failed to store history");
        }
    }
}
