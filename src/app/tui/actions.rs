use std::fmt;
use std::sync::mpsc;

use ratatui::widgets::TableState;
use tracing::debug;

use crate::app::SessionPlayer;
use crate::app::recent::HistoryChanged;

/// Message in the status panel. Errors stay until the user edits the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Status {
    Info(String),
    Error(String),
}

impl Status {
    pub(crate) fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub(crate) fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    pub(crate) fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info(msg) => write!(f, "INFO: {msg}"),
            Self::Error(msg) => write!(f, "ERROR: {msg}"),
        }
    }
}

/// Returns true when at least one change notification was pending.
pub(crate) fn drain_history_changes(rx: &mpsc::Receiver<HistoryChanged>) -> bool {
    let mut changed = false;
    while let Ok(event) = rx.try_recv() {
        debug!(revision = event.revision, "recent history changed");
        changed = true;
    }
    changed
}

pub(crate) fn refresh_selection(
    len: usize,
    table_state: &mut TableState,
    preferred_idx: Option<usize>,
) {
    if len == 0 {
        table_state.select(None);
        return;
    }

    if let Some(idx) = preferred_idx
        && idx < len
    {
        table_state.select(Some(idx));
        return;
    }

    match table_state.selected() {
        Some(selected) => table_state.select(Some(selected.min(len - 1))),
        None => table_state.select(Some(0)),
    }
}

/// Plays whatever is in the input box. The box is cleared only on success.
pub(crate) fn submit_input(player: &mut SessionPlayer, input: &mut String) -> Status {
    match player.play(input.as_str()) {
        Ok(outcome) => {
            input.clear();
            Status::info(format!("Playing: {}", outcome.title))
        }
        Err(err) => Status::error(err.to_string()),
    }
}

pub(crate) fn replay_selected(player: &mut SessionPlayer, table_state: &TableState) -> Status {
    let Some(selected) = table_state.selected() else {
        return Status::error("No recent video selected.");
    };
    let Some(entry) = player.history().list().get(selected) else {
        return Status::error("Invalid selection.");
    };
    let id = entry.id.to_string();

    match player.replay_recent(&id) {
        Ok(outcome) => Status::info(format!("Replaying: {}", outcome.title)),
        Err(err) => Status::error(err.to_string()),
    }
}
