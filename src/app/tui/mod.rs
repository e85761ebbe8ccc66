pub(super) mod actions;
mod render;
mod session;

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::widgets::TableState;

use super::SessionPlayer;

use self::actions::{
    Status, drain_history_changes, refresh_selection, replay_selected, submit_input,
};
use self::render::{ViewState, draw_tui};
use self::session::TuiSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Input,
    Recent,
}

impl Focus {
    pub(crate) fn toggle(self) -> Self {
        match self {
            Self::Input => Self::Recent,
            Self::Recent => Self::Input,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingPlay {
    Input,
    Selected,
}

pub(crate) fn run_tui(mut player: SessionPlayer) -> Result<()> {
    let history_rx = player.history_mut().subscribe();

    let mut session = TuiSession::enter()?;

    let mut input = String::new();
    let mut focus = Focus::Input;
    let mut table_state = TableState::default();
    let mut pending_play = None::<PendingPlay>;
    let mut status = Status::info("Paste a YouTube URL or video id and press Enter.");

    loop {
        if drain_history_changes(&history_rx) {
            refresh_selection(player.history().len(), &mut table_state, Some(0));
        }

        session.terminal().draw(|frame| {
            draw_tui(
                frame,
                &ViewState {
                    history: player.history(),
                    input: &input,
                    focus,
                    status: &status,
                    loading: pending_play.is_some() || player.is_busy(),
                },
                &mut table_state,
            )
        })?;

        // The frame above already shows the loading state; run the play now.
        if let Some(pending) = pending_play.take() {
            status = match pending {
                PendingPlay::Input => submit_input(&mut player, &mut input),
                PendingPlay::Selected => replay_selected(&mut player, &table_state),
            };
            continue;
        }

        if !event::poll(Duration::from_millis(200))? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            break;
        }

        match (focus, key.code) {
            (_, KeyCode::Tab) => focus = focus.toggle(),
            (Focus::Input, KeyCode::Enter) => {
                status = Status::info("Loading video...");
                pending_play = Some(PendingPlay::Input);
            }
            (Focus::Input, KeyCode::Char(c)) => {
                input.push(c);
                if status.is_error() {
                    status = Status::info("Ready.");
                }
            }
            (Focus::Input, KeyCode::Backspace) => {
                input.pop();
                if status.is_error() {
                    status = Status::info("Ready.");
                }
            }
            (Focus::Recent, KeyCode::Char('q')) => break,
            (Focus::Recent, KeyCode::Up) => {
                if let Some(selected) = table_state.selected() {
                    table_state.select(Some(selected.saturating_sub(1)));
                }
            }
            (Focus::Recent, KeyCode::Down) => {
                let len = player.history().len();
                if let Some(selected) = table_state.selected()
                    && len > 0
                {
                    table_state.select(Some((selected + 1).min(len - 1)));
                }
            }
            (Focus::Recent, KeyCode::Enter) => {
                if table_state.selected().is_none() {
                    status = Status::error("No recent video selected.");
                    continue;
                }
                status = Status::info("Loading video...");
                pending_play = Some(PendingPlay::Selected);
            }
            _ => {}
        }
    }

    session.close()
}
