use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::warn;

pub(super) type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the drawing terminal for the lifetime of the TUI. The shell gets its
/// cooked mode, main screen and cursor back when this is closed or dropped.
pub(super) struct TuiSession {
    terminal: TuiTerminal,
    restored: bool,
}

impl TuiSession {
    pub(super) fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let terminal = execute!(io::stdout(), EnterAlternateScreen)
            .context("failed to enter alternate screen")
            .and_then(|()| {
                Terminal::new(CrosstermBackend::new(io::stdout()))
                    .context("failed to initialize terminal backend")
            });
        let terminal = match terminal {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(err);
            }
        };
        let mut session = Self {
            terminal,
            restored: false,
        };
        session.terminal.clear().context("failed to clear terminal")?;
        Ok(session)
    }

    pub(super) fn terminal(&mut self) -> &mut TuiTerminal {
        &mut self.terminal
    }

    /// Restores the shell and reports the first step that failed.
    pub(super) fn close(mut self) -> Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        // Every step runs even if an earlier one fails.
        let raw = disable_raw_mode().context("failed to disable raw mode");
        let screen = execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show)
            .context("failed to leave alternate screen");
        raw.and(screen)
    }
}

impl Drop for TuiSession {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(error = ?err, "terminal restore failed");
        }
    }
}
