//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Strictly sequential: one event is read, routed, and dispatched to the
//! [`Editor`] (store round-trip included) before the next one is read. The
//! loop only redraws after something happened, and otherwise sleeps in
//! `poll` for up to 500ms.

mod component;
pub mod components;
pub mod event;
pub mod keymap;
pub mod theme;
pub mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;
use thiserror::Error;

use crate::Command;
use crate::core::config::ResolvedConfig;
use crate::core::editor::{Editor, Flow};
use crate::core::error::StoreError;
use crate::core::state::Session;
use crate::core::store::{SqliteStore, Store};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// Errors that end a session with a non-zero exit code.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Editor tabs. Only the editor session has more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Inventory,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Home, Tab::Inventory];

    pub fn next(self) -> Self {
        match self {
            Tab::Home => Tab::Inventory,
            Tab::Inventory => Tab::Home,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Inventory => 1,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Inventory => "Inventory",
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub tab: Tab,
}

impl TuiState {
    pub fn new(session: Session) -> Self {
        let tab = match session {
            Session::Editor => Tab::Home,
            _ => Tab::Inventory,
        };
        Self { tab }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape,
            Hide
        );
    }
}

/// Open the store, load the rows, and run one interactive session.
///
/// Store failures here happen before the terminal is touched, so the caller
/// can report them on a clean screen.
pub fn run(config: &ResolvedConfig, command: Command) -> Result<(), RunError> {
    let store = SqliteStore::open(&config.db_path, config.busy_timeout)?;
    let editor = Editor::open(store, command.session())?.with_max_input_len(config.max_input_len);

    let mut terminal = ratatui::try_init()?;
    let result = TerminalModeGuard::new().and_then(|_guard| run_loop(&mut terminal, editor));
    ratatui::restore();
    result.map_err(RunError::from)
}

fn run_loop<S: Store>(terminal: &mut DefaultTerminal, mut editor: Editor<S>) -> std::io::Result<()> {
    let mut tui = TuiState::new(editor.state().session);
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, editor.state(), &tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain pending events before next draw
        let mut next = Some(first_event);
        while let Some(event) = next.take() {
            if let Some(action) = keymap::route(&event, editor.state(), &mut tui) {
                debug!("Dispatching {:?}", action);
                if editor.dispatch(action) == Flow::Quit {
                    info!("Quit requested");
                    return Ok(());
                }
            }
            if !matches!(event, TuiEvent::Resize) {
                next = poll_event_immediate()?;
            }
        }
    }
}
