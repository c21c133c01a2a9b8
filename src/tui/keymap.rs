//! Key bindings: turns a `TuiEvent` into a core `Action`.
//!
//! Routing depends on the session, the focused view and the active tab.
//! Tab switching is presentation-only and is applied to `TuiState` here
//! instead of producing an action.

use crate::core::action::Action;
use crate::core::state::{EditorState, Focus, Session};
use crate::tui::event::TuiEvent;
use crate::tui::{Tab, TuiState};

pub fn route(event: &TuiEvent, state: &EditorState, tui: &mut TuiState) -> Option<Action> {
    match event {
        // Quit works everywhere
        TuiEvent::ForceQuit | TuiEvent::Escape => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        TuiEvent::NextTab => {
            if state.session == Session::Editor {
                tui.tab = tui.tab.next();
            }
            return None;
        }
        _ => {}
    }

    if tui.tab == Tab::Home {
        return match event {
            TuiEvent::Submit => {
                tui.tab = Tab::Inventory;
                None
            }
            TuiEvent::InputChar('q') => Some(Action::Quit),
            _ => None,
        };
    }

    if matches!(event, TuiEvent::FocusNext) {
        return Some(Action::ToggleFocus);
    }

    match state.focus {
        Focus::Input => match event {
            TuiEvent::InputChar(c) => Some(Action::InputChar(*c)),
            TuiEvent::Paste(text) => Some(Action::Paste(text.clone())),
            TuiEvent::Backspace => Some(Action::Backspace),
            TuiEvent::Submit => Some(Action::Submit),
            _ => None,
        },
        Focus::Table => match event {
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => Some(Action::SelectPrev),
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => Some(Action::SelectNext),
            TuiEvent::Home | TuiEvent::InputChar('g') => Some(Action::SelectFirst),
            TuiEvent::End | TuiEvent::InputChar('G') => Some(Action::SelectLast),
            TuiEvent::Delete | TuiEvent::InputChar('d') => Some(Action::DeleteSelected),
            TuiEvent::Submit => Some(Action::ShowSelected),
            TuiEvent::InputChar('q') => Some(Action::Quit),
            _ => None,
        },
    }
}
