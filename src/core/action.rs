//! # Actions
//!
//! Everything that can happen in Chef becomes an `Action`.
//! User presses Enter in the input? That's `Action::Submit`.
//! The store answers a create? That's `Action::Created(result)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O to perform next.
//! No store calls happen here. [`Editor`](crate::core::editor::Editor)
//! runs the effect and feeds the outcome back in as another action.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, warn};

use crate::core::error::StoreError;
use crate::core::record::{Record, lookup_name, normalize_name};
use crate::core::state::{EditorState, Focus, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleFocus,
    InputChar(char),
    Paste(String),
    Backspace,
    Submit,
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,
    DeleteSelected,
    ShowSelected,
    /// Outcome of a store create.
    Created(Result<Record, StoreError>),
    /// Outcome of a store delete for `name`.
    Deleted {
        name: String,
        result: Result<(), StoreError>,
    },
}

/// I/O requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Create a record with this (already normalized) name.
    Create(String),
    /// Delete the record with this (already normalized) name.
    Delete(String),
}

pub fn update(state: &mut EditorState, action: Action) -> Effect {
    if state.exited {
        return Effect::Quit;
    }

    match action {
        Action::Quit => {
            state.exited = true;
            Effect::Quit
        }
        Action::ToggleFocus => {
            if state.session.can_toggle_focus() {
                state.focus = state.focus.toggled();
                debug!("Focus moved to {:?}", state.focus);
            }
            Effect::None
        }
        Action::InputChar(c) => {
            if state.focus == Focus::Input {
                state.push_input(c);
            }
            Effect::None
        }
        Action::Paste(text) => {
            if state.focus == Focus::Input {
                for c in text.chars().filter(|c| !matches!(c, '\n' | '\r')) {
                    if !state.push_input(c) {
                        break;
                    }
                }
            }
            Effect::None
        }
        Action::Backspace => {
            if state.focus == Focus::Input {
                state.input.pop();
            }
            Effect::None
        }
        Action::Submit => {
            if state.focus != Focus::Input {
                return Effect::None;
            }
            state.last_error = None;
            let normalized = if state.session == Session::Remove {
                lookup_name(&state.input).map(Effect::Delete)
            } else {
                normalize_name(&state.input).map(Effect::Create)
            };
            match normalized {
                Ok(effect) => effect,
                Err(e) => {
                    warn!("Rejected input {:?}: {}", state.input, e);
                    state.last_error = Some(e);
                    Effect::None
                }
            }
        }
        Action::SelectNext => {
            if state.focus == Focus::Table && !state.rows.is_empty() {
                let next = state.selected.map_or(0, |i| i + 1);
                state.selected = Some(next.min(state.rows.len() - 1));
            }
            Effect::None
        }
        Action::SelectPrev => {
            if state.focus == Focus::Table && !state.rows.is_empty() {
                state.selected = Some(state.selected.map_or(0, |i| i.saturating_sub(1)));
            }
            Effect::None
        }
        Action::SelectFirst => {
            if state.focus == Focus::Table && !state.rows.is_empty() {
                state.selected = Some(0);
            }
            Effect::None
        }
        Action::SelectLast => {
            if state.focus == Focus::Table && !state.rows.is_empty() {
                state.selected = Some(state.rows.len() - 1);
            }
            Effect::None
        }
        Action::DeleteSelected => {
            if state.focus != Focus::Table {
                return Effect::None;
            }
            match state.selected_record() {
                Some(record) => {
                    let name = record.name.clone();
                    state.last_error = None;
                    Effect::Delete(name)
                }
                None => Effect::None,
            }
        }
        Action::ShowSelected => {
            if state.focus == Focus::Table {
                let message = state
                    .selected_record()
                    .map(|record| format!("{} was selected.", record.name));
                if let Some(message) = message {
                    state.status_message = message;
                }
            }
            Effect::None
        }
        Action::Created(Ok(record)) => {
            state.status_message = format!("Added {}", record.name);
            state.rows.push(record);
            // Jump to the new row
            state.selected = Some(state.rows.len() - 1);
            state.input.clear();
            state.last_error = None;
            Effect::None
        }
        Action::Created(Err(e)) => {
            warn!("Create failed: {}", e);
            state.last_error = Some(e);
            Effect::None
        }
        Action::Deleted { name, result: Ok(()) } => {
            // Rows are ordered by id, so this is the oldest duplicate, same as the store
            state.status_message = match state.rows.iter().position(|r| r.name == name) {
                Some(pos) => format!("Removed {} (id {})", name, state.rows.remove(pos).id),
                None => format!("Removed {}", name),
            };
            state.clamp_selection();
            if state.focus == Focus::Input {
                state.input.clear();
            }
            state.last_error = None;
            Effect::None
        }
        Action::Deleted { name, result: Err(e) } => {
            warn!("Delete of {:?} failed: {}", name, e);
            state.last_error = Some(e);
            Effect::None
        }
    }
}
