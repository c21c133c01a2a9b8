//! # Editor State
//!
//! Core business state for one editing session. This module contains domain
//! logic only, no TUI-specific types. Presentation state (active tab) lives in
//! the `tui` module.
//!
//! ```text
//! EditorState
//! ├── session: Session              // which variant was launched
//! ├── focus: Focus                  // table or input
//! ├── rows: Vec<Record>             // local cache of the store
//! ├── selected: Option<usize>       // highlighted table row
//! ├── input: String                 // in-progress item name
//! ├── max_input_len: usize          // input bound, in characters
//! ├── last_error: Option<StoreError>// shown on the next frame
//! ├── status_message: String        // status line text
//! └── exited: bool                  // terminal state, never left
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::error::StoreError;
use crate::core::record::{MAX_NAME_LEN, Record};

/// Which session variant is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    /// Table and input side by side, Tab toggles between them.
    Editor,
    /// Input only; Enter creates an item.
    Add,
    /// Table only.
    List,
    /// Input only; Enter deletes the item with the typed name.
    Remove,
}

impl Session {
    pub fn initial_focus(self) -> Focus {
        match self {
            Session::Editor | Session::List => Focus::Table,
            Session::Add | Session::Remove => Focus::Input,
        }
    }

    /// Only the editor has two views to move between.
    pub fn can_toggle_focus(self) -> bool {
        matches!(self, Session::Editor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Table,
    Input,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Table => Focus::Input,
            Focus::Input => Focus::Table,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditorState {
    pub session: Session,
    pub focus: Focus,
    pub rows: Vec<Record>,
    pub selected: Option<usize>,
    pub input: String,
    pub max_input_len: usize,
    pub last_error: Option<StoreError>,
    pub status_message: String,
    pub exited: bool,
}

impl EditorState {
    pub fn new(session: Session, rows: Vec<Record>) -> Self {
        let selected = if rows.is_empty() { None } else { Some(0) };
        Self {
            session,
            focus: session.initial_focus(),
            rows,
            selected,
            input: String::new(),
            max_input_len: MAX_NAME_LEN,
            last_error: None,
            status_message: String::from("Welcome to Chef!"),
            exited: false,
        }
    }

    pub fn with_max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = max.clamp(1, MAX_NAME_LEN);
        self
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.selected.and_then(|i| self.rows.get(i))
    }

    /// Append to the input buffer unless it is already full.
    /// Returns whether the character was accepted.
    pub fn push_input(&mut self, c: char) -> bool {
        if self.input.chars().count() >= self.max_input_len {
            return false;
        }
        self.input.push(c);
        true
    }

    /// Keep the selection inside the current rows.
    pub fn clamp_selection(&mut self) {
        self.selected = match (self.selected, self.rows.len()) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some(i.min(len - 1)),
        };
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{record, test_state};

    use super::*;

    #[test]
    fn test_new_defaults() {
        let state = test_state(Session::Editor, &[]);
        assert_eq!(state.focus, Focus::Table);
        assert!(state.rows.is_empty());
        assert_eq!(state.selected, None);
        assert!(state.input.is_empty());
        assert!(state.last_error.is_none());
        assert!(!state.exited);
    }

    #[test]
    fn test_initial_focus_per_session() {
        assert_eq!(Session::Editor.initial_focus(), Focus::Table);
        assert_eq!(Session::List.initial_focus(), Focus::Table);
        assert_eq!(Session::Add.initial_focus(), Focus::Input);
        assert_eq!(Session::Remove.initial_focus(), Focus::Input);
    }

    #[test]
    fn test_selects_first_row_when_loaded_with_rows() {
        let state = EditorState::new(Session::List, vec![record(1, "milk")]);
        assert_eq!(state.selected, Some(0));
        assert_eq!(state.selected_record().map(|r| r.name.as_str()), Some("milk"));
    }

    #[test]
    fn test_push_input_respects_bound() {
        let mut state = test_state(Session::Add, &[]).with_max_input_len(3);
        assert!(state.push_input('a'));
        assert!(state.push_input('b'));
        assert!(state.push_input('ç'));
        assert!(!state.push_input('d'));
        assert_eq!(state.input, "abç");
    }

    #[test]
    fn test_max_input_len_is_clamped() {
        assert_eq!(test_state(Session::Add, &[]).with_max_input_len(0).max_input_len, 1);
        assert_eq!(
            test_state(Session::Add, &[]).with_max_input_len(10_000).max_input_len,
            MAX_NAME_LEN
        );
    }

    #[test]
    fn test_clamp_selection() {
        let mut state = test_state(Session::List, &["milk", "eggs"]);
        state.selected = Some(5);
        state.clamp_selection();
        assert_eq!(state.selected, Some(1));

        state.rows.clear();
        state.clamp_selection();
        assert_eq!(state.selected, None);
    }
}
