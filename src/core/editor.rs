//! # Editor
//!
//! Binds an [`EditorState`] to an injected [`Store`]. Each dispatched action
//! runs to completion, including any store round-trip, before `dispatch`
//! returns, so no two store operations ever overlap.
//!
//! ```text
//! Action → update() → Effect::Create(name) → store.create() → Action::Created(result) → update()
//! ```

use log::info;

use crate::core::action::{Action, Effect, update};
use crate::core::error::StoreError;
use crate::core::state::{EditorState, Session};
use crate::core::store::Store;

/// What the event loop should do after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Editor<S: Store> {
    state: EditorState,
    store: S,
}

impl<S: Store> Editor<S> {
    /// Load the initial rows and start a session.
    ///
    /// Fails if the store can't list its records; there is no degraded mode.
    pub fn open(mut store: S, session: Session) -> Result<Self, StoreError> {
        let rows = store.list_all()?;
        info!("Opened {:?} session with {} items", session, rows.len());
        Ok(Self {
            state: EditorState::new(session, rows),
            store,
        })
    }

    pub fn with_max_input_len(mut self, max: usize) -> Self {
        self.state = self.state.with_max_input_len(max);
        self
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// End the session and hand the store back.
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn dispatch(&mut self, action: Action) -> Flow {
        let mut next = Some(action);
        while let Some(action) = next.take() {
            match update(&mut self.state, action) {
                Effect::None => {}
                Effect::Quit => return Flow::Quit,
                Effect::Create(name) => {
                    next = Some(Action::Created(self.store.create(&name)));
                }
                Effect::Delete(name) => {
                    let result = self.store.delete(&name);
                    next = Some(Action::Deleted { name, result });
                }
            }
        }
        Flow::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Focus;
    use crate::test_support::MemoryStore;

    fn editor(session: Session, names: &[&str]) -> Editor<MemoryStore> {
        Editor::open(MemoryStore::with_names(names), session).unwrap()
    }

    fn type_and_submit(editor: &mut Editor<MemoryStore>, text: &str) -> Flow {
        for c in text.chars() {
            editor.dispatch(Action::InputChar(c));
        }
        editor.dispatch(Action::Submit)
    }

    #[test]
    fn test_open_fails_when_store_unavailable() {
        let mut store = MemoryStore::default();
        store.fail_with = Some(StoreError::Unavailable("no connection".to_string()));
        let result = Editor::open(store, Session::Editor);
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }

    #[test]
    fn test_submit_milk_into_empty_store() {
        let mut editor = editor(Session::Editor, &[]);
        editor.dispatch(Action::ToggleFocus);
        assert_eq!(type_and_submit(&mut editor, "Milk"), Flow::Continue);

        let state = editor.state();
        assert_eq!(state.rows.len(), 1);
        assert_eq!(state.rows[0].id, 1);
        assert_eq!(state.rows[0].name, "milk");
        assert_eq!(state.rows[0].count, 1);
        assert_eq!(state.input, "");
        assert_eq!(editor.store().names(), vec!["milk"]);
    }

    #[test]
    fn test_blank_submit_makes_no_store_call() {
        let mut editor = editor(Session::Add, &[]);
        let calls = editor.store().calls;
        type_and_submit(&mut editor, "   ");

        assert_eq!(editor.store().calls, calls);
        assert!(editor.state().rows.is_empty());
        assert_eq!(editor.state().last_error, Some(StoreError::Validation("empty name")));
    }

    #[test]
    fn test_delete_eggs_then_delete_again() {
        let mut editor = editor(Session::Editor, &["milk", "eggs"]);
        editor.dispatch(Action::SelectNext);
        editor.dispatch(Action::DeleteSelected);

        let names: Vec<&str> = editor.state().rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["milk"]);
        assert_eq!(editor.store().names(), vec!["milk"]);

        // Second delete of "eggs" goes through the remove flow and misses
        let mut editor = Editor::open(editor.into_store(), Session::Remove).unwrap();
        type_and_submit(&mut editor, "eggs");
        assert_eq!(
            editor.state().last_error,
            Some(StoreError::NotFound("eggs".to_string()))
        );
        assert_eq!(editor.state().rows.len(), 1);
        assert_eq!(editor.state().input, "eggs");
    }

    #[test]
    fn test_store_failure_is_kept_as_state() {
        let mut editor = editor(Session::Add, &[]);
        editor.store.fail_with = Some(StoreError::Unavailable("database is locked".to_string()));
        type_and_submit(&mut editor, "milk");

        assert!(matches!(editor.state().last_error, Some(StoreError::Unavailable(_))));
        assert_eq!(editor.state().focus, Focus::Input);
        assert_eq!(editor.state().input, "milk");
        assert!(editor.state().rows.is_empty());
    }

    #[test]
    fn test_quit_from_either_focus_makes_no_store_calls() {
        for toggles in [0, 1] {
            let mut editor = editor(Session::Editor, &["milk"]);
            for _ in 0..toggles {
                editor.dispatch(Action::ToggleFocus);
            }
            let calls = editor.store().calls;
            assert_eq!(editor.dispatch(Action::Quit), Flow::Quit);
            assert_eq!(editor.dispatch(Action::Submit), Flow::Quit);
            assert_eq!(editor.dispatch(Action::DeleteSelected), Flow::Quit);
            assert_eq!(editor.store().calls, calls);
        }
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let mut editor = editor(Session::Add, &["eggs"]);
        type_and_submit(&mut editor, "Eggs");
        assert_eq!(editor.state().rows.len(), 2);
        assert_eq!(editor.store().names(), vec!["eggs", "eggs"]);
    }

    #[test]
    fn test_max_input_len_applies_to_typing() {
        let mut editor = editor(Session::Add, &[]).with_max_input_len(3);
        type_and_submit(&mut editor, "bananas");
        assert_eq!(editor.state().rows[0].name, "ban");
    }
}
