//! Chef library exports for testing

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

use crate::core::state::Session;

/// Session variant selected by the positional command token.
///
/// Parsing is permissive: any token that isn't recognized launches the
/// default interactive editor instead of failing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Command {
    Add,
    List,
    Remove,
    Write,
    #[default]
    Editor,
}

impl Command {
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("add") => Command::Add,
            Some("list") => Command::List,
            Some("remove") => Command::Remove,
            Some("write") => Command::Write,
            _ => Command::Editor,
        }
    }

    /// `write` is the older spelling of `add` and opens the same session.
    pub fn session(self) -> Session {
        match self {
            Command::Add | Command::Write => Session::Add,
            Command::List => Session::List,
            Command::Remove => Session::Remove,
            Command::Editor => Session::Editor,
        }
    }
}
