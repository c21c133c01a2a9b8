//! # HelpBar Component
//!
//! Static key-binding hints for whatever currently has focus.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::state::{Focus, Session};
use crate::tui::Tab;
use crate::tui::component::Component;
use crate::tui::theme;

pub struct HelpBar {
    pub text: &'static str,
}

impl HelpBar {
    pub fn new(session: Session, focus: Focus, tab: Tab) -> Self {
        Self {
            text: help_text(session, focus, tab),
        }
    }
}

pub fn help_text(session: Session, focus: Focus, tab: Tab) -> &'static str {
    match (session, tab, focus) {
        (Session::Editor, Tab::Home, _) => "enter: open inventory • shift+tab: next tab • q: exit",
        (Session::Editor, Tab::Inventory, Focus::Table) => {
            "tab: focus input • ↑/↓: select • d: delete • shift+tab: next tab • q: exit"
        }
        (Session::Editor, Tab::Inventory, Focus::Input) => {
            "tab: focus table • enter: create new item • esc: exit"
        }
        (Session::Add, _, _) => "enter: add item • esc: exit",
        (Session::Remove, _, _) => "enter: remove item • esc: exit",
        (Session::List, _, _) => "↑/↓: select • enter: view entry • d: delete • q: exit",
    }
}

impl Component for HelpBar {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::YELLOW));
        let paragraph = Paragraph::new(self.text)
            .style(Style::default().fg(theme::FG))
            .block(block);
        frame.render_widget(paragraph, area);
    }
}
