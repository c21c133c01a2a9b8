//! # Header Component
//!
//! Top bar. The editor session shows its tabs here; single-view sessions
//! show a title naming what the session does.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Tabs};

use crate::core::state::Session;
use crate::tui::component::Component;
use crate::tui::theme;
use crate::tui::Tab;

pub struct Header {
    pub session: Session,
    pub tab: Tab,
}

impl Header {
    pub fn new(session: Session, tab: Tab) -> Self {
        Self { session, tab }
    }

    fn subtitle(&self) -> &'static str {
        match self.session {
            Session::Editor => "Inventory",
            Session::Add => "Add items",
            Session::List => "Inventory",
            Session::Remove => "Remove items",
        }
    }
}

impl Component for Header {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(Style::default().fg(theme::PINK));

        if self.session == Session::Editor {
            let titles = Tab::ALL.iter().map(|t| Line::from(t.title()));
            let tabs = Tabs::new(titles)
                .select(self.tab.index())
                .style(Style::default().fg(theme::FG))
                .highlight_style(
                    Style::default()
                        .fg(theme::BG)
                        .bg(theme::BLUE)
                        .add_modifier(Modifier::BOLD),
                )
                .block(block.title(" Chef! "));
            frame.render_widget(tabs, area);
            return;
        }

        let line = Line::from(vec![
            Span::styled(
                "Chef!",
                Style::default().fg(theme::BLUE).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" · "),
            Span::styled(self.subtitle(), Style::default().fg(theme::LAVENDER)),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}
