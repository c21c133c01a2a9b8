//! # Welcome Page Component
//!
//! Home tab of the editor session.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme;

pub struct WelcomePage {
    pub item_count: usize,
}

impl WelcomePage {
    pub fn new(item_count: usize) -> Self {
        Self { item_count }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let bullet = |text: &'static str| {
            Line::from(Span::styled(text, Style::default().fg(theme::FG)))
        };
        let items = match self.item_count {
            1 => "1 item in your inventory".to_string(),
            n => format!("{n} items in your inventory"),
        };

        vec![
            Line::from(Span::styled(
                "Chef!",
                Style::default().fg(theme::BLUE).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Your new inventory cli tool",
                Style::default().fg(theme::LAVENDER).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("─".repeat(32), Style::default().fg(theme::PINK))),
            bullet("- Check your inventory"),
            bullet("- Keep a grocery list"),
            Line::default(),
            Line::from(Span::styled(
                items,
                Style::default().fg(theme::YELLOW),
            )),
            Line::from(Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(theme::FG).add_modifier(Modifier::DIM),
            )),
        ]
    }
}

impl Component for WelcomePage {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();
        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }
}
