//! # StatusLine Component
//!
//! One line under the main area. The last store error wins over the status
//! message, so a failed action is visible on the very next frame.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::error::StoreError;
use crate::tui::component::Component;
use crate::tui::theme;

pub struct StatusLine<'a> {
    pub error: Option<&'a StoreError>,
    pub message: &'a str,
}

impl<'a> StatusLine<'a> {
    pub fn new(error: Option<&'a StoreError>, message: &'a str) -> Self {
        Self { error, message }
    }
}

impl Component for StatusLine<'_> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let line = match self.error {
            Some(e) => Line::from(vec![
                Span::styled(" ✗ ", Style::default().fg(theme::RED).add_modifier(Modifier::BOLD)),
                Span::styled(e.to_string(), Style::default().fg(theme::RED)),
            ]),
            None => Line::from(Span::styled(
                format!(" {}", self.message),
                Style::default().fg(theme::LAVENDER),
            )),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}
