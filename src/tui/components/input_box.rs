//! # InputBox Component
//!
//! Single-line prompt for a new (or to-be-removed) item name.
//!
//! ## Props
//!
//! - `buffer`: the in-progress text, owned by `EditorState`
//! - `focused`: whether keystrokes currently land here
//! - `max_len`: input bound, shown as a `n/max` counter
//! - `placeholder`: dim hint shown while the buffer is empty
//!
//! The buffer scrolls horizontally: when it is wider than the box, only the
//! tail is shown so the cursor stays visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::Component;
use crate::tui::theme;

pub struct InputBox<'a> {
    pub buffer: &'a str,
    pub focused: bool,
    pub max_len: usize,
    pub title: &'a str,
    pub placeholder: &'a str,
}

impl<'a> InputBox<'a> {
    pub fn new(buffer: &'a str, focused: bool, max_len: usize) -> Self {
        Self {
            buffer,
            focused,
            max_len,
            title: " New item ",
            placeholder: "add an item?",
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

impl Component for InputBox<'_> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let counter = format!(" {}/{} ", self.buffer.chars().count(), self.max_len);
        let block = theme::panel(self.title, self.focused)
            .title_top(Line::from(counter).right_aligned());

        // Leave one column for the cursor
        let inner_width = area.width.saturating_sub(3) as usize;
        let visible = tail_for_display(self.buffer, inner_width);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder)
                .style(Style::default().fg(theme::FG).add_modifier(Modifier::DIM))
        } else {
            Paragraph::new(visible).style(Style::default().fg(theme::FG))
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused && area.width > 2 && area.height > 2 {
            let x = area.x + 1 + visible.width() as u16;
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

/// The longest suffix of `text` that fits in `max_width` terminal columns.
pub fn tail_for_display(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    &text[start..]
}
