//! Palette and shared styles.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType};

pub const BLUE: Color = Color::Rgb(0x89, 0xb4, 0xfa);
pub const PINK: Color = Color::Rgb(0xf5, 0xc2, 0xe7);
pub const YELLOW: Color = Color::Rgb(0xf9, 0xe2, 0xaf);
pub const LAVENDER: Color = Color::Rgb(0xb4, 0xbe, 0xfe);
pub const BG: Color = Color::Rgb(0x11, 0x11, 0x1b);
pub const FG: Color = Color::Rgb(0xcd, 0xd6, 0xf4);
pub const RED: Color = Color::Rgb(0xf3, 0x8b, 0xa8);

/// Rounded pink border for the focused view, plain dim border otherwise.
pub fn panel(title: &str, focused: bool) -> Block<'_> {
    let block = Block::bordered().title(title);
    if focused {
        block
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(PINK))
            .title_style(Style::default().fg(PINK).add_modifier(Modifier::BOLD))
    } else {
        block.border_style(Style::default().fg(FG).add_modifier(Modifier::DIM))
    }
}

pub fn selected_row() -> Style {
    Style::default().fg(BG).bg(YELLOW).add_modifier(Modifier::BOLD)
}
