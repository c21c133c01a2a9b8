//! # ItemTable Component
//!
//! Renders the cached rows as an ID / Name / Count / Added table with the
//! selected row highlighted.
//!
//! The widget state (`TableState`) is rebuilt from `EditorState::selected`
//! on every frame, so rendering never writes back into the editor.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};

use crate::core::record::Record;
use crate::tui::component::Component;
use crate::tui::theme;

pub struct ItemTable<'a> {
    pub rows: &'a [Record],
    pub selected: Option<usize>,
    pub focused: bool,
}

impl<'a> ItemTable<'a> {
    pub fn new(rows: &'a [Record], selected: Option<usize>, focused: bool) -> Self {
        Self {
            rows,
            selected,
            focused,
        }
    }
}

impl Component for ItemTable<'_> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let title = format!(" Inventory ({}) ", self.rows.len());
        let block = theme::panel(&title, self.focused);

        if self.rows.is_empty() {
            let empty = Paragraph::new("Nothing here yet.")
                .style(Style::default().fg(theme::FG).add_modifier(Modifier::DIM))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(["ID", "Name", "Count", "Added"])
            .style(Style::default().fg(theme::FG).add_modifier(Modifier::UNDERLINED))
            .bottom_margin(1);

        let rows = self.rows.iter().map(|record| {
            Row::new(vec![
                Cell::from(record.id.to_string()),
                Cell::from(record.name.clone()),
                Cell::from(record.count.to_string()),
                Cell::from(format_added(record)),
            ])
        });

        let highlight = if self.focused {
            theme::selected_row()
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Min(10),
                Constraint::Length(5),
                Constraint::Length(6),
            ],
        )
        .header(header)
        .column_spacing(2)
        .row_highlight_style(highlight)
        .block(block);

        let mut table_state = TableState::default().with_selected(self.selected);
        frame.render_stateful_widget(table, area, &mut table_state);
    }
}

/// Creation date as "Jan 15" in local time.
fn format_added(record: &Record) -> String {
    record
        .created_at
        .with_timezone(&Local)
        .format("%b %d")
        .to_string()
}
